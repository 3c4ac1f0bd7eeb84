//! Observable value container
//!
//! The reactive primitive every store in this crate is built on: a shared
//! value whose subscribers are notified synchronously on every change.

use std::sync::{Arc, Mutex, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_listener_id: u64,
}

/// A reactive container holding a single value.
///
/// `set` and `update` replace the value and notify all subscribers in
/// registration order, synchronously with respect to the caller. Cloning a
/// `Store` yields a handle to the same shared value, which is how stores are
/// passed to the components that consume them.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    /// Replaces the value and notifies all subscribers.
    pub fn set(&self, value: T) {
        self.replace(|_| value);
    }

    /// Replaces the value with `f(current)` and notifies all subscribers.
    /// The read-modify-write is atomic: `f` runs under the internal lock, so
    /// it must not call back into this store.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.replace(|current| f(current));
    }

    fn replace(&self, f: impl FnOnce(T) -> T) {
        let (snapshot, listeners) = {
            let mut inner = self.inner.lock().unwrap();
            let current = inner.value.clone();
            inner.value = f(current);
            (
                inner.value.clone(),
                inner
                    .listeners
                    .iter()
                    .map(|(_, l)| Arc::clone(l))
                    .collect::<Vec<_>>(),
            )
        };
        // Listeners run outside the lock so they may call back into the store.
        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Registers a listener, invoking it immediately with the current value
    /// and again on every future change. The returned [`Subscription`]
    /// deregisters the listener when dropped or explicitly unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<T> = Arc::new(listener);
        let (id, snapshot) = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value.clone())
        };
        listener(&snapshot);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .lock()
                        .unwrap()
                        .listeners
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }
}

impl<T: Clone + Default + Send + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Deregistration handle returned by [`Store::subscribe`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Deregisters the listener now instead of on drop.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keeps the listener registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.cancel.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
