//! Notification sink
//!
//! A process-wide ordered list of transient user-facing messages. Every
//! domain store reports successes and failures here; the UI renders the list
//! and may dismiss entries manually before their timeout fires.

use std::time::Duration;

use uuid::Uuid;

use crate::config;
use crate::models::{Notification, Severity};
use crate::store::Store;

/// Handle to the shared notification list.
///
/// Cheap to clone; all clones append to the same list. Timed removal uses a
/// one-shot tokio timer, so `add` with a timeout must be called from within
/// a tokio runtime.
#[derive(Clone, Default)]
pub struct Notifier {
    notifications: Store<Vec<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying observable list, in insertion (= display) order.
    pub fn notifications(&self) -> &Store<Vec<Notification>> {
        &self.notifications
    }

    /// Appends a notification with a fresh id, scheduling automatic removal
    /// if a timeout is given. Returns the generated id.
    pub fn add(&self, message: String, severity: Severity, timeout_ms: Option<u64>) -> String {
        let id = Uuid::new_v4().to_string();
        let notification = Notification {
            id: id.clone(),
            message,
            severity,
            timeout_ms,
        };

        self.notifications.update(|mut list| {
            list.push(notification);
            list
        });

        if let Some(timeout_ms) = timeout_ms {
            let notifier = self.clone();
            let expired_id = id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(timeout_ms)).await;
                notifier.remove(&expired_id);
            });
        }

        id
    }

    /// Removes a notification by id. Removing an absent id is a no-op.
    pub fn remove(&self, id: &str) {
        self.notifications.update(|mut list| {
            list.retain(|n| n.id != id);
            list
        });
    }

    /// Success notification with the default timeout.
    pub fn success(&self, message: impl Into<String>) -> String {
        self.add(
            message.into(),
            Severity::Success,
            Some(config::SUCCESS_TIMEOUT_MS),
        )
    }

    /// Error notification with the default timeout.
    pub fn error(&self, message: impl Into<String>) -> String {
        self.add(
            message.into(),
            Severity::Error,
            Some(config::ERROR_TIMEOUT_MS),
        )
    }

    /// Informational notification with the default timeout.
    pub fn info(&self, message: impl Into<String>) -> String {
        self.add(message.into(), Severity::Info, Some(config::INFO_TIMEOUT_MS))
    }
}
