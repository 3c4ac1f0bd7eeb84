//! Per-operation request sequencing
//!
//! Overlapping calls to the same load operation race at the backend; without
//! sequencing the last response to *arrive* would win, regardless of which
//! call was issued last. A [`Gate`] tags each outgoing call with a monotonic
//! ticket so stores can discard responses that are no longer the latest
//! issued for that operation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A ticket identifying one issued call through a [`Gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic sequencer for one entity/operation key.
#[derive(Clone, Default)]
pub struct Gate {
    latest: Arc<AtomicU64>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, invalidating all previously issued ones.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recently issued one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
