//! Backlink store
//!
//! Notes that link to the currently open note. A derived view: a failed load
//! clears it rather than showing links that belong to another note.

use std::sync::Arc;

use crate::backend::Backend;
use crate::gate::Gate;
use crate::models::Note;
use crate::notify::Notifier;
use crate::store::Store;

#[derive(Clone)]
pub struct BacklinkStore {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    backlinks: Store<Vec<Note>>,
    load_gate: Gate,
}

impl BacklinkStore {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            backlinks: Store::new(Vec::new()),
            load_gate: Gate::new(),
        }
    }

    /// The observable backlink list.
    pub fn backlinks(&self) -> &Store<Vec<Note>> {
        &self.backlinks
    }

    /// Replaces the list with the notes linking to `note_id`. On failure the
    /// list is cleared and an error is notified.
    pub async fn load_backlinks(&self, note_id: &str) {
        let ticket = self.load_gate.issue();
        let result = self.backend.list_backlinks(note_id).await;
        if !self.load_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale backlink response");
            return;
        }
        match result {
            Ok(list) => self.backlinks.set(list),
            Err(e) => {
                tracing::warn!("Failed to load backlinks for note {note_id}: {e}");
                self.notifier
                    .error(format!("Failed to load backlinks: {e}"));
                self.backlinks.set(Vec::new());
            }
        }
    }
}
