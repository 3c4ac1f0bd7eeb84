//! Note store
//!
//! Holds the notes of the currently open notebook. Edits are patched into
//! the list optimistically from the arguments the user supplied; only the
//! backend-maintained `updated_at` stays stale until the next load.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::backend::Backend;
use crate::error::Result;
use crate::gate::Gate;
use crate::models::Note;
use crate::notify::Notifier;
use crate::store::Store;

/// Store for the note list of one notebook at a time.
#[derive(Clone)]
pub struct NoteStore {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    notes: Store<Vec<Note>>,
    load_gate: Gate,
}

impl NoteStore {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            notes: Store::new(Vec::new()),
            load_gate: Gate::new(),
        }
    }

    /// The observable note list.
    pub fn notes(&self) -> &Store<Vec<Note>> {
        &self.notes
    }

    /// Replaces the list with the notes of `notebook_id`. On failure the
    /// previous contents are kept and an error is notified.
    pub async fn load_notes(&self, notebook_id: &str) {
        let ticket = self.load_gate.issue();
        let result = self.backend.list_notes(notebook_id).await;
        if !self.load_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale note list response");
            return;
        }
        match result {
            Ok(list) => self.notes.set(list),
            Err(e) => {
                tracing::warn!("Failed to load notes for notebook {notebook_id}: {e}");
                self.notifier.error(format!("Failed to load notes: {e}"));
            }
        }
    }

    /// Creates a note and prepends the backend's record to the list.
    ///
    /// Failures are notified and also returned, so the caller can skip
    /// navigating to a note that was never created.
    pub async fn create_note(
        &self,
        notebook_id: &str,
        title: &str,
        markdown: &str,
    ) -> Result<Note> {
        tracing::info!("Creating note: {title}");
        match self.backend.create_note(notebook_id, title, markdown).await {
            Ok(created) => {
                let note = created.clone();
                self.notes.update(move |mut list| {
                    list.insert(0, note);
                    list
                });
                self.notifier
                    .success(format!("Note \"{}\" created", created.title));
                Ok(created)
            }
            Err(e) => {
                tracing::warn!("Failed to create note: {e}");
                self.notifier.error(format!("Failed to create note: {e}"));
                Err(e.into())
            }
        }
    }

    /// Saves a note, patching the supplied fields into the local record.
    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        markdown: &str,
        priority: i32,
        date: Option<NaiveDate>,
    ) {
        match self
            .backend
            .update_note(id, title, markdown, priority, date)
            .await
        {
            Ok(()) => {
                let id = id.to_string();
                let title = title.to_string();
                let markdown = markdown.to_string();
                self.notes.update(move |mut list| {
                    for note in list.iter_mut() {
                        if note.id == id {
                            note.title = title.clone();
                            note.markdown = markdown.clone();
                            note.priority = priority;
                            note.date = date;
                        }
                    }
                    list
                });
                self.notifier.success("Note saved");
            }
            Err(e) => {
                tracing::warn!("Failed to update note {id}: {e}");
                self.notifier.error(format!("Failed to save note: {e}"));
            }
        }
    }

    /// Deletes a note and filters it out of the local list.
    pub async fn delete_note(&self, id: &str) {
        match self.backend.delete_note(id).await {
            Ok(()) => {
                let id = id.to_string();
                self.notes.update(move |mut list| {
                    list.retain(|n| n.id != id);
                    list
                });
                self.notifier.success("Note deleted");
            }
            Err(e) => {
                tracing::warn!("Failed to delete note {id}: {e}");
                self.notifier.error(format!("Failed to delete note: {e}"));
            }
        }
    }
}
