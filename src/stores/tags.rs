//! Tag store
//!
//! Two views onto the backend's tag table: all tags, and the tags of the
//! currently open note. The backend owns the tag set (it creates tags on
//! first use and garbage-collects orphans), so both views are reloaded after
//! every association change rather than patched locally.

use std::sync::Arc;

use crate::backend::Backend;
use crate::gate::Gate;
use crate::models::Tag;
use crate::notify::Notifier;
use crate::store::Store;

#[derive(Clone)]
pub struct TagStore {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    all_tags: Store<Vec<Tag>>,
    note_tags: Store<Vec<Tag>>,
    all_tags_gate: Gate,
    note_tags_gate: Gate,
}

impl TagStore {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            all_tags: Store::new(Vec::new()),
            note_tags: Store::new(Vec::new()),
            all_tags_gate: Gate::new(),
            note_tags_gate: Gate::new(),
        }
    }

    /// Every tag known to the backend.
    pub fn all_tags(&self) -> &Store<Vec<Tag>> {
        &self.all_tags
    }

    /// Tags of the currently open note.
    pub fn note_tags(&self) -> &Store<Vec<Tag>> {
        &self.note_tags
    }

    /// Replaces the all-tags view. Failures keep the previous contents.
    pub async fn load_all_tags(&self) {
        let ticket = self.all_tags_gate.issue();
        let result = self.backend.list_all_tags().await;
        if !self.all_tags_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale tag list response");
            return;
        }
        match result {
            Ok(list) => self.all_tags.set(list),
            Err(e) => {
                tracing::warn!("Failed to load tags: {e}");
                self.notifier.error(format!("Failed to load tags: {e}"));
            }
        }
    }

    /// Replaces the current-note view. Failures keep the previous contents.
    pub async fn load_note_tags(&self, note_id: &str) {
        let ticket = self.note_tags_gate.issue();
        let result = self.backend.list_note_tags(note_id).await;
        if !self.note_tags_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale note tag response");
            return;
        }
        match result {
            Ok(list) => self.note_tags.set(list),
            Err(e) => {
                tracing::warn!("Failed to load tags for note {note_id}: {e}");
                self.notifier.error(format!("Failed to load note tags: {e}"));
            }
        }
    }

    /// Tags a note, then reloads both views for the authoritative tag set.
    pub async fn add_tag(&self, note_id: &str, tag_name: &str) {
        match self.backend.add_tag_to_note(note_id, tag_name).await {
            Ok(()) => {
                self.load_all_tags().await;
                self.load_note_tags(note_id).await;
                self.notifier
                    .success(format!("Tag \"{tag_name}\" added"));
            }
            Err(e) => {
                tracing::warn!("Failed to add tag \"{tag_name}\" to note {note_id}: {e}");
                self.notifier.error(format!("Failed to add tag: {e}"));
            }
        }
    }

    /// Untags a note, then reloads both views for the authoritative tag set.
    pub async fn remove_tag(&self, note_id: &str, tag_name: &str) {
        match self.backend.remove_tag_from_note(note_id, tag_name).await {
            Ok(()) => {
                self.load_all_tags().await;
                self.load_note_tags(note_id).await;
                self.notifier
                    .success(format!("Tag \"{tag_name}\" removed"));
            }
            Err(e) => {
                tracing::warn!("Failed to remove tag \"{tag_name}\" from note {note_id}: {e}");
                self.notifier.error(format!("Failed to remove tag: {e}"));
            }
        }
    }
}
