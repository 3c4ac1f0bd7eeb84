//! Notebook store
//!
//! Holds the flat list of notebooks (the tree is derived from `parent_id` at
//! render time) and keeps it synchronized with the backend.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config;
use crate::error::Result;
use crate::gate::Gate;
use crate::models::Notebook;
use crate::notify::Notifier;
use crate::store::Store;

/// Store for the notebook list.
#[derive(Clone)]
pub struct NotebookStore {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    notebooks: Store<Vec<Notebook>>,
    load_gate: Gate,
}

impl NotebookStore {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            notebooks: Store::new(Vec::new()),
            load_gate: Gate::new(),
        }
    }

    /// The observable notebook list.
    pub fn notebooks(&self) -> &Store<Vec<Notebook>> {
        &self.notebooks
    }

    /// Replaces the list with the backend's. On failure the previous
    /// contents are kept (stale-but-present) and an error is notified.
    pub async fn load_notebooks(&self) {
        let ticket = self.load_gate.issue();
        let result = self.backend.list_notebooks().await;
        if !self.load_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale notebook list response");
            return;
        }
        match result {
            Ok(list) => self.notebooks.set(list),
            Err(e) => {
                tracing::warn!("Failed to load notebooks: {e}");
                self.notifier.error(format!("Failed to load notebooks: {e}"));
            }
        }
    }

    /// Creates a notebook and appends the backend's record to the list.
    ///
    /// Failures are notified and also returned, so callers can abort flows
    /// that depend on the new notebook (e.g. navigating into it).
    pub async fn create_notebook(
        &self,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<Notebook> {
        tracing::info!("Creating notebook: {title}");
        match self
            .backend
            .create_notebook(title, parent_id, Some(config::DEFAULT_NOTEBOOK_ICON))
            .await
        {
            Ok(created) => {
                let notebook = created.clone();
                self.notebooks.update(move |mut list| {
                    list.push(notebook);
                    list
                });
                self.notifier
                    .success(format!("Notebook \"{}\" created", created.title));
                Ok(created)
            }
            Err(e) => {
                tracing::warn!("Failed to create notebook: {e}");
                self.notifier
                    .error(format!("Failed to create notebook: {e}"));
                Err(e.into())
            }
        }
    }

    /// Renames a notebook. The backend may normalize the title, so a full
    /// reload follows the call instead of a local patch.
    pub async fn rename_notebook(&self, id: &str, title: &str) {
        match self.backend.rename_notebook(id, title).await {
            Ok(()) => {
                self.notifier.success("Notebook renamed");
                self.load_notebooks().await;
            }
            Err(e) => {
                tracing::warn!("Failed to rename notebook {id}: {e}");
                self.notifier
                    .error(format!("Failed to rename notebook: {e}"));
            }
        }
    }

    /// Deletes a notebook, mirror-filtering it and its direct children out
    /// of the local list. Deeper descendants are the backend's cascade to
    /// clean up; they disappear from the client on the next load.
    pub async fn delete_notebook(&self, id: &str) {
        match self.backend.delete_notebook(id).await {
            Ok(()) => {
                let deleted = id.to_string();
                self.notebooks.update(move |mut list| {
                    list.retain(|n| {
                        n.id != deleted && n.parent_id.as_deref() != Some(deleted.as_str())
                    });
                    list
                });
                self.notifier.success("Notebook deleted");
            }
            Err(e) => {
                tracing::warn!("Failed to delete notebook {id}: {e}");
                self.notifier
                    .error(format!("Failed to delete notebook: {e}"));
            }
        }
    }

    /// Moves a notebook under a new parent. Sibling sort order is recomputed
    /// by the backend, so a full reload follows the call.
    pub async fn move_notebook(&self, id: &str, new_parent_id: Option<&str>) {
        match self.backend.move_notebook(id, new_parent_id).await {
            Ok(()) => {
                self.notifier.success("Notebook moved");
                self.load_notebooks().await;
            }
            Err(e) => {
                tracing::warn!("Failed to move notebook {id}: {e}");
                self.notifier.error(format!("Failed to move notebook: {e}"));
            }
        }
    }
}
