//! Application state
//!
//! Central wiring of the store layer. Instead of ambient module-level
//! singletons, everything reactive hangs off one `AppState` that the shell
//! constructs at startup and hands to whatever consumes it; tests build
//! their own against a mock backend.

use std::sync::Arc;

use crate::backend::Backend;
use crate::notify::Notifier;
use crate::stores::{
    BacklinkStore, DisplayRoot, NotebookStore, NoteStore, PreferenceStorage, SearchStore,
    TagStore, ThemeStore, UiStore,
};

/// All stores of one application instance, sharing a backend and a
/// notification sink.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Notifier,
    pub notebooks: NotebookStore,
    pub notes: NoteStore,
    pub tags: TagStore,
    pub backlinks: BacklinkStore,
    pub search: SearchStore,
    pub theme: ThemeStore,
    pub ui: UiStore,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn Backend>,
        storage: Option<Arc<dyn PreferenceStorage>>,
        display: Option<Arc<dyn DisplayRoot>>,
    ) -> Self {
        tracing::info!("Initializing store layer");
        let notifier = Notifier::new();
        Self {
            notebooks: NotebookStore::new(Arc::clone(&backend), notifier.clone()),
            notes: NoteStore::new(Arc::clone(&backend), notifier.clone()),
            tags: TagStore::new(Arc::clone(&backend), notifier.clone()),
            backlinks: BacklinkStore::new(Arc::clone(&backend), notifier.clone()),
            search: SearchStore::new(backend, notifier.clone()),
            theme: ThemeStore::new(storage, display),
            ui: UiStore::new(),
            notifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::testing::MockBackend;

    #[tokio::test]
    async fn test_stores_share_one_notification_sink() {
        let mock = Arc::new(MockBackend::new());
        mock.fail("list_backlinks");
        mock.fail("search");
        let state = AppState::new(mock, None, None);

        state.backlinks.load_backlinks("n1").await;
        state.search.search("foo").await;

        let notifications = state.notifier.notifications().get();
        assert_eq!(notifications.len(), 2);
        assert!(notifications
            .iter()
            .all(|n| n.severity == Severity::Error));
    }
}
