//! Transient UI state
//!
//! Plain observable values with no backend or persistence behind them.

use crate::config;
use crate::store::Store;

#[derive(Clone)]
pub struct UiStore {
    /// Sidebar width in logical pixels; 0 means collapsed.
    sidebar_width: Store<u32>,
    selected_note_id: Store<Option<String>>,
}

impl UiStore {
    pub fn new() -> Self {
        Self {
            sidebar_width: Store::new(config::DEFAULT_SIDEBAR_WIDTH),
            selected_note_id: Store::new(None),
        }
    }

    pub fn sidebar_width(&self) -> &Store<u32> {
        &self.sidebar_width
    }

    pub fn selected_note_id(&self) -> &Store<Option<String>> {
        &self.selected_note_id
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}
