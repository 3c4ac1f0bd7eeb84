//! Domain stores
//!
//! One store per entity type, each pairing observable containers with the
//! backend calls that keep them synchronized.

pub mod backlinks;
pub mod notebooks;
pub mod notes;
pub mod search;
pub mod tags;
pub mod theme;
pub mod ui;

pub use backlinks::BacklinkStore;
pub use notebooks::NotebookStore;
pub use notes::NoteStore;
pub use search::SearchStore;
pub use tags::TagStore;
pub use theme::{DisplayRoot, PreferenceStorage, Theme, ThemeStore};
pub use ui::UiStore;
