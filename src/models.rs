//! Domain models
//!
//! Rust structs representing the entities held in the stores.
//! All models use serde for serialization to the frontend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A notebook, optionally nested under a parent notebook.
///
/// `parent_id` of `None` means root-level. `sort_order` is assigned by the
/// backend and is only meaningful relative to siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub parent_id: Option<String>,
    pub title: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

/// A markdown note belonging to exactly one notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub notebook_id: String,
    pub title: String,
    pub markdown: String,
    pub priority: i32,
    pub date: Option<NaiveDate>,
    /// Set by the backend on creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    /// Maintained by the backend; the client never computes this.
    pub updated_at: DateTime<Utc>,
}

/// A tag. Name uniqueness is the backend's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A transient user-facing notification.
///
/// Ids are client-generated and unique among currently-live notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    /// If set, the notification removes itself after this many milliseconds.
    pub timeout_ms: Option<u64>,
}

/// A single search hit, either a note or a notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchResult {
    Note(Note),
    Notebook(Notebook),
}

impl SearchResult {
    /// Display title of the underlying entity.
    pub fn title(&self) -> &str {
        match self {
            SearchResult::Note(note) => &note.title,
            SearchResult::Notebook(notebook) => &notebook.title,
        }
    }
}
