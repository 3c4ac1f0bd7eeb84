//! Backend boundary
//!
//! The stores never talk to persistence directly; everything goes through
//! this trait. The real implementation lives in the desktop shell, tests use
//! the mock in `crate::testing`.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Note, Notebook, SearchResult, Tag};

/// Opaque failure of a backend call.
///
/// The store layer makes no distinction between not-found, validation or
/// connectivity problems; every failure surfaces as its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Asynchronous request/response interface to the backend service.
///
/// All validation and referential integrity is the backend's responsibility;
/// the stores only mirror its answers.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_notebooks(&self) -> BackendResult<Vec<Notebook>>;

    async fn create_notebook(
        &self,
        title: &str,
        parent_id: Option<&str>,
        icon: Option<&str>,
    ) -> BackendResult<Notebook>;

    async fn rename_notebook(&self, id: &str, title: &str) -> BackendResult<()>;

    async fn delete_notebook(&self, id: &str) -> BackendResult<()>;

    async fn move_notebook(&self, id: &str, new_parent_id: Option<&str>) -> BackendResult<()>;

    async fn list_notes(&self, notebook_id: &str) -> BackendResult<Vec<Note>>;

    async fn create_note(
        &self,
        notebook_id: &str,
        title: &str,
        markdown: &str,
    ) -> BackendResult<Note>;

    async fn update_note(
        &self,
        id: &str,
        title: &str,
        markdown: &str,
        priority: i32,
        date: Option<NaiveDate>,
    ) -> BackendResult<()>;

    async fn delete_note(&self, id: &str) -> BackendResult<()>;

    async fn list_all_tags(&self) -> BackendResult<Vec<Tag>>;

    async fn list_note_tags(&self, note_id: &str) -> BackendResult<Vec<Tag>>;

    async fn add_tag_to_note(&self, note_id: &str, tag_name: &str) -> BackendResult<()>;

    async fn remove_tag_from_note(&self, note_id: &str, tag_name: &str) -> BackendResult<()>;

    async fn list_backlinks(&self, note_id: &str) -> BackendResult<Vec<Note>>;

    async fn search(&self, query: &str) -> BackendResult<Vec<SearchResult>>;
}
