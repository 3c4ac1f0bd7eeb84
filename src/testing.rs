//! Test helpers shared by the store unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::backend::{Backend, BackendError, BackendResult};
use crate::models::{Note, Notebook, SearchResult, Tag};

/// In-memory [`Backend`] with injectable failures and per-call delays.
#[derive(Default)]
pub struct MockBackend {
    pub notebooks: Mutex<Vec<Notebook>>,
    pub notes: Mutex<Vec<Note>>,
    pub all_tags: Mutex<Vec<Tag>>,
    pub note_tags: Mutex<Vec<Tag>>,
    pub backlinks: Mutex<Vec<Note>>,
    pub search_results: Mutex<Vec<SearchResult>>,
    failures: Mutex<HashSet<&'static str>>,
    delays: Mutex<HashMap<&'static str, VecDeque<u64>>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every future call to `op` fail.
    pub fn fail(&self, op: &'static str) {
        self.failures.lock().unwrap().insert(op);
    }

    /// Queues per-call delays for `op`; each call consumes one entry.
    pub fn delay(&self, op: &'static str, delays_ms: &[u64]) {
        self.delays
            .lock()
            .unwrap()
            .entry(op)
            .or_default()
            .extend(delays_ms);
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    async fn call(&self, op: &'static str) -> BackendResult<()> {
        self.calls.lock().unwrap().push(op);
        let delay = self
            .delays
            .lock()
            .unwrap()
            .get_mut(op)
            .and_then(|queue| queue.pop_front());
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if self.failures.lock().unwrap().contains(op) {
            return Err(BackendError::new(format!("{op}: backend unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for MockBackend {
    // List operations snapshot their response before the injected delay, so
    // the delay models latency on an answer the server already computed.
    async fn list_notebooks(&self) -> BackendResult<Vec<Notebook>> {
        let snapshot = self.notebooks.lock().unwrap().clone();
        self.call("list_notebooks").await?;
        Ok(snapshot)
    }

    async fn create_notebook(
        &self,
        title: &str,
        parent_id: Option<&str>,
        icon: Option<&str>,
    ) -> BackendResult<Notebook> {
        self.call("create_notebook").await?;
        let mut notebooks = self.notebooks.lock().unwrap();
        let created = Notebook {
            id: Uuid::new_v4().to_string(),
            parent_id: parent_id.map(str::to_string),
            title: title.to_string(),
            icon: icon.map(str::to_string),
            sort_order: notebooks.len() as i32,
        };
        notebooks.push(created.clone());
        Ok(created)
    }

    async fn rename_notebook(&self, id: &str, title: &str) -> BackendResult<()> {
        self.call("rename_notebook").await?;
        // The mock normalizes titles the way the real backend does, so tests
        // can observe that a reload picked up the authoritative value.
        let normalized = title.trim().to_string();
        for notebook in self.notebooks.lock().unwrap().iter_mut() {
            if notebook.id == id {
                notebook.title = normalized.clone();
            }
        }
        Ok(())
    }

    async fn delete_notebook(&self, id: &str) -> BackendResult<()> {
        self.call("delete_notebook").await?;
        self.notebooks.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn move_notebook(&self, id: &str, new_parent_id: Option<&str>) -> BackendResult<()> {
        self.call("move_notebook").await?;
        let mut notebooks = self.notebooks.lock().unwrap();
        for notebook in notebooks.iter_mut() {
            if notebook.id == id {
                notebook.parent_id = new_parent_id.map(str::to_string);
            }
        }
        // Sibling order is recomputed server-side after a move.
        notebooks.sort_by(|a, b| a.title.cmp(&b.title));
        for (i, notebook) in notebooks.iter_mut().enumerate() {
            notebook.sort_order = i as i32;
        }
        Ok(())
    }

    async fn list_notes(&self, notebook_id: &str) -> BackendResult<Vec<Note>> {
        let snapshot: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.notebook_id == notebook_id)
            .cloned()
            .collect();
        self.call("list_notes").await?;
        Ok(snapshot)
    }

    async fn create_note(
        &self,
        notebook_id: &str,
        title: &str,
        markdown: &str,
    ) -> BackendResult<Note> {
        self.call("create_note").await?;
        let now = Utc::now();
        let created = Note {
            id: Uuid::new_v4().to_string(),
            notebook_id: notebook_id.to_string(),
            title: title.to_string(),
            markdown: markdown.to_string(),
            priority: 0,
            date: None,
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_note(
        &self,
        id: &str,
        title: &str,
        markdown: &str,
        priority: i32,
        date: Option<NaiveDate>,
    ) -> BackendResult<()> {
        self.call("update_note").await?;
        for note in self.notes.lock().unwrap().iter_mut() {
            if note.id == id {
                note.title = title.to_string();
                note.markdown = markdown.to_string();
                note.priority = priority;
                note.date = date;
                note.updated_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn delete_note(&self, id: &str) -> BackendResult<()> {
        self.call("delete_note").await?;
        self.notes.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn list_all_tags(&self) -> BackendResult<Vec<Tag>> {
        let snapshot = self.all_tags.lock().unwrap().clone();
        self.call("list_all_tags").await?;
        Ok(snapshot)
    }

    async fn list_note_tags(&self, _note_id: &str) -> BackendResult<Vec<Tag>> {
        let snapshot = self.note_tags.lock().unwrap().clone();
        self.call("list_note_tags").await?;
        Ok(snapshot)
    }

    async fn add_tag_to_note(&self, _note_id: &str, tag_name: &str) -> BackendResult<()> {
        self.call("add_tag_to_note").await?;
        let tag = Tag {
            id: Uuid::new_v4().to_string(),
            name: tag_name.to_string(),
        };
        let mut all_tags = self.all_tags.lock().unwrap();
        if !all_tags.iter().any(|t| t.name == tag.name) {
            all_tags.push(tag.clone());
        }
        let mut note_tags = self.note_tags.lock().unwrap();
        if !note_tags.iter().any(|t| t.name == tag.name) {
            note_tags.push(tag);
        }
        Ok(())
    }

    async fn remove_tag_from_note(&self, _note_id: &str, tag_name: &str) -> BackendResult<()> {
        self.call("remove_tag_from_note").await?;
        self.note_tags.lock().unwrap().retain(|t| t.name != tag_name);
        Ok(())
    }

    async fn list_backlinks(&self, _note_id: &str) -> BackendResult<Vec<Note>> {
        let snapshot = self.backlinks.lock().unwrap().clone();
        self.call("list_backlinks").await?;
        Ok(snapshot)
    }

    async fn search(&self, _query: &str) -> BackendResult<Vec<SearchResult>> {
        let snapshot = self.search_results.lock().unwrap().clone();
        self.call("search").await?;
        Ok(snapshot)
    }
}

pub fn notebook(id: &str, parent_id: Option<&str>, title: &str) -> Notebook {
    Notebook {
        id: id.to_string(),
        parent_id: parent_id.map(str::to_string),
        title: title.to_string(),
        icon: None,
        sort_order: 0,
    }
}

pub fn note(id: &str, notebook_id: &str, title: &str) -> Note {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Note {
        id: id.to_string(),
        notebook_id: notebook_id.to_string(),
        title: title.to_string(),
        markdown: String::new(),
        priority: 0,
        date: None,
        created_at: t0,
        updated_at: t0,
    }
}

pub fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
    }
}
