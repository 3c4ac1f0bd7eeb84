//! Search store
//!
//! The current query text and the most recent result list. The query
//! container is settable independently of search execution (the input field
//! binds to it); `search` keeps the two consistent.

use std::sync::Arc;

use crate::backend::Backend;
use crate::gate::Gate;
use crate::models::SearchResult;
use crate::notify::Notifier;
use crate::store::Store;

#[derive(Clone)]
pub struct SearchStore {
    backend: Arc<dyn Backend>,
    notifier: Notifier,
    query: Store<String>,
    results: Store<Vec<SearchResult>>,
    search_gate: Gate,
}

impl SearchStore {
    pub fn new(backend: Arc<dyn Backend>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            query: Store::new(String::new()),
            results: Store::new(Vec::new()),
            search_gate: Gate::new(),
        }
    }

    /// The observable query text.
    pub fn query(&self) -> &Store<String> {
        &self.query
    }

    /// The observable result list.
    pub fn results(&self) -> &Store<Vec<SearchResult>> {
        &self.results
    }

    /// Runs a search for the literal query string. On success the result
    /// list is replaced and an informational notification names the query;
    /// on failure the list is cleared and an error is notified.
    pub async fn search(&self, query: &str) {
        self.query.set(query.to_string());

        let ticket = self.search_gate.issue();
        let result = self.backend.search(query).await;
        if !self.search_gate.is_latest(ticket) {
            tracing::debug!("Discarding stale search response for \"{query}\"");
            return;
        }
        match result {
            Ok(results) => {
                self.results.set(results);
                self.notifier
                    .info(format!("Search completed for \"{query}\""));
            }
            Err(e) => {
                tracing::warn!("Search for \"{query}\" failed: {e}");
                self.notifier
                    .error(format!("Failed to search for \"{query}\": {e}"));
                self.results.set(Vec::new());
            }
        }
    }
}
