//! Notemark store layer
//!
//! Reactive client-side state for the Notemark note-taking app: observable
//! containers for notebooks, notes, tags, backlinks, search and theme, each
//! kept in sync with an opaque asynchronous backend, plus the notification
//! sink they all report to.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod notify;
pub mod store;
pub mod stores;

#[cfg(test)]
pub(crate) mod testing;
