//! Error types for the Notemark store layer
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend call failed: {0}")]
    Backend(#[from] BackendError),
}

impl serde::Serialize for StoreError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
