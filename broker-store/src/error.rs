//! Error types for the config store.

use broker_model::ModelError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The entry failed descriptor validation; nothing was stored.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An object with the same key is already stored.
    #[error("item already exists: {0}")]
    AlreadyExists(String),

    /// No object is stored under the key.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The submitted revision does not equal the stored revision.
    #[error("revision mismatch for {key}: stored {stored:?}, submitted {submitted:?}")]
    Conflict {
        key: String,
        stored: String,
        submitted: String,
    },

    /// Failure reported by a backing store implementation.
    #[error("backend error: {0}")]
    Backend(String),
}
