//! Error taxonomy for store operations
//!
//! All failures surface synchronously to the caller. A missing file on load
//! is not an error; it reads as an empty document.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Store`](crate::store::Store) operations.
#[derive(Debug, Error)]
pub enum PrefError {
    /// The file exists but is not a valid JSON object of entries.
    /// The in-memory store is left unchanged.
    #[error("malformed JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be written (missing parent directory, permission
    /// denied, or an entry that failed to serialize).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `reconcile` was called on a store that never registered a reconciler.
    #[error("no reconciler registered for this store")]
    NoReconciler,
}
