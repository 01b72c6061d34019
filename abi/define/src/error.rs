//! Error types for ABI description parsing.

use thiserror::Error;

/// Errors raised while building a [`Description`](crate::Description).
///
/// Unrecognized entry kinds are not errors; they are recorded on the
/// description as dropped entries.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The ABI text is not valid JSON.
    #[error("ABI is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The ABI is valid JSON but not shaped like an entry list.
    #[error("Malformed ABI: {reason}")]
    MalformedInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A recognized entry has fields of the wrong shape.
    #[error("Malformed ABI entry at index {index}: {source}")]
    MalformedEntry {
        /// Position of the entry in the raw list.
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
