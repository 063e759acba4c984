//! Store error types for tt-store.

use thiserror::Error;
use tt_core::entities::InvalidEntry;

/// Errors from import, bulk update, and slot operations.
///
/// Every variant is recoverable: the operation that raised it leaves the
/// working collection exactly as it was.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input text is not valid JSON.
    #[error("Malformed JSON: {0}")]
    MalformedEncoding(String),

    /// Parsed JSON is neither an array nor an object with a `technologies` array.
    #[error("Expected an array of technologies or an object with a \"technologies\" array")]
    InvalidPayloadShape,

    /// Every candidate failed validation.
    #[error("No valid technologies to import ({} rejected)", rejected.len())]
    NoValidEntries { rejected: Vec<InvalidEntry> },

    /// A bulk update was requested with nothing selected.
    #[error("No technologies selected")]
    EmptySelection,

    /// The durable slot could not be read or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Entity lookup returned no result.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// User input failed field rules.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::StorageUnavailable(error.to_string())
    }
}
