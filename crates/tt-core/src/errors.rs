//! Cross-cutting error types for techtrack.
//!
//! Domain-specific errors (`StoreError`, `CatalogError`) live in their own
//! crates. Everything converges into `anyhow` at the CLI boundary.

use thiserror::Error;

/// Errors raised while turning user input into core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input did not name a known value.
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
