use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Technology;

/// An import candidate that failed one or more field rules.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvalidEntry {
    /// 1-based position in the imported sequence.
    pub index: usize,
    /// Best-effort display label (title, original id, or `Entry N`).
    pub preview: String,
    /// Every rule the candidate violated, in rule order.
    pub errors: Vec<String>,
}

/// Result of validating a raw candidate list: sanitized survivors plus
/// diagnostics for everything that was rejected. Both keep input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: Vec<Technology>,
    pub invalid: Vec<InvalidEntry>,
}

impl ValidationReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}
