//! Technology identifiers and ID generation.
//!
//! Identifiers are either numbers (assigned locally or by the demo catalog) or
//! free-form strings (supplied by import files or generated for imported items
//! that carry none). On the wire the two forms are untagged.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a tracked technology.
///
/// Ordering puts numeric ids before textual ones so that sets of ids iterate
/// deterministically.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(untagged)]
pub enum TechnologyId {
    Number(i64),
    Text(String),
}

impl TechnologyId {
    /// Interpret a raw JSON `id` field.
    ///
    /// Integers and non-blank strings are kept, floats are kept as their
    /// textual form. Anything else (missing, null, blank, booleans, arrays,
    /// objects) yields `None` so the caller can generate an id.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            ),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for TechnologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TechnologyId {
    type Err = std::convert::Infallible;

    /// Numeric-looking input becomes a numeric id; everything else is text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number))
    }
}

impl From<i64> for TechnologyId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TechnologyId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Find the stored id that `arg` refers to.
///
/// Digit-only arguments parse as numbers, so a text id such as `"42"` is
/// matched when no numeric id 42 is stored. An exact match always wins.
pub fn resolve_id<'a>(
    arg: &TechnologyId,
    existing: impl IntoIterator<Item = &'a TechnologyId>,
) -> Option<&'a TechnologyId> {
    let mut textual = None;
    for id in existing {
        if id == arg {
            return Some(id);
        }
        if let (TechnologyId::Text(text), TechnologyId::Number(n)) = (id, arg) {
            if textual.is_none() && *text == n.to_string() {
                textual = Some(id);
            }
        }
    }
    textual
}

static IMPORT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate an id for the imported item at zero-based `index`.
///
/// Format: `{unix_millis}-{sequence}-{index}`. The process-wide sequence makes
/// ids unique even when two imports land within the same millisecond.
#[must_use]
pub fn generate_import_id(index: usize) -> TechnologyId {
    let millis = Utc::now().timestamp_millis();
    let sequence = IMPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TechnologyId::Text(format!("{millis}-{sequence}-{index}"))
}

/// Next free numeric id: one past the largest numeric id in use, or 1.
pub fn next_numeric_id<'a>(existing: impl IntoIterator<Item = &'a TechnologyId>) -> TechnologyId {
    let max = existing
        .into_iter()
        .filter_map(TechnologyId::as_number)
        .max()
        .unwrap_or(0);
    TechnologyId::Number(max.saturating_add(1))
}

/// Generate a study plan id.
#[must_use]
pub fn generate_plan_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let sequence = IMPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("pln-{millis:x}{sequence:04x}")
}
