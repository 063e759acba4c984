//! Import payload normalization.
//!
//! An import file is either a bare array of candidates or an object carrying
//! the array under `technologies` (the export format). This is the only place
//! an import fails on shape; per-item problems are reported by
//! [`crate::validation`].

use serde_json::Value;

use crate::error::StoreError;

/// Extract the candidate sequence from a parsed payload.
///
/// Returns the inner array unchanged: same length, same order, same values.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPayloadShape`] for any other shape, including
/// an object whose `technologies` key is not an array.
pub fn normalize(payload: &Value) -> Result<&[Value], StoreError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(map) => match map.get("technologies") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(StoreError::InvalidPayloadShape),
        },
        _ => Err(StoreError::InvalidPayloadShape),
    }
}
