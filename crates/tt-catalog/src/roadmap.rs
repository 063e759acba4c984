//! Roadmap payload adapters.
//!
//! Roadmap sources disagree on where the list lives. Keys are tried in the
//! order of [`ROADMAP_KEYS`]; the first one present (and not `null`) wins,
//! even if a later key also holds entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CatalogError;

/// Lookup order for the roadmap entry list.
pub const ROADMAP_KEYS: [&str; 3] = ["technologies", "recipes", "items"];

const DEFAULT_CATEGORY: &str = "roadmap";
const DEFAULT_DIFFICULTY: &str = "intermediate";
const MISSING_DESCRIPTION: &str = "No description";

/// One technology suggested by a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Free text, lowercased.
    pub difficulty: String,
    pub resources: Vec<String>,
}

/// The entry list under the first present key, with the key that supplied it.
///
/// # Errors
///
/// [`CatalogError::Parse`] if the winning key does not hold an array.
pub fn select_entries(payload: &Value) -> Result<Option<(&'static str, &[Value])>, CatalogError> {
    for key in ROADMAP_KEYS {
        match payload.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => return Ok(Some((key, items.as_slice()))),
            Some(_) => {
                return Err(CatalogError::Parse(format!(
                    "roadmap key '{key}' is not an array"
                )));
            }
        }
    }
    Ok(None)
}

/// Non-empty string field.
fn text<'a>(item: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn string_list(item: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    item.get(key).and_then(Value::as_array).map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect()
    })
}

fn to_entry(position: usize, value: &Value) -> RoadmapEntry {
    let empty = Map::new();
    let item = value.as_object().unwrap_or(&empty);

    let title = text(item, "title")
        .or_else(|| text(item, "name"))
        .map_or_else(|| format!("Technology {}", position + 1), String::from);

    let description = text(item, "description").map_or_else(
        || {
            string_list(item, "instructions")
                .map(|steps| steps.into_iter().take(2).collect::<Vec<_>>().join(" "))
                .filter(|joined| !joined.is_empty())
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string())
        },
        String::from,
    );

    let category = text(item, "category")
        .or_else(|| text(item, "cuisine"))
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();

    let difficulty = text(item, "difficulty")
        .unwrap_or(DEFAULT_DIFFICULTY)
        .to_lowercase();

    let resources = string_list(item, "tags")
        .or_else(|| string_list(item, "resources"))
        .unwrap_or_default();

    RoadmapEntry {
        title,
        description,
        category,
        difficulty,
        resources,
    }
}

/// Normalize a roadmap payload into entries, in source order.
///
/// # Errors
///
/// [`CatalogError::Parse`] if the winning key is not an array,
/// [`CatalogError::EmptyRoadmap`] if no entries are found.
pub fn normalize_roadmap(payload: &Value) -> Result<Vec<RoadmapEntry>, CatalogError> {
    let Some((key, items)) = select_entries(payload)? else {
        return Err(CatalogError::EmptyRoadmap);
    };
    if items.is_empty() {
        return Err(CatalogError::EmptyRoadmap);
    }
    tracing::debug!(key, count = items.len(), "roadmap entries selected");
    Ok(items
        .iter()
        .enumerate()
        .map(|(position, item)| to_entry(position, item))
        .collect())
}
