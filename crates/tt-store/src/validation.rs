//! Per-item validation of import candidates.
//!
//! [`build`] never fails: every candidate ends up either in
//! `ValidationReport::valid` (sanitized) or `ValidationReport::invalid` (with
//! every rule it broke). Whether a report is usable is decided by the caller.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;
use tt_core::entities::{InvalidEntry, Technology, ValidationReport};
use tt_core::enums::TechStatus;
use tt_core::ids::{TechnologyId, generate_import_id};

/// Minimum title length, in characters, after trimming.
pub const MIN_TITLE_CHARS: usize = 2;

/// Minimum description length, in characters, after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

pub const TITLE_ERROR: &str = "title missing or too short";
pub const DESCRIPTION_ERROR: &str = "description missing or too short";

/// Trimmed string value, or `""` for anything that is not a string.
fn sanitize(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Title and description rules shared by import and `add`.
#[must_use]
pub fn text_errors(title: &str, description: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if title.chars().count() < MIN_TITLE_CHARS {
        errors.push(TITLE_ERROR.to_string());
    }
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.push(DESCRIPTION_ERROR.to_string());
    }
    errors
}

/// Parse an optional `deadline` field.
///
/// Absent, `null`, and blank strings mean "no deadline". Anything else must
/// be a `YYYY-MM-DD` date.
fn parse_deadline(value: Option<&Value>) -> Result<Option<NaiveDate>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(Value::String(raw)) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("deadline \"{raw}\" is not a valid date")),
        Some(other) => Err(format!("deadline \"{other}\" is not a valid date")),
    }
}

/// Validate every candidate and split them into valid and invalid.
///
/// Indices in the report are 1-based. Non-object candidates are treated as
/// empty objects and so fail the title and description rules. Valid items
/// without a usable id get a generated one; so does a valid item whose id
/// repeats one already accepted in this batch.
#[must_use]
pub fn build(items: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashSet<TechnologyId> = HashSet::new();

    for (position, item) in items.iter().enumerate() {
        let index = position + 1;
        let candidate = item.as_object();
        let field = |name: &str| candidate.and_then(|map| map.get(name));

        let title = sanitize(field("title"));
        let description = sanitize(field("description"));
        let status_text = sanitize(field("status"));
        let notes = field("notes")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut errors = text_errors(&title, &description);

        let status = if status_text.is_empty() {
            Some(TechStatus::NotStarted)
        } else {
            TechStatus::from_wire(&status_text)
        };
        if status.is_none() {
            let raw = field("status").and_then(Value::as_str).unwrap_or_default();
            errors.push(format!("status \"{raw}\" is not supported"));
        }

        let deadline = match parse_deadline(field("deadline")) {
            Ok(deadline) => deadline,
            Err(message) => {
                errors.push(message);
                None
            }
        };

        let supplied_id = field("id").and_then(TechnologyId::from_json);

        match status {
            Some(status) if errors.is_empty() => {
                let id = match supplied_id {
                    Some(id) if !seen.contains(&id) => id,
                    Some(duplicate) => {
                        tracing::warn!(%duplicate, index, "duplicate id in import, generating a new one");
                        generate_import_id(position)
                    }
                    None => generate_import_id(position),
                };
                seen.insert(id.clone());
                report.valid.push(Technology {
                    id,
                    title,
                    description,
                    status,
                    notes,
                    deadline,
                });
            }
            _ => {
                let preview = if title.is_empty() {
                    supplied_id.map_or_else(|| format!("Entry {index}"), |id| id.to_string())
                } else {
                    title
                };
                report.invalid.push(InvalidEntry {
                    index,
                    preview,
                    errors,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn valid_candidate_is_sanitized() {
        let report = build(&[json!({
            "id": 7,
            "title": "  Rust  ",
            "description": "  Ownership and borrowing ",
            "status": " in-progress ",
            "notes": "  keep spaces  ",
            "deadline": "2026-12-01"
        })]);

        assert!(report.invalid.is_empty());
        assert_eq!(
            report.valid,
            vec![Technology {
                id: TechnologyId::Number(7),
                title: "Rust".into(),
                description: "Ownership and borrowing".into(),
                status: TechStatus::InProgress,
                notes: "  keep spaces  ".into(),
                deadline: NaiveDate::from_ymd_opt(2026, 12, 1),
            }]
        );
    }

    #[test]
    fn missing_status_defaults_to_not_started() {
        let report = build(&[json!({"title": "Go", "description": "Goroutines and channels"})]);
        assert_eq!(report.valid[0].status, TechStatus::NotStarted);
        assert_eq!(report.valid[0].notes, "");
    }

    #[test]
    fn non_string_status_defaults_to_not_started() {
        let report =
            build(&[json!({"title": "Go", "description": "Goroutines and channels", "status": 3})]);
        assert_eq!(report.valid.len(), 1);
        assert_eq!(report.valid[0].status, TechStatus::NotStarted);
    }

    #[test]
    fn unsupported_status_is_reported_verbatim() {
        let report = build(&[json!({
            "title": "Go",
            "description": "A long enough description",
            "status": "bogus "
        })]);
        assert!(report.valid.is_empty());
        assert_eq!(
            report.invalid,
            vec![InvalidEntry {
                index: 1,
                preview: "Go".into(),
                errors: vec!["status \"bogus \" is not supported".into()],
            }]
        );
    }

    #[test]
    fn all_rules_are_evaluated() {
        let report = build(&[json!({"title": "x", "description": "short", "status": "done"})]);
        assert_eq!(
            report.invalid[0].errors,
            vec![
                TITLE_ERROR.to_string(),
                DESCRIPTION_ERROR.to_string(),
                "status \"done\" is not supported".to_string(),
            ]
        );
    }

    #[rstest]
    #[case::title(json!({"title": "Go", "id": 9, "description": "x"}), "Go")]
    #[case::id(json!({"id": 9, "description": "x"}), "9")]
    #[case::text_id(json!({"id": "abc", "description": "x"}), "abc")]
    #[case::fallback(json!({"description": "x"}), "Entry 1")]
    #[case::non_object(json!("just a string"), "Entry 1")]
    fn preview_prefers_title_then_id(#[case] candidate: Value, #[case] expected: &str) {
        let report = build(&[candidate]);
        assert_eq!(report.invalid[0].preview, expected);
    }

    #[test]
    fn indices_are_one_based_and_ordered() {
        let report = build(&[
            json!({"title": "Go", "description": "Goroutines and channels"}),
            json!(null),
            json!(42),
        ]);
        let indices: Vec<_> = report.invalid.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![2, 3]);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn missing_ids_are_generated_uniquely() {
        let report = build(&[
            json!({"title": "Go", "description": "Goroutines and channels"}),
            json!({"title": "Go", "description": "Goroutines and channels"}),
        ]);
        assert_eq!(report.valid.len(), 2);
        assert_ne!(report.valid[0].id, report.valid[1].id);
        assert!(report.valid[0].id.to_string().ends_with("-0"));
    }

    #[test]
    fn duplicate_ids_get_regenerated() {
        let report = build(&[
            json!({"id": 1, "title": "Go", "description": "Goroutines and channels"}),
            json!({"id": 1, "title": "Rust", "description": "Ownership and borrowing"}),
        ]);
        assert_eq!(report.valid[0].id, TechnologyId::Number(1));
        assert_ne!(report.valid[1].id, TechnologyId::Number(1));
    }

    #[test]
    fn invalid_deadline_is_reported() {
        let report = build(&[json!({
            "title": "Go",
            "description": "Goroutines and channels",
            "deadline": "next week"
        })]);
        assert_eq!(
            report.invalid[0].errors,
            vec!["deadline \"next week\" is not a valid date".to_string()]
        );
    }

    #[test]
    fn blank_deadline_means_none() {
        let report = build(&[json!({
            "title": "Go",
            "description": "Goroutines and channels",
            "deadline": "  "
        })]);
        assert_eq!(report.valid[0].deadline, None);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let report = build(&[json!({"title": "Я", "description": "Девять бу"})]);
        assert_eq!(report.invalid[0].errors.len(), 2);
        let report = build(&[json!({"title": "Яз", "description": "Десять бук"})]);
        assert_eq!(report.valid.len(), 1);
    }
}
