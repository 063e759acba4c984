//! Bulk status updates over a selection.

use tt_core::entities::Technology;
use tt_core::enums::TechStatus;
use tt_core::selection::SelectionSet;

use crate::error::StoreError;

/// Set `target` on every technology in `selection`, then clear the selection.
///
/// Selected ids with no matching technology are ignored. Returns how many
/// technologies matched. Applying the same target twice yields the same
/// collection.
///
/// # Errors
///
/// [`StoreError::EmptySelection`] when nothing is selected; neither the
/// collection nor the selection is touched.
pub fn apply_bulk_status(
    collection: &mut [Technology],
    selection: &mut SelectionSet,
    target: TechStatus,
) -> Result<usize, StoreError> {
    if selection.is_empty() {
        return Err(StoreError::EmptySelection);
    }

    let mut matched = 0;
    for tech in collection.iter_mut().filter(|tech| selection.contains(&tech.id)) {
        tech.status = target;
        matched += 1;
    }

    if matched < selection.len() {
        tracing::warn!(
            selected = selection.len(),
            matched,
            "some selected ids are not in the collection"
        );
    }
    tracing::info!(matched, status = %target, "bulk status applied");
    selection.clear();
    Ok(matched)
}

/// Set `target` on every technology. Returns the collection size.
pub fn set_all_statuses(collection: &mut [Technology], target: TechStatus) -> usize {
    for tech in collection.iter_mut() {
        tech.status = target;
    }
    tracing::info!(count = collection.len(), status = %target, "status applied to all technologies");
    collection.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tt_core::ids::TechnologyId;

    fn id(n: i64) -> TechnologyId {
        TechnologyId::Number(n)
    }

    fn collection() -> Vec<Technology> {
        vec![
            Technology::new(id(1), "Rust", "Ownership and borrowing"),
            Technology::new(id(2), "Go", "Goroutines and channels"),
            Technology::new(id(3), "Zig", "Comptime all the way down"),
        ]
    }

    fn statuses(items: &[Technology]) -> Vec<TechStatus> {
        items.iter().map(|t| t.status).collect()
    }

    #[test]
    fn applies_to_selected_and_clears() {
        let mut items = collection();
        let mut selection: SelectionSet = [id(1), id(2)].into_iter().collect();

        let matched = apply_bulk_status(&mut items, &mut selection, TechStatus::Completed).unwrap();

        assert_eq!(matched, 2);
        assert!(selection.is_empty());
        assert_eq!(
            statuses(&items),
            vec![
                TechStatus::Completed,
                TechStatus::Completed,
                TechStatus::NotStarted
            ]
        );
    }

    #[test]
    fn empty_selection_is_an_error() {
        let mut items = collection();
        let mut selection = SelectionSet::new();
        let err = apply_bulk_status(&mut items, &mut selection, TechStatus::Completed).unwrap_err();
        assert!(matches!(err, StoreError::EmptySelection));
        assert_eq!(items, collection());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut items = collection();
        let mut selection: SelectionSet = [id(2), id(99)].into_iter().collect();
        let matched = apply_bulk_status(&mut items, &mut selection, TechStatus::InProgress).unwrap();
        assert_eq!(matched, 1);
        assert_eq!(items[1].status, TechStatus::InProgress);
    }

    #[test]
    fn idempotent() {
        let mut once = collection();
        let mut selection: SelectionSet = [id(3)].into_iter().collect();
        apply_bulk_status(&mut once, &mut selection, TechStatus::InProgress).unwrap();

        let mut twice = once.clone();
        let mut selection: SelectionSet = [id(3)].into_iter().collect();
        apply_bulk_status(&mut twice, &mut selection, TechStatus::InProgress).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn set_all_marks_everything() {
        let mut items = collection();
        assert_eq!(set_all_statuses(&mut items, TechStatus::Completed), 3);
        assert!(items.iter().all(|t| t.status == TechStatus::Completed));
    }
}
