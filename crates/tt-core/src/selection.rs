//! Selection state for bulk edits.
//!
//! A [`SelectionSet`] is independent of the current filter: selecting an item
//! and then filtering it out keeps it selected. The filter only scopes what
//! [`SelectionSet::toggle_all_visible`] adds or removes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Technology;
use crate::ids::TechnologyId;

/// Set of selected technology ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: BTreeSet<TechnologyId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, visible or not. Returns whether `id` is now
    /// selected.
    pub fn toggle(&mut self, id: TechnologyId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Select every visible id, or deselect them all if they already are.
    ///
    /// Ids outside `visible` are never touched. An empty `visible` slice is a
    /// no-op.
    pub fn toggle_all_visible(&mut self, visible: &[&Technology]) {
        if self.is_all_visible_selected(visible) {
            for tech in visible {
                self.ids.remove(&tech.id);
            }
        } else {
            self.ids.extend(visible.iter().map(|tech| tech.id.clone()));
        }
    }

    /// True iff `visible` is non-empty and every visible id is selected.
    #[must_use]
    pub fn is_all_visible_selected(&self, visible: &[&Technology]) -> bool {
        !visible.is_empty() && visible.iter().all(|tech| self.ids.contains(&tech.id))
    }

    #[must_use]
    pub fn contains(&self, id: &TechnologyId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &TechnologyId> {
        self.ids.iter()
    }
}

impl FromIterator<TechnologyId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = TechnologyId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchFilter;
    use pretty_assertions::assert_eq;

    fn id(n: i64) -> TechnologyId {
        TechnologyId::Number(n)
    }

    fn collection() -> Vec<Technology> {
        vec![
            Technology::new(id(1), "React", "Hooks and components"),
            Technology::new(id(2), "Redux", "State containers for React"),
            Technology::new(id(3), "Vue", "Progressive framework"),
        ]
    }

    fn ids(selection: &SelectionSet) -> Vec<TechnologyId> {
        selection.iter().cloned().collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(id(1)));
        assert!(selection.contains(&id(1)));
        assert!(!selection.toggle(id(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_visible_selects_only_visible() {
        let items = collection();
        let visible = SearchFilter::new("react").visible(&items);
        let mut selection = SelectionSet::new();
        selection.toggle_all_visible(&visible);
        assert_eq!(ids(&selection), vec![id(1), id(2)]);
        assert!(selection.is_all_visible_selected(&visible));
    }

    #[test]
    fn toggle_all_visible_deselects_when_all_selected() {
        let items = collection();
        let visible = SearchFilter::new("react").visible(&items);
        let mut selection: SelectionSet = [id(1), id(2), id(3)].into_iter().collect();
        selection.toggle_all_visible(&visible);
        assert_eq!(ids(&selection), vec![id(3)]);
    }

    #[test]
    fn toggle_all_visible_leaves_hidden_selection_untouched() {
        let items = collection();
        let mut selection = SelectionSet::new();
        selection.toggle(id(3));

        let visible = SearchFilter::new("react").visible(&items);
        selection.toggle_all_visible(&visible);
        assert!(selection.contains(&id(3)));
        selection.toggle_all_visible(&visible);
        assert_eq!(ids(&selection), vec![id(3)]);
    }

    #[test]
    fn partial_visible_selection_fills_in_missing() {
        let items = collection();
        let visible = SearchFilter::new("react").visible(&items);
        let mut selection = SelectionSet::new();
        selection.toggle(id(2));
        assert!(!selection.is_all_visible_selected(&visible));
        selection.toggle_all_visible(&visible);
        assert_eq!(ids(&selection), vec![id(1), id(2)]);
    }

    #[test]
    fn selection_survives_filter_change() {
        let items = collection();
        let mut selection = SelectionSet::new();
        selection.toggle(id(3));
        let visible = SearchFilter::new("react").visible(&items);
        assert!(visible.iter().all(|t| t.id != id(3)));
        assert!(selection.contains(&id(3)));
    }

    #[test]
    fn empty_visible_is_never_all_selected() {
        let items = collection();
        let visible = SearchFilter::new("no such thing").visible(&items);
        let mut selection: SelectionSet = [id(1), id(2), id(3)].into_iter().collect();
        assert!(!selection.is_all_visible_selected(&visible));
        selection.toggle_all_visible(&visible);
        assert_eq!(selection.len(), 3);
    }
}
