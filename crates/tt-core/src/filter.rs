//! Free-text filtering of the technology collection.
//!
//! A [`SearchFilter`] decides which technologies are *visible*. Visibility is
//! what the bulk editor's "select all" acts on; it never changes what is
//! already selected (see [`crate::selection::SelectionSet`]).

use crate::entities::Technology;

/// Case-insensitive substring filter over title, description, and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Build a filter from raw user input. Surrounding whitespace is ignored.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// The normalized (trimmed, lowercased) term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// An empty filter matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    #[must_use]
    pub fn matches(&self, tech: &Technology) -> bool {
        self.is_empty() || tech.search_haystack().contains(&self.term)
    }

    /// The visible subset of `items`, in collection order.
    #[must_use]
    pub fn visible<'a>(&self, items: &'a [Technology]) -> Vec<&'a Technology> {
        items.iter().filter(|tech| self.matches(tech)).collect()
    }
}
