//! View state types.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::selection::Selection;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    ///
    /// Reversing the comparison (rather than the sorted rows) keeps equal
    /// keys in their original relative order under a stable sort.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// The mutable state driving what a grid currently shows.
///
/// `search_text` is stored trimmed and lowercased. `current_page` is
/// 1-based. The selection is keyed by row id and independent of the
/// visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Normalized search text; empty means no filter.
    pub search_text: String,
    /// Field of the sorted column, if any.
    pub sort_field: Option<String>,
    /// Direction applied to `sort_field`.
    pub sort_direction: SortDirection,
    /// Current page, starting at 1.
    pub current_page: usize,
    /// Selected row ids.
    pub selection: Selection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            selection: Selection::new(),
        }
    }
}

impl ViewState {
    /// Create an empty view state: no search, no sort, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes raw search input the way the grid stores it.
    pub fn normalize_search(text: &str) -> String {
        text.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(ViewState::normalize_search("  SMITH "), "smith");
    }

    #[test]
    fn test_new_state_starts_on_first_page() {
        let state = ViewState::new();
        assert_eq!(state.current_page, 1);
        assert!(state.sort_field.is_none());
        assert!(state.selection.is_empty());
    }
}
