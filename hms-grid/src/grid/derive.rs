//! Pure view derivation: filter, sort, paginate.
//!
//! These functions never touch a [`DataGrid`](super::DataGrid); they take
//! records and a [`ViewState`] and compute the visible window. The grid
//! calls [`derive_view`] on every [`DataGrid::view`](super::DataGrid::view).

use std::cmp::Ordering;

use super::config::GridConfig;
use super::state::{SortDirection, ViewState};
use crate::model::{Record, RowId};

/// The derived, visible state of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a Record>,
    /// Ids of `rows`, in the same order.
    pub row_ids: Vec<RowId>,
    /// The page `rows` belongs to (1-based).
    pub current_page: usize,
    /// Number of pages; 0 when nothing matches.
    pub total_pages: usize,
    /// Rows matching the search, across all pages.
    pub total_filtered: usize,
    /// Selected ids among `row_ids`, in display order.
    pub selected_on_page: Vec<RowId>,
}

impl GridView<'_> {
    /// Returns `true` if the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every row on the page is selected.
    ///
    /// Always false for an empty page.
    pub fn all_visible_selected(&self) -> bool {
        !self.row_ids.is_empty() && self.selected_on_page.len() == self.row_ids.len()
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }
}

/// Keeps the records where any stringified field contains `search_text`,
/// ignoring case. Empty (or blank) search text keeps every record.
pub fn filter_records<'a>(records: &'a [Record], search_text: &str) -> Vec<&'a Record> {
    let needle = ViewState::normalize_search(search_text);
    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// Compares two records by the natural ordering of `field`.
pub fn compare_values(a: &Record, b: &Record, field: &str) -> Ordering {
    a.value(field).natural_cmp(b.value(field))
}

/// Stable-sorts rows by `field` in `direction`.
pub fn sort_records(rows: &mut [&Record], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| direction.apply(compare_values(a, b, field)));
}

/// Number of pages needed for `len` rows.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice of `rows` shown on 1-based `page`. Pages past the end are empty.
pub fn page_window<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Derives the visible window of `records` for `state`.
///
/// Search applies only when the config is searchable. The requested page is
/// clamped into `[1, total_pages]`; with pagination disabled the whole
/// filtered and sorted set is a single page.
pub fn derive_view<'a>(
    records: &'a [Record],
    state: &ViewState,
    config: &GridConfig,
    get_id: &dyn Fn(&Record) -> RowId,
) -> GridView<'a> {
    let mut rows = if config.searchable {
        filter_records(records, &state.search_text)
    } else {
        records.iter().collect()
    };

    if let Some(field) = &state.sort_field {
        sort_records(&mut rows, field, state.sort_direction);
    }

    let total_filtered = rows.len();
    let (rows, current_page, page_count) = if config.pagination {
        let pages = total_pages(total_filtered, config.page_size());
        let page = state.current_page.clamp(1, pages.max(1));
        let window = page_window(&rows, page, config.page_size()).to_vec();
        (window, page, pages)
    } else {
        (rows, 1, usize::from(total_filtered > 0))
    };

    let row_ids: Vec<RowId> = rows.iter().map(|r| get_id(*r)).collect();
    let selected_on_page = row_ids
        .iter()
        .filter(|id| state.selection.is_selected(id))
        .cloned()
        .collect();

    GridView {
        rows,
        row_ids,
        current_page,
        total_pages: page_count,
        total_filtered,
        selected_on_page,
    }
}
