//! Data grid state engine.

use std::collections::HashSet;
use std::fmt;

use super::column::Column;
use super::config::GridConfig;
use super::derive::{self, GridView, derive_view, filter_records};
use super::events::{EventResult, GridActions, RowAction};
use super::state::{SortDirection, ViewState};
use crate::model::{Record, RowId};

type IdFn = Box<dyn Fn(&Record) -> RowId + Send + Sync>;

/// A data grid over an arbitrary record collection.
///
/// `DataGrid` owns:
/// - Column descriptors (fixed for the lifetime of the grid)
/// - The current dataset, replaced wholesale with [`set_records`](Self::set_records)
/// - The [`ViewState`]: search text, sort, page and id-based selection
/// - Row action callbacks
///
/// All mutation goes through `&mut self`; a grid has a single owner and
/// applies operations in the order they arrive.
pub struct DataGrid {
    columns: Vec<Column>,
    config: GridConfig,
    records: Vec<Record>,
    get_id: IdFn,
    state: ViewState,
    actions: GridActions,
}

impl DataGrid {
    /// Create an empty grid.
    ///
    /// `get_id` resolves the identity of a record; selection is tracked by it.
    pub fn new<F>(columns: Vec<Column>, get_id: F) -> Self
    where
        F: Fn(&Record) -> RowId + Send + Sync + 'static,
    {
        Self {
            columns,
            config: GridConfig::default(),
            records: Vec::new(),
            get_id: Box::new(get_id),
            state: ViewState::new(),
            actions: GridActions::new(),
        }
    }

    /// Set the configuration.
    ///
    /// The current page is clamped to the page count under the new config.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self.clamp_page();
        self
    }

    /// Set the initial records.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.set_records(records);
        self
    }

    /// Set the row action callbacks.
    pub fn with_actions(mut self, actions: GridActions) -> Self {
        self.actions = actions;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by field.
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get the full, unfiltered dataset.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Get the row action callbacks.
    pub fn actions(&self) -> &GridActions {
        &self.actions
    }

    /// Resolve the id of a record.
    pub fn row_id(&self, record: &Record) -> RowId {
        (self.get_id)(record)
    }

    /// Find a record in the full dataset by id.
    pub fn find_record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| self.row_id(r) == id)
    }

    // -------------------------------------------------------------------------
    // Dataset
    // -------------------------------------------------------------------------

    /// Replace the dataset.
    ///
    /// Selected ids no longer present in the new dataset are dropped and the
    /// current page is clamped to the new page count.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;

        let known: HashSet<RowId> = self.records.iter().map(|r| self.row_id(r)).collect();
        let dropped = self.state.selection.retain_known(&known);
        if !dropped.is_empty() {
            log::debug!("DataGrid: pruned {} stale selected ids", dropped.len());
        }

        self.clamp_page();
        log::debug!(
            "DataGrid: loaded {} records, page {}",
            self.records.len(),
            self.state.current_page
        );
    }

    // -------------------------------------------------------------------------
    // Search, sort, pagination
    // -------------------------------------------------------------------------

    /// Set the search text and return to the first page.
    ///
    /// The text is stored trimmed and lowercased. Ignored when the grid is
    /// not searchable.
    pub fn set_search_text(&mut self, text: &str) {
        if !self.config.searchable {
            log::debug!("DataGrid: search disabled, ignoring '{}'", text);
            return;
        }
        self.state.search_text = ViewState::normalize_search(text);
        self.state.current_page = 1;
    }

    /// Sort by `field`.
    ///
    /// Re-selecting the sorted field toggles the direction; a new field starts
    /// ascending. Fields that are unknown or not sortable are ignored.
    /// The page number is kept. Returns `true` if the sort changed.
    pub fn set_sort(&mut self, field: &str) -> bool {
        if !self.column(field).is_some_and(|c| c.sortable) {
            log::debug!("DataGrid: ignoring sort on '{}'", field);
            return false;
        }

        if self.state.sort_field.as_deref() == Some(field) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_field = Some(field.to_string());
            self.state.sort_direction = SortDirection::Asc;
        }
        true
    }

    /// Sort direction shown on a column header, if that column is sorted.
    pub fn sort_indicator(&self, field: &str) -> Option<SortDirection> {
        (self.state.sort_field.as_deref() == Some(field)).then_some(self.state.sort_direction)
    }

    /// Go to page `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.state.current_page = page.clamp(1, total.max(1));
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) {
        self.set_page(self.state.current_page.saturating_add(1));
    }

    /// Go to the previous page, if any.
    pub fn prev_page(&mut self) {
        self.set_page(self.state.current_page.saturating_sub(1));
    }

    /// Number of pages for the current search.
    ///
    /// Only counts matches; sorting never changes the page count.
    pub fn total_pages(&self) -> usize {
        let matches = if self.config.searchable {
            filter_records(&self.records, &self.state.search_text).len()
        } else {
            self.records.len()
        };
        if self.config.pagination {
            derive::total_pages(matches, self.config.page_size())
        } else {
            usize::from(matches > 0)
        }
    }

    fn clamp_page(&mut self) {
        self.set_page(self.state.current_page);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a row id.
    ///
    /// An id that no record in the dataset resolves to cannot be selected.
    /// Returns (added, removed) IDs.
    pub fn toggle_row_selection(&mut self, id: &str) -> (Vec<RowId>, Vec<RowId>) {
        if !self.is_selected(id) && self.find_record(id).is_none() {
            log::debug!("DataGrid: ignoring selection of unknown id '{}'", id);
            return (vec![], vec![]);
        }
        self.state.selection.toggle(id)
    }

    /// Toggle selection of the rows on the current page.
    ///
    /// If every visible row is selected they are all deselected, otherwise
    /// the unselected visible rows are added. Rows on other pages are never
    /// touched. Returns (added, removed) IDs.
    pub fn toggle_select_all_visible(&mut self) -> (Vec<RowId>, Vec<RowId>) {
        let visible = self.view().row_ids;
        if self.state.selection.contains_all(&visible) {
            (vec![], self.state.selection.deselect_all(&visible))
        } else {
            (self.state.selection.select_all(&visible), vec![])
        }
    }

    /// Get all selected ids (sorted).
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.state.selection.selected()
    }

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Clear the selection.
    /// Returns the IDs that were deselected.
    pub fn clear_selection(&mut self) -> Vec<RowId> {
        self.state.selection.clear()
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Derive the visible window. Computed fresh on every call.
    pub fn view(&self) -> GridView<'_> {
        derive_view(&self.records, &self.state, &self.config, &*self.get_id)
    }

    /// Display text of each column's cell for `record`.
    pub fn cells(&self, record: &Record) -> Vec<String> {
        self.columns.iter().map(|c| c.display(record)).collect()
    }

    // -------------------------------------------------------------------------
    // Row actions
    // -------------------------------------------------------------------------

    /// Invoke the view callback for a row.
    pub fn view_row(&self, id: &str) -> EventResult {
        self.actions.dispatch(RowAction::View, id)
    }

    /// Invoke the edit callback for a row.
    pub fn edit_row(&self, id: &str) -> EventResult {
        self.actions.dispatch(RowAction::Edit, id)
    }

    /// Invoke the delete callback for a row.
    pub fn delete_row(&self, id: &str) -> EventResult {
        self.actions.dispatch(RowAction::Delete, id)
    }

    /// Row action buttons to show.
    pub fn available_actions(&self) -> Vec<RowAction> {
        self.actions.available()
    }

    /// Invoke the export callback with the selected ids.
    pub fn export_selected(&self) -> EventResult {
        self.actions.export(&self.selected_ids())
    }
}

impl fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("columns", &self.columns)
            .field("config", &self.config)
            .field("records", &self.records.len())
            .field("state", &self.state)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
