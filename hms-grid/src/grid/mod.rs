//! Data grid - search, sort, pagination and row selection over records.
//!
//! The grid derives its visible window in three steps:
//! filter by search text, sort by the selected column, then slice the
//! current page. Selection is kept by row id, independent of that window.
//!
//! # Example
//!
//! ```
//! use hms_grid::grid::{Column, DataGrid};
//! use hms_grid::model::{Record, id_field};
//!
//! let columns = vec![
//!     Column::new("name", "Name"),
//!     Column::new("age", "Age"),
//!     Column::new("notes", "Notes").unsortable(),
//! ];
//! let mut grid = DataGrid::new(columns, id_field("id"));
//! grid.set_records(vec![
//!     Record::new().set("id", 1).set("name", "Jane Smith").set("age", 32),
//!     Record::new().set("id", 2).set("name", "John Doe").set("age", 45),
//! ]);
//!
//! grid.set_search_text("smith");
//! assert_eq!(grid.view().total_filtered, 1);
//! ```

mod column;
mod config;
mod derive;
mod engine;
mod events;
mod selection;
mod state;

pub use column::{CellRenderer, Column};
pub use config::GridConfig;
pub use derive::{
    GridView, compare_values, derive_view, filter_records, page_window, sort_records, total_pages,
};
pub use engine::DataGrid;
pub use events::{EventResult, GridActions, RowAction};
pub use selection::Selection;
pub use state::{SortDirection, ViewState};
