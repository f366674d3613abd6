//! Tabular data view engine.
//!
//! `hms-grid` takes an arbitrary collection of [`Record`](model::Record)s plus a
//! set of [`Column`](grid::Column) descriptors and derives what a data table
//! shows: free-text search, toggled column sort, pagination and an id-based
//! row selection that survives sorting and paging.
//!
//! The engine holds no I/O. Records are handed to it fully loaded and the
//! row actions (view, edit, delete, export) are opaque callbacks.

pub mod error;
pub mod grid;
pub mod model;

pub use grid::*;
pub use model::{Record, RowId, Value, id_field};
