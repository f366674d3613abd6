//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;

/// Custom cell formatter: derives the display text of a cell from its record.
pub type CellRenderer = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns declare which record field they show, the header label, whether
/// clicking the header sorts by that field and, optionally, a renderer that
/// formats the cell instead of the raw field value.
///
/// Columns are sortable unless marked otherwise.
///
/// # Examples
///
/// ```
/// use hms_grid::grid::Column;
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("diagnosis", "Diagnosis").unsortable(),
///     Column::new("active", "Status").render(|row| {
///         let label = if row.get_bool("active") == Some(true) { "Active" } else { "Inactive" };
///         label.to_string()
///     }),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Record field this column reads and sorts by
    pub field: String,
    /// Column header text
    pub header: String,
    /// Whether this column is sortable
    pub sortable: bool,
    render: Option<CellRenderer>,
}

impl Column {
    /// Create a new sortable column showing `field` under `header`.
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            sortable: true,
            render: None,
        }
    }

    /// Make the column ignore sort requests.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Format cells with a custom renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns `true` if a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Display text of this column's cell for `record`.
    pub fn display(&self, record: &Record) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.value(&self.field).to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}
