//! Row action callbacks.
//!
//! The grid does not know what viewing, editing, deleting or exporting
//! means. The owning page registers callbacks here and the grid invokes
//! them with row ids.

use std::fmt;

use crate::model::RowId;

/// Callback receiving a single row id.
pub type RowCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Callback receiving the selected row ids.
pub type ExportCallback = Box<dyn Fn(&[RowId]) + Send + Sync>;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No handler was registered, nothing happened.
    Ignored,
    /// A handler ran.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Per-row action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// Action callbacks supplied by the page that owns the grid.
///
/// # Example
///
/// ```
/// use hms_grid::grid::{GridActions, RowAction};
///
/// let actions = GridActions::new()
///     .on_view(|id| println!("open {id}"))
///     .on_delete(|id| println!("delete {id}"));
///
/// assert_eq!(actions.available(), vec![RowAction::View, RowAction::Delete]);
/// ```
#[derive(Default)]
pub struct GridActions {
    on_view: Option<RowCallback>,
    on_edit: Option<RowCallback>,
    on_delete: Option<RowCallback>,
    on_export: Option<ExportCallback>,
}

impl GridActions {
    /// Create an empty set of actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the view handler.
    pub fn on_view(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_view = Some(Box::new(f));
        self
    }

    /// Register the edit handler.
    pub fn on_edit(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    /// Register the delete handler.
    pub fn on_delete(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Register the export handler.
    pub fn on_export(mut self, f: impl Fn(&[RowId]) + Send + Sync + 'static) -> Self {
        self.on_export = Some(Box::new(f));
        self
    }

    /// Row actions that have a handler, in button order.
    pub fn available(&self) -> Vec<RowAction> {
        [
            (RowAction::View, self.on_view.is_some()),
            (RowAction::Edit, self.on_edit.is_some()),
            (RowAction::Delete, self.on_delete.is_some()),
        ]
        .into_iter()
        .filter_map(|(action, present)| present.then_some(action))
        .collect()
    }

    /// Returns `true` if an export handler is registered.
    pub fn can_export(&self) -> bool {
        self.on_export.is_some()
    }

    /// Invoke the handler for `action` with `id`.
    pub fn dispatch(&self, action: RowAction, id: &str) -> EventResult {
        let handler = match action {
            RowAction::View => &self.on_view,
            RowAction::Edit => &self.on_edit,
            RowAction::Delete => &self.on_delete,
        };
        match handler {
            Some(f) => {
                f(id);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Invoke the export handler with `ids`.
    pub fn export(&self, ids: &[RowId]) -> EventResult {
        match &self.on_export {
            Some(f) => {
                f(ids);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

impl fmt::Debug for GridActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridActions")
            .field("actions", &self.available())
            .field("export", &self.can_export())
            .finish()
    }
}
