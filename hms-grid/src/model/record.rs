//! Dynamic record

use std::collections::HashMap;

use super::Value;
use crate::error::RecordError;

/// Identifier of a record within a grid.
///
/// Selection is tracked by these ids, so they must be unique and stable
/// across reloads of the same dataset.
pub type RowId = String;

/// A dynamic record: field name to primitive [`Value`].
///
/// Records are opaque to the grid. It only reads field values for search,
/// sort and display, and never mutates them.
///
/// # Example
///
/// ```
/// use hms_grid::model::Record;
///
/// let record = Record::new()
///     .set("id", 1)
///     .set("name", "Jane Smith")
///     .set("age", 32);
///
/// assert_eq!(record.get_str("name"), Some("Jane Smith"));
/// assert_eq!(record.get_f64("age"), Some(32.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of objects into records.
    pub fn list_from_json(json: &str) -> Result<Vec<Record>, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, or `Null` when the field is absent.
    pub fn value(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Returns the field as a string slice, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns the field as a number, if it is numeric.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Returns the field as a boolean, if it is a bool.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Returns `true` if any stringified field value contains `needle`.
    ///
    /// `needle` must already be lowercase; field values are lowercased
    /// before matching.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .fields
                .values()
                .any(|v| v.to_string().to_lowercase().contains(needle))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds an id resolver that stringifies a single field.
///
/// Records missing the field resolve to the empty id.
///
/// ```
/// use hms_grid::model::{Record, id_field};
///
/// let get_id = id_field("id");
/// assert_eq!(get_id(&Record::new().set("id", 7)), "7");
/// ```
pub fn id_field(field: impl Into<String>) -> impl Fn(&Record) -> RowId + Send + Sync + 'static {
    let field = field.into();
    move |record: &Record| record.value(&field).to_string()
}
