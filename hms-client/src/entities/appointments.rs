//! Appointment list columns, normalization and status filter.

use std::fmt;
use std::str::FromStr;

use hms_grid::{Column, Record, Value};

use super::{date_column, rename_fields};

/// Status assumed for appointments the backend serves without one.
pub const DEFAULT_STATUS: &str = "scheduled";

const BACKEND_FIELDS: &[(&str, &str)] = &[
    ("patient_id", "patientId"),
    ("patient_name", "patientName"),
    ("doctor_id", "doctorId"),
    ("doctor_name", "doctorName"),
];

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("patientName", "Patient Name"),
        Column::new("doctorName", "Doctor"),
        date_column(),
        Column::new("time", "Time"),
        Column::new("status", "Status"),
    ]
}

/// Patient detail page: the patient's appointment history.
pub fn history_columns() -> Vec<Column> {
    vec![
        date_column(),
        Column::new("time", "Time"),
        Column::new("doctorName", "Doctor"),
        Column::new("status", "Status"),
    ]
}

/// Maps backend field names and fills a missing status with
/// [`DEFAULT_STATUS`].
///
/// The fallback is for display only; it is not written back.
pub fn normalize(record: Record) -> Record {
    let mut record = rename_fields(record, BACKEND_FIELDS);
    if record.value("status").is_null() {
        log::debug!(
            "Appointment {} has no status, showing '{}'",
            record.value("id"),
            DEFAULT_STATUS
        );
        record.insert("status", DEFAULT_STATUS);
    }
    record
}

/// Status filter applied before the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    /// Returns `true` if `record` passes the filter. Statuses compare
    /// case-insensitively.
    pub fn accepts(&self, record: &Record) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(wanted) => match record.value("status") {
                Value::String(status) => status.eq_ignore_ascii_case(wanted),
                _ => false,
            },
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Status(s.to_lowercase()))
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Status(s) => f.write_str(s),
        }
    }
}

/// Keeps the appointments accepted by `filter`, in order.
pub fn filter_by_status(records: Vec<Record>, filter: &StatusFilter) -> Vec<Record> {
    records.into_iter().filter(|r| filter.accepts(r)).collect()
}
