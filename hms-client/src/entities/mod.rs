//! Entity presets: the columns and record shapes of each hospital page.

pub mod appointments;
pub mod doctors;
pub mod medical_records;
pub mod patients;
pub mod users;

use chrono::{DateTime, NaiveDate};
use hms_grid::{Column, Record};

use crate::access::Resource;

/// Entities listed in a data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Patients,
    Doctors,
    Appointments,
    MedicalRecords,
    Users,
}

impl Entity {
    /// The page resource listing this entity.
    pub fn resource(&self) -> Resource {
        match self {
            Entity::Patients => Resource::Patients,
            Entity::Doctors => Resource::Doctors,
            Entity::Appointments => Resource::Appointments,
            Entity::MedicalRecords => Resource::MedicalRecords,
            Entity::Users => Resource::Users,
        }
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        self.resource().title()
    }

    /// Grid columns for this entity.
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Entity::Patients => patients::columns(),
            Entity::Doctors => doctors::columns(),
            Entity::Appointments => appointments::columns(),
            Entity::MedicalRecords => medical_records::columns(),
            Entity::Users => users::columns(),
        }
    }

    /// Convert a record as served by the backend into the client's shape.
    pub fn normalize(&self, record: Record) -> Record {
        match self {
            Entity::Appointments => appointments::normalize(record),
            Entity::MedicalRecords => medical_records::normalize(record),
            Entity::Users => users::normalize(record),
            Entity::Patients | Entity::Doctors => record,
        }
    }

    /// Route of the detail page for a row, for entities that have one.
    pub fn detail_path(&self, id: &str) -> Option<String> {
        match self {
            Entity::Patients => Some(format!("/patients/{id}")),
            Entity::Doctors => Some(format!("/doctors/{id}")),
            _ => None,
        }
    }
}

/// Renames backend snake_case fields to their client names.
///
/// A client-side field that is already present wins over the backend one.
pub(crate) fn rename_fields(mut record: Record, renames: &[(&str, &str)]) -> Record {
    for (from, to) in renames {
        let Some(value) = record.remove(from) else {
            continue;
        };
        if !record.contains(to) {
            record.insert(*to, value);
        }
    }
    record
}

/// Formats a `YYYY-MM-DD` date (or an RFC 3339 timestamp) as `M/D/YYYY`.
///
/// Anything unparseable is shown as-is.
pub(crate) fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// A sortable date column rendered with [`format_date`].
pub(crate) fn date_column() -> Column {
    Column::new("date", "Date").render(|row| format_date(&row.value("date").to_string()))
}
