//! Medical record list columns and normalization.

use hms_grid::{Column, Record};

use super::{date_column, rename_fields};

const BACKEND_FIELDS: &[(&str, &str)] = &[
    ("patient_id", "patientId"),
    ("patient_name", "patientName"),
    ("doctor_id", "doctorId"),
    ("doctor_name", "doctorName"),
    ("record_type", "recordType"),
];

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("patientName", "Patient Name"),
        Column::new("doctorName", "Doctor"),
        date_column(),
        Column::new("diagnosis", "Diagnosis"),
        Column::new("recordType", "Record Type"),
    ]
}

/// Patient detail page: the patient's record history.
pub fn history_columns() -> Vec<Column> {
    vec![
        date_column(),
        Column::new("doctorName", "Doctor"),
        Column::new("diagnosis", "Diagnosis"),
        Column::new("prescription", "Prescription"),
    ]
}

/// Maps backend field names to client names.
pub fn normalize(record: Record) -> Record {
    rename_fields(record, BACKEND_FIELDS)
}
