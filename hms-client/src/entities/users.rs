//! User management columns.

use hms_grid::{Column, Record};

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("contact", "Contact"),
        Column::new("type", "Type").render(|row| capitalize(&row.value("type").to_string())),
        Column::new("status", "Status").unsortable().render(|row| {
            let label = if is_active(row) { "Active" } else { "Inactive" };
            label.to_string()
        }),
    ]
}

/// Users without an `active` flag are active.
pub fn is_active(record: &Record) -> bool {
    record.get_bool("active").unwrap_or(true)
}

/// Fills a missing `active` flag.
pub fn normalize(mut record: Record) -> Record {
    if record.get_bool("active").is_none() {
        record.insert("active", true);
    }
    record
}

/// Keeps the users of account `kind` (case-insensitive); `None` keeps all.
pub fn filter_by_type(records: Vec<Record>, kind: Option<&str>) -> Vec<Record> {
    match kind {
        None => records,
        Some(kind) => records
            .into_iter()
            .filter(|r| r.get_str("type").is_some_and(|t| t.eq_ignore_ascii_case(kind)))
            .collect(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
