//! Doctor list columns.

use hms_grid::Column;

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("specialization", "Specialization"),
        Column::new("contact", "Contact"),
        Column::new("email", "Email"),
        Column::new("availability", "Availability")
            .render(|row| availability_label(&row.value("availability").to_string())),
    ]
}

/// Human label of an availability code.
pub fn availability_label(code: &str) -> String {
    match code {
        "weekdays" => "Mon-Fri".to_string(),
        "weekends" => "Sat-Sun".to_string(),
        "all" => "All Days".to_string(),
        other => other.to_string(),
    }
}
