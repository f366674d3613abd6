//! Patient list columns.

use hms_grid::Column;

const ADDRESS_PREVIEW: usize = 20;

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("age", "Age"),
        Column::new("gender", "Gender"),
        Column::new("contact", "Contact"),
        Column::new("address", "Address")
            .render(|row| truncate(&row.value("address").to_string(), ADDRESS_PREVIEW)),
    ]
}

/// Keeps the first `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use hms_grid::Record;

    use super::*;

    #[test]
    fn test_address_is_truncated() {
        let address = columns().pop().unwrap();
        let short = Record::new().set("address", "456 Oak Ave");
        let long = Record::new().set("address", "1600 Pennsylvania Avenue NW");

        assert_eq!(address.display(&short), "456 Oak Ave");
        assert_eq!(address.display(&long), "1600 Pennsylvania Av...");
        assert_eq!(address.display(&Record::new()), "");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("abcd", 4), "abcd");
        assert_eq!(truncate("abcde", 4), "abcd...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
