//! Walks a patient list through search, sort, paging and selection,
//! printing each page as plain text.
//!
//! Usage: `cargo run --example ward -- [role]` (defaults to `receptionist`).

use std::fs::File;

use hms_client::{AuthContext, Entity, EntityPage};
use hms_grid::{DataGrid, GridActions, GridConfig, Record};
use simplelog::{Config, LevelFilter, WriteLogger};

const PATIENTS: &str = r#"[
    {"id": 1, "name": "John Doe", "age": 45, "gender": "Male", "contact": "555-123-4567", "address": "123 Main St"},
    {"id": 2, "name": "Jane Smith", "age": 32, "gender": "Female", "contact": "555-987-6543", "address": "456 Oak Ave"},
    {"id": 3, "name": "Robert Johnson", "age": 58, "gender": "Male", "contact": "555-567-8901", "address": "789 Pine Rd"},
    {"id": 4, "name": "Emily Williams", "age": 27, "gender": "Female", "contact": "555-234-5678", "address": "321 Elm St"},
    {"id": 5, "name": "Michael Brown", "age": 41, "gender": "Male", "contact": "555-345-6789", "address": "654 Maple Drive, Apartment 12B"},
    {"id": 6, "name": "Sarah Smithers", "age": 36, "gender": "Female", "contact": "555-456-7890", "address": "987 Cedar Ln"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("ward.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let role = std::env::args().nth(1).unwrap_or_else(|| "receptionist".to_string());
    let auth = AuthContext::from_role_name(&role)?;
    println!("Signed in as {} - menu: {:?}", role, auth.menu());

    let records = Record::list_from_json(PATIENTS)?;
    let mut page = match EntityPage::open(&auth, Entity::Patients, records) {
        Ok(page) => page,
        Err(e) => {
            println!("{} (redirect to {})", e, e.redirect_path());
            return Ok(());
        }
    };
    page = page
        .with_config(GridConfig::from_json(r#"{"pageSize": 4}"#)?)
        .with_actions(
            GridActions::new()
                .on_view(|id| println!("-> {}", Entity::Patients.detail_path(id).unwrap_or_default()))
                .on_export(|ids| println!("-> export {:?}", ids)),
        );

    let grid = page.grid_mut();
    print_page(grid);

    grid.set_sort("age");
    grid.set_sort("age");
    print_page(grid);

    grid.toggle_select_all_visible();
    grid.next_page();
    print_page(grid);

    grid.set_search_text("smith");
    print_page(grid);

    grid.view_row("2");
    grid.export_selected();
    Ok(())
}

fn print_page(grid: &DataGrid) {
    let view = grid.view();
    let headers: Vec<String> = grid
        .columns()
        .iter()
        .map(|c| match grid.sort_indicator(&c.field) {
            Some(direction) => format!("{} ({})", c.header, direction),
            None => c.header.clone(),
        })
        .collect();

    println!();
    println!("    {}", headers.join(" | "));
    if view.is_empty() {
        println!("    No data available");
    }
    for (record, id) in view.rows.iter().zip(&view.row_ids) {
        let mark = if grid.is_selected(id) { "[x]" } else { "[ ]" };
        println!("{} {}", mark, grid.cells(record).join(" | "));
    }
    println!(
        "Page {} of {} ({} matching)",
        view.current_page, view.total_pages, view.total_filtered
    );
}
