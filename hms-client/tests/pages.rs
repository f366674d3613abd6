use std::sync::{Arc, Mutex};

use hms_client::entities::appointments::{self, StatusFilter};
use hms_client::entities::medical_records;
use hms_client::{AccessError, AuthContext, Entity, EntityPage, Resource, Role, is_allowed};
use hms_grid::{DataGrid, GridActions, GridConfig, Record, id_field};

fn patients() -> Vec<Record> {
    let rows = [
        (1, "John Doe", 45, "Male"),
        (2, "Jane Smith", 32, "Female"),
        (3, "Robert Johnson", 58, "Male"),
        (4, "Emily Williams", 27, "Female"),
        (5, "Michael Brown", 41, "Male"),
    ];
    rows.into_iter()
        .map(|(id, name, age, gender)| {
            Record::new()
                .set("id", id)
                .set("name", name)
                .set("age", age)
                .set("gender", gender)
        })
        .collect()
}

// ============================================================================
// Authorization
// ============================================================================

#[test]
fn test_route_table() {
    use Resource::*;
    use Role::*;

    let cases = [
        (Dashboard, [true, true, true, true]),
        (Patients, [true, true, true, false]),
        (PatientDetails, [true, true, true, false]),
        (Doctors, [true, false, true, false]),
        (DoctorDetails, [true, false, true, false]),
        (Appointments, [true, true, true, true]),
        (MedicalRecords, [true, true, false, false]),
        (Users, [true, false, false, false]),
    ];
    for (resource, expected) in cases {
        for (role, allowed) in [Admin, Doctor, Receptionist, Patient].into_iter().zip(expected) {
            assert_eq!(is_allowed(role, resource), allowed, "{role} -> {resource}");
        }
    }
}

#[test]
fn test_menu_per_role() {
    let menu = AuthContext::with_role(Role::Patient).menu();
    assert_eq!(menu, vec![Resource::Dashboard, Resource::Appointments]);

    let menu = AuthContext::with_role(Role::Admin).menu();
    assert_eq!(menu.len(), 6);

    assert!(AuthContext::anonymous().menu().is_empty());
}

#[test]
fn test_anonymous_is_sent_to_role_selector() {
    let err = EntityPage::open(&AuthContext::anonymous(), Entity::Patients, patients()).unwrap_err();
    assert_eq!(err, AccessError::NotSignedIn { resource: Resource::Patients });
    assert_eq!(err.redirect_path(), "/");
}

#[test]
fn test_forbidden_is_sent_to_dashboard() {
    let auth = AuthContext::from_role_name("receptionist").unwrap();
    let err = EntityPage::open(&auth, Entity::MedicalRecords, Vec::new()).unwrap_err();
    assert!(matches!(err, AccessError::Forbidden { role: Role::Receptionist, .. }));
    assert_eq!(err.redirect_path(), "/dashboard");
}

#[test]
fn test_sign_out() {
    let mut auth = AuthContext::with_role(Role::Doctor);
    assert_eq!(auth.landing_path(), "/dashboard");
    auth.sign_out();
    assert!(!auth.is_signed_in());
    assert_eq!(auth.landing_path(), "/");
    assert!(auth.authorize(Resource::Dashboard).is_err());
}

// ============================================================================
// Pages
// ============================================================================

#[test]
fn test_patient_page_search_and_sort() {
    let auth = AuthContext::with_role(Role::Doctor);
    let mut page = EntityPage::open(&auth, Entity::Patients, patients()).unwrap();
    assert_eq!(page.title(), "Patients");

    let grid = page.grid_mut();
    grid.set_search_text("male");
    // "female" contains "male" too
    assert_eq!(grid.view().total_filtered, 5);

    grid.set_search_text("johnson");
    assert_eq!(grid.view().row_ids, vec!["3"]);

    grid.set_search_text("");
    grid.set_sort("age");
    grid.set_sort("age");
    let view = grid.view();
    assert_eq!(view.rows[0].get_str("name"), Some("Robert Johnson"));
}

#[test]
fn test_view_action_navigates_to_detail() {
    let auth = AuthContext::with_role(Role::Admin);
    let visited = Arc::new(Mutex::new(Vec::new()));
    let sink = visited.clone();
    let page = EntityPage::open(&auth, Entity::Doctors, Vec::new()).unwrap();
    let path_of = move |id: &str| Entity::Doctors.detail_path(id);
    let page = page.with_actions(GridActions::new().on_view(move |id| {
        if let Some(path) = path_of(id) {
            sink.lock().unwrap().push(path);
        }
    }));

    assert!(page.grid().view_row("3").is_handled());
    assert_eq!(*visited.lock().unwrap(), vec!["/doctors/3"]);
    assert_eq!(page.detail_path("3").as_deref(), Some("/doctors/3"));
}

#[test]
fn test_appointments_page_normalizes_backend_rows() {
    let backend = Record::list_from_json(
        r#"[
            {"id": 101, "patient_id": 2, "patient_name": "Jane Smith", "doctor_id": 1,
             "doctor_name": "Dr. Smith", "date": "2025-04-22", "time": "10:00 AM"},
            {"id": 102, "patient_id": 2, "patient_name": "Jane Smith", "doctor_id": 2,
             "doctor_name": "Dr. Johnson", "date": "2025-04-15", "time": "2:30 PM",
             "status": "completed"}
        ]"#,
    )
    .unwrap();

    let auth = AuthContext::with_role(Role::Patient);
    let page = EntityPage::open(&auth, Entity::Appointments, backend).unwrap();
    let grid = page.grid();
    let view = grid.view();

    assert_eq!(view.total_filtered, 2);
    assert_eq!(grid.cells(view.rows[0]), vec!["Jane Smith", "Dr. Smith", "4/22/2025", "10:00 AM", "scheduled"]);

    let scheduled = appointments::filter_by_status(grid.records().to_vec(), &StatusFilter::Status("scheduled".into()));
    assert_eq!(scheduled.len(), 1);
}

#[test]
fn test_reload_prunes_selection() {
    let auth = AuthContext::with_role(Role::Receptionist);
    let mut page = EntityPage::open(&auth, Entity::Patients, patients())
        .unwrap()
        .with_config(GridConfig::new().with_page_size(2));

    page.grid_mut().toggle_row_selection("2");
    page.grid_mut().toggle_row_selection("5");
    page.grid_mut().set_page(3);

    let mut fewer = patients();
    fewer.truncate(3);
    page.reload(fewer);

    let grid = page.grid();
    assert_eq!(grid.selected_ids(), vec!["2"]);
    assert_eq!(grid.state().current_page, 2);
}

#[test]
fn test_patient_history_grids_render_dates_alike() {
    let visits: Vec<Record> = Record::list_from_json(
        r#"[
            {"id": 101, "patient_id": 2, "doctor_name": "Dr. Smith",
             "date": "2025-04-22", "time": "10:00 AM"},
            {"id": 102, "patient_id": 2, "doctor_name": "Dr. Johnson",
             "date": "2025-04-15", "time": "2:30 PM", "status": "completed"}
        ]"#,
    )
    .unwrap()
    .into_iter()
    .map(appointments::normalize)
    .collect();
    let history: Vec<Record> = Record::list_from_json(
        r#"[
            {"id": 7, "patient_id": 2, "doctor_name": "Dr. Smith", "date": "2025-03-10",
             "diagnosis": "Hypertension", "prescription": "Lisinopril 10mg"}
        ]"#,
    )
    .unwrap()
    .into_iter()
    .map(medical_records::normalize)
    .collect();

    let mut visits = DataGrid::new(appointments::history_columns(), id_field("id")).with_records(visits);
    let history = DataGrid::new(medical_records::history_columns(), id_field("id")).with_records(history);

    visits.set_sort("date");
    let view = visits.view();
    assert_eq!(visits.cells(view.rows[0]), vec!["4/15/2025", "2:30 PM", "Dr. Johnson", "completed"]);
    assert_eq!(visits.cells(view.rows[1]), vec!["4/22/2025", "10:00 AM", "Dr. Smith", "scheduled"]);

    let view = history.view();
    assert_eq!(
        history.cells(view.rows[0]),
        vec!["3/10/2025", "Dr. Smith", "Hypertension", "Lisinopril 10mg"]
    );
}
