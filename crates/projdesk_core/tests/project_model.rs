use projdesk_core::{Client, DateValue, Project, ProjectDraft, ProjectRow, ProjectStatus};

fn sample_project() -> Project {
    Project {
        id: "7".to_string(),
        title: "Catalog redesign".to_string(),
        description: "Spring catalog".to_string(),
        order_date: "2024/03/01".to_string(),
        due_date: "20240415".to_string(),
        completion_date: None,
        client: Client::new("2", "Beta LLC", "Bob"),
        status: ProjectStatus::InProgress,
        folder_path: Some("/projects/7".to_string()),
        folder_path_suffix: Some("7".to_string()),
    }
}

#[test]
fn project_serialization_uses_wire_field_names() {
    let json = serde_json::to_value(sample_project()).unwrap();
    assert_eq!(json["order_date"], "2024/03/01");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["client"]["contact_person"], "Bob");
    assert_eq!(json["completion_date"], serde_json::Value::Null);

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample_project());
}

#[test]
fn project_without_optional_fields_deserializes() {
    let value = serde_json::json!({
        "id": "1",
        "title": "Logo",
        "description": "",
        "order_date": "2024-01-10",
        "due_date": "2024-02-10",
        "client": { "id": "1", "name": "Acme", "contact_person": "Alice" },
        "status": "OnHold"
    });

    let project: Project = serde_json::from_value(value).unwrap();
    assert_eq!(project.status, ProjectStatus::OnHold);
    assert_eq!(project.folder_path, None);
    assert_eq!(project.completion_date_value(), None);
}

#[test]
fn stored_dates_are_read_through_date_value() {
    let project = sample_project();
    assert_eq!(
        project.order_date_value().map(|date| date.format("Y-m-d")),
        Some("2024-03-01".to_string())
    );
    assert_eq!(
        project.due_date_value().map(|date| date.format("Y-m-d")),
        Some("2024-04-15".to_string())
    );
}

#[test]
fn status_labels_are_localized() {
    let labels: Vec<_> = ProjectStatus::ALL.iter().map(|status| status.label()).collect();
    assert_eq!(labels, vec!["進行中", "完了", "待機中"]);
}

#[test]
fn table_row_formats_dates_and_flattens_client() {
    let row = ProjectRow::from(&sample_project());
    assert_eq!(row.order_date, "2024/03/01");
    assert_eq!(row.due_date, "2024/04/15");
    assert_eq!(row.status, "進行中");
    assert_eq!(row.company_name, "Beta LLC");
    assert_eq!(row.contact_name, "Bob");
    assert_eq!(row.project_folder_path, "/projects/7");

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["ProjectName"], "Catalog redesign");
    assert_eq!(json["OrderDate"], "2024/03/01");
}

#[test]
fn table_row_keeps_unreadable_dates_verbatim() {
    let mut project = sample_project();
    project.order_date = "next spring".to_string();
    project.due_date = String::new();
    project.folder_path = None;

    let row = ProjectRow::from(&project);
    assert_eq!(row.order_date, "next spring");
    assert_eq!(row.due_date, "");
    assert_eq!(row.project_folder_path, "");
}

#[test]
fn new_draft_defaults_to_on_hold() {
    let draft = ProjectDraft::default();
    assert!(draft.is_new());
    assert_eq!(draft.status, ProjectStatus::OnHold);
    assert_eq!(draft.completion_date, None);
}

#[test]
fn draft_date_setters_store_form_text() {
    let mut draft = ProjectDraft::default();
    draft.set_order_date(Some(DateValue::parse("2024-03-05 13:00:00")));
    draft.set_completion_date(Some(DateValue::parse("20240320")));
    draft.set_due_date(None);

    assert_eq!(draft.order_date, "2024/03/05");
    assert_eq!(draft.completion_date.as_deref(), Some("2024/03/20"));
    assert_eq!(draft.due_date, DateValue::now().format("Y/m/d"));
    assert_eq!(DateValue::parse(&draft.order_date).format("Y-m-d"), "2024-03-05");
}

#[test]
fn draft_selects_client_by_id() {
    let clients = vec![
        Client::new("1", "Acme", "Alice"),
        Client::new("2", "Beta LLC", "Bob"),
    ];
    let mut draft = ProjectDraft::default();

    assert!(draft.select_client(&clients, "2"));
    assert_eq!(draft.client.name, "Beta LLC");

    assert!(!draft.select_client(&clients, "9"));
    assert_eq!(draft.client.name, "Beta LLC");
}

#[test]
fn draft_round_trips_an_existing_project() {
    let project = sample_project();
    let draft = ProjectDraft::from_project(&project);
    assert!(!draft.is_new());

    let rebuilt = draft.into_project();
    assert_eq!(rebuilt.id, project.id);
    assert_eq!(rebuilt.folder_path_suffix, project.folder_path_suffix);
    assert_eq!(rebuilt.folder_path, None);
}
