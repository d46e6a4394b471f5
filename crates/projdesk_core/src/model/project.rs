//! Project record, form draft and table projection.
//!
//! # Invariants
//! - A draft with an empty `id` is new; the backend assigns the id on add.
//! - Dates picked in the form are stored as `Y/m/d` text so they read back
//!   through `DateValue` unchanged.

use crate::calendar::DateValue;
use crate::model::client::Client;
use serde::{Deserialize, Serialize};

/// Pattern used for dates written by the project form.
pub const FORM_DATE_PATTERN: &str = "Y/m/d";
/// Pattern used for dates shown in the project table.
pub const TABLE_DATE_PATTERN: &str = "Y/m/d";

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Every status, in display order.
    pub const ALL: [ProjectStatus; 3] = [Self::InProgress, Self::Completed, Self::OnHold];

    /// Localized label shown in the table and the status picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "進行中",
            Self::Completed => "完了",
            Self::OnHold => "待機中",
        }
    }
}

/// Project as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order_date: String,
    pub due_date: String,
    #[serde(default)]
    pub completion_date: Option<String>,
    pub client: Client,
    pub status: ProjectStatus,
    /// Absolute project folder, filled in on fetch when the backend knows
    /// the projects root.
    #[serde(default)]
    pub folder_path: Option<String>,
    /// Folder name below the projects root.
    #[serde(default)]
    pub folder_path_suffix: Option<String>,
}

impl Project {
    /// Order date as a value, `None` when blank or unreadable.
    pub fn order_date_value(&self) -> Option<DateValue> {
        parse_stored_date(&self.order_date)
    }

    pub fn due_date_value(&self) -> Option<DateValue> {
        parse_stored_date(&self.due_date)
    }

    pub fn completion_date_value(&self) -> Option<DateValue> {
        self.completion_date.as_deref().and_then(parse_stored_date)
    }
}

/// Editable state behind the create/update project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order_date: String,
    pub due_date: String,
    pub completion_date: Option<String>,
    pub client: Client,
    pub status: ProjectStatus,
    pub folder_path_suffix: Option<String>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            order_date: String::new(),
            due_date: String::new(),
            completion_date: None,
            client: Client::default(),
            status: ProjectStatus::OnHold,
            folder_path_suffix: None,
        }
    }
}

impl ProjectDraft {
    /// Starts an edit of an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            order_date: project.order_date.clone(),
            due_date: project.due_date.clone(),
            completion_date: project.completion_date.clone(),
            client: project.client.clone(),
            status: project.status,
            folder_path_suffix: project.folder_path_suffix.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Stores the picked order date; a cleared picker means today.
    pub fn set_order_date(&mut self, picked: Option<DateValue>) {
        self.order_date = form_date_text(picked);
    }

    pub fn set_due_date(&mut self, picked: Option<DateValue>) {
        self.due_date = form_date_text(picked);
    }

    pub fn set_completion_date(&mut self, picked: Option<DateValue>) {
        self.completion_date = Some(form_date_text(picked));
    }

    /// Selects the client with `client_id` from `clients`.
    ///
    /// Returns `false` and keeps the current client when no id matches.
    pub fn select_client(&mut self, clients: &[Client], client_id: &str) -> bool {
        match clients.iter().find(|client| client.id == client_id) {
            Some(client) => {
                self.client = client.clone();
                true
            }
            None => false,
        }
    }

    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            order_date: self.order_date,
            due_date: self.due_date,
            completion_date: self.completion_date,
            client: self.client,
            status: self.status,
            folder_path: None,
            folder_path_suffix: self.folder_path_suffix,
        }
    }
}

/// One row of the project table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectRow {
    pub id: String,
    pub order_date: String,
    pub due_date: String,
    pub project_name: String,
    pub description: String,
    pub status: String,
    pub client_id: String,
    pub company_name: String,
    pub contact_name: String,
    pub project_folder_path: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            order_date: table_date_text(&project.order_date),
            due_date: table_date_text(&project.due_date),
            project_name: project.title.clone(),
            description: project.description.clone(),
            status: project.status.label().to_string(),
            client_id: project.client.id.clone(),
            company_name: project.client.name.clone(),
            contact_name: project.client.contact_person.clone(),
            project_folder_path: project.folder_path.clone().unwrap_or_default(),
        }
    }
}

fn parse_stored_date(text: &str) -> Option<DateValue> {
    if text.trim().is_empty() {
        return None;
    }
    DateValue::try_parse(text).ok()
}

fn form_date_text(picked: Option<DateValue>) -> String {
    picked.unwrap_or_else(DateValue::now).format(FORM_DATE_PATTERN)
}

// Unreadable stored text is shown as-is rather than replaced by today.
fn table_date_text(stored: &str) -> String {
    match parse_stored_date(stored) {
        Some(value) => value.format(TABLE_DATE_PATTERN),
        None => stored.to_string(),
    }
}
