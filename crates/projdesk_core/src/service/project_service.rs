//! Project screen use-cases.
//!
//! # Responsibility
//! - Load table rows and filter candidates through a `ProjectGateway`.
//! - Save form drafts as add or update depending on draft identity.
//!
//! # Invariants
//! - Failures are logged here and returned unchanged; the UI only shows
//!   `GatewayError::user_message()`.

use crate::model::client::Client;
use crate::model::project::{Project, ProjectDraft, ProjectRow, ProjectStatus};
use crate::multiselect::{Choice, MultiSelect, MultiSelectConfig};
use crate::service::gateway::{GatewayResult, ProjectGateway};
use log::{error, info};

/// Result of saving a project draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new project was stored under this id.
    Created(String),
    Updated,
}

/// Filters applied to the project table.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    pub statuses: MultiSelect<Choice<ProjectStatus>>,
    pub clients: MultiSelect<Choice<Client>>,
}

impl ProjectFilter {
    /// Everything selected, for the given clients.
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            statuses: MultiSelect::new(MultiSelectConfig::over_choices(ProjectStatus::ALL)),
            clients: MultiSelect::new(MultiSelectConfig::over_choices(clients)),
        }
    }

    pub fn admits(&self, project: &Project) -> bool {
        self.statuses.admits(|status| *status == project.status)
            && self.clients.admits(|client| client.id == project.client.id)
    }
}

/// Use-case service for the project list, project form and client list.
pub struct ProjectService<G: ProjectGateway> {
    gateway: G,
}

impl<G: ProjectGateway> ProjectService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Loads every project as a table row.
    pub async fn load_rows(&self) -> GatewayResult<Vec<ProjectRow>> {
        let projects = self.fetch_projects().await?;
        Ok(projects.iter().map(ProjectRow::from).collect())
    }

    /// Loads the table rows admitted by `filter`.
    pub async fn load_filtered_rows(&self, filter: &ProjectFilter) -> GatewayResult<Vec<ProjectRow>> {
        let projects = self.fetch_projects().await?;
        Ok(projects
            .iter()
            .filter(|project| filter.admits(project))
            .map(ProjectRow::from)
            .collect())
    }

    pub async fn load_clients(&self) -> GatewayResult<Vec<Client>> {
        self.gateway.fetch_clients().await.map_err(|err| {
            error!("event=clients_fetch module=service status=error error={err}");
            err
        })
    }

    /// Builds a table filter over the current client list.
    pub async fn project_filter(&self) -> GatewayResult<ProjectFilter> {
        Ok(ProjectFilter::new(self.load_clients().await?))
    }

    /// Re-reads the client list into an existing filter and resets the
    /// client selection to "all".
    pub async fn refresh_client_filter(&self, filter: &mut ProjectFilter) -> GatewayResult<()> {
        let refreshed = MultiSelectConfig::over_choices(self.load_clients().await?);
        filter.clients.set_candidates(refreshed.candidates);
        filter.clients.force_set(refreshed.initial_selection);
        Ok(())
    }

    /// Adds a new draft or updates an existing one.
    pub async fn save_draft(&self, draft: ProjectDraft) -> GatewayResult<SaveOutcome> {
        if draft.is_new() {
            let id = self
                .gateway
                .add_project(draft.into_project())
                .await
                .map_err(|err| {
                    error!("event=project_add module=service status=error error={err}");
                    err
                })?;
            info!("event=project_add module=service status=ok project_id={id}");
            return Ok(SaveOutcome::Created(id));
        }

        let id = draft.id.clone();
        self.gateway
            .update_project(draft.into_project())
            .await
            .map_err(|err| {
                error!(
                    "event=project_update module=service status=error project_id={id} error={err}"
                );
                err
            })?;
        info!("event=project_update module=service status=ok project_id={id}");
        Ok(SaveOutcome::Updated)
    }

    pub async fn update_client(&self, client: Client) -> GatewayResult<()> {
        let id = client.id.clone();
        self.gateway.update_client(client).await.map_err(|err| {
            error!("event=client_update module=service status=error client_id={id} error={err}");
            err
        })
    }

    async fn fetch_projects(&self) -> GatewayResult<Vec<Project>> {
        self.gateway.fetch_projects().await.map_err(|err| {
            error!("event=projects_fetch module=service status=error error={err}");
            err
        })
    }
}
