//! In-process gateway implementation.
//!
//! # Responsibility
//! - Back the UI layer in tests and smoke runs without a real backend.
//!
//! # Invariants
//! - Ids are decimal strings allocated as `max + 1` per table.
//! - Projects reference clients by id; fetched projects carry the current
//!   client record.
//! - With a projects root, fetched projects carry
//!   `root/<folder_path_suffix or id>` as their folder path.

use crate::model::client::Client;
use crate::model::project::Project;
use crate::service::gateway::{GatewayError, GatewayResult, ProjectGateway, RecordKind};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    clients: Vec<Client>,
}

impl Tables {
    // Registers `client` when its id is unknown and returns the stored id.
    fn ensure_client(&mut self, client: &Client) -> String {
        if self.clients.iter().any(|known| known.id == client.id) {
            return client.id.clone();
        }
        let id = next_id(self.clients.iter().map(|known| known.id.as_str()));
        let mut registered = client.clone();
        registered.id = id.clone();
        self.clients.push(registered);
        debug!("event=client_register module=gateway status=ok client_id={id}");
        id
    }

    fn joined(&self, project: &Project, projects_root: Option<&Path>) -> Project {
        let mut joined = project.clone();
        if let Some(client) = self.clients.iter().find(|c| c.id == project.client.id) {
            joined.client = client.clone();
        }
        if let Some(root) = projects_root {
            let suffix = project.folder_path_suffix.as_deref().unwrap_or(&project.id);
            joined.folder_path = Some(root.join(suffix).to_string_lossy().into_owned());
        }
        joined
    }
}

/// Gateway keeping projects and clients in memory.
#[derive(Debug, Default)]
pub struct InMemoryProjectGateway {
    tables: Mutex<Tables>,
    projects_root: Option<PathBuf>,
}

impl InMemoryProjectGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the gateway with existing records.
    pub fn with_records(projects: Vec<Project>, clients: Vec<Client>) -> Self {
        Self {
            tables: Mutex::new(Tables { projects, clients }),
            projects_root: None,
        }
    }

    /// Directory holding one folder per project.
    pub fn with_projects_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.projects_root = Some(root.into());
        self
    }

    fn lock(&self) -> GatewayResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| GatewayError::OperationFailed("gateway state lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProjectGateway for InMemoryProjectGateway {
    async fn fetch_projects(&self) -> GatewayResult<Vec<Project>> {
        let tables = self.lock()?;
        Ok(tables
            .projects
            .iter()
            .map(|project| tables.joined(project, self.projects_root.as_deref()))
            .collect())
    }

    async fn fetch_clients(&self) -> GatewayResult<Vec<Client>> {
        Ok(self.lock()?.clients.clone())
    }

    async fn add_project(&self, mut project: Project) -> GatewayResult<String> {
        let mut tables = self.lock()?;
        project.client.id = tables.ensure_client(&project.client);
        project.id = next_id(tables.projects.iter().map(|known| known.id.as_str()));
        let id = project.id.clone();
        tables.projects.push(project);
        Ok(id)
    }

    async fn update_project(&self, mut project: Project) -> GatewayResult<()> {
        let mut tables = self.lock()?;
        let index = tables
            .projects
            .iter()
            .position(|known| known.id == project.id)
            .ok_or_else(|| GatewayError::NotFound {
                kind: RecordKind::Project,
                id: project.id.clone(),
            })?;
        project.client.id = tables.ensure_client(&project.client);
        tables.projects[index] = project;
        Ok(())
    }

    async fn update_client(&self, client: Client) -> GatewayResult<()> {
        let mut tables = self.lock()?;
        let slot = tables
            .clients
            .iter_mut()
            .find(|known| known.id == client.id)
            .ok_or_else(|| GatewayError::NotFound {
                kind: RecordKind::Client,
                id: client.id.clone(),
            })?;
        *slot = client;
        Ok(())
    }
}

// Non-numeric ids count as zero.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.map(|id| id.parse::<u64>().unwrap_or(0)).max().unwrap_or(0);
    (max + 1).to_string()
}
