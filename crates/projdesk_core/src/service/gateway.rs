//! Async contract for the project/client backend.

use crate::model::client::Client;
use crate::model::project::Project;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to the user for any failed backend operation.
pub const OPERATION_FAILED_MESSAGE: &str = "operation failed";

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Kind of record a gateway call addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Project,
    Client,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Client => write!(f, "client"),
        }
    }
}

/// Failure reported by a gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    NotFound { kind: RecordKind, id: String },
    OperationFailed(String),
}

impl GatewayError {
    /// Text suitable for a user-facing alert; identical for every variant.
    pub fn user_message(&self) -> &'static str {
        OPERATION_FAILED_MESSAGE
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::OperationFailed(message) => write!(f, "operation failed: {message}"),
        }
    }
}

impl Error for GatewayError {}

/// Backend operations consumed by the project and client screens.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn fetch_projects(&self) -> GatewayResult<Vec<Project>>;

    async fn fetch_clients(&self) -> GatewayResult<Vec<Client>>;

    /// Stores a new project and returns the id the backend assigned.
    ///
    /// A client the backend does not know yet is registered first.
    async fn add_project(&self, project: Project) -> GatewayResult<String>;

    async fn update_project(&self, project: Project) -> GatewayResult<()>;

    async fn update_client(&self, client: Client) -> GatewayResult<()>;
}
