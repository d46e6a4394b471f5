//! Core logic for the projdesk desktop app.
//! UI bindings call into this crate; it owns date handling, selection
//! policy and the backend contract.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod multiselect;
pub mod service;
pub mod settings;

pub use calendar::{DateParseError, DateValue, Interval};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::client::Client;
pub use model::project::{Project, ProjectDraft, ProjectRow, ProjectStatus};
pub use multiselect::{Choice, MultiSelect, MultiSelectConfig, SelectionControl};
pub use service::gateway::{GatewayError, GatewayResult, ProjectGateway, RecordKind};
pub use service::memory_gateway::InMemoryProjectGateway;
pub use service::project_service::{ProjectFilter, ProjectService, SaveOutcome};
pub use settings::{Settings, SettingsError};

/// Minimal health-check API for binding smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
