//! Backend collaborator contract and UI-facing orchestration.
//!
//! # Responsibility
//! - Define the async gateway the UI layer talks to.
//! - Turn gateway data into table rows and selection filters.
//!
//! # Invariants
//! - Every failure reaching the UI collapses to one generic
//!   operation-failed message; details go to the log.

pub mod gateway;
pub mod memory_gateway;
pub mod project_service;
