//! Records exchanged between the UI layer and the backend.
//!
//! # Responsibility
//! - Mirror the wire shape of projects and clients (snake_case fields).
//! - Provide the form draft and table-row projections the UI renders.
//!
//! # Invariants
//! - Date fields stay plain text on the wire; they are read and written
//!   through `calendar::DateValue`.

pub mod client;
pub mod project;
