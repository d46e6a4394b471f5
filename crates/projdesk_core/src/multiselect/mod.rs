//! Checkbox-group selection with an "ALL" pseudo-item.
//!
//! # Responsibility
//! - Own the selection policy for a group whose candidates include a
//!   select-everything sentinel.
//! - Stay UI-agnostic: bindings drive it through `toggle` / `force_set`.
//!
//! # Invariants
//! - Unless empty selection is allowed, a toggle never leaves the group
//!   with nothing selected.
//! - Selecting every concrete item collapses to the configured
//!   "all selected" representation.
//! - The sentinel and concrete items are never combined by a toggle.

pub mod choice;
pub mod control;
pub mod state;

pub use choice::Choice;
pub use control::SelectionControl;
pub use state::{MultiSelect, MultiSelectConfig};
