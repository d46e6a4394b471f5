//! Flutter-facing bindings over `projdesk_core`.

pub mod api;
