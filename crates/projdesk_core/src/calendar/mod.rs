//! Date normalization, arithmetic and formatting.
//!
//! # Responsibility
//! - Turn loosely-structured date text from pickers, tables and the backend
//!   into one canonical instant.
//! - Render that instant through a small directive language (`Y-m-d H:i:s`).
//!
//! # Invariants
//! - A `DateValue` always holds a valid instant; bad input degrades to "now".
//! - Every "modifying" operation returns a new value.
//! - Field accessors read the value in its own offset, which is the home
//!   zone (`+09:00`) unless the caller chose another one.

pub mod date_value;
pub mod normalize;

pub use date_value::{home_zone, DateValue, Interval, HOME_UTC_OFFSET_SECS, WEEKDAY_LABELS};
pub use normalize::{normalize_date_text, DateParseError};
