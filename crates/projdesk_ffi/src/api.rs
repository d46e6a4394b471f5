//! FFI API for the Flutter shell.
//!
//! # Responsibility
//! - Expose date formatting and selection policy as sync, string-based calls.
//! - Keep every call stateless apart from the applied settings; the UI owns
//!   the selection between calls.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Date inputs never fail; unreadable text renders as "now".
//! - Date text is read in the home zone from `apply_settings`, `+09:00`
//!   until settings are applied. The zone is set at most once per process.

use chrono::FixedOffset;
use once_cell::sync::OnceCell;
use projdesk_core::calendar::home_zone;
use projdesk_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DateValue, MultiSelect, MultiSelectConfig, Settings,
};

/// Canonical pattern for values handed back to the UI.
const CANONICAL_PATTERN: &str = "Y-m-d H:i:s";

static APPLIED_ZONE: OnceCell<FixedOffset> = OnceCell::new();

fn active_zone() -> FixedOffset {
    APPLIED_ZONE.get().copied().unwrap_or_else(home_zone)
}

fn parse_date(input: &str) -> DateValue {
    DateValue::parse_in(input, active_zone())
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Applies a JSON settings document: home zone first, then file logging
/// when `log_dir` is set.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn apply_settings(json: String) -> String {
    match apply_settings_inner(&json) {
        Ok(()) => String::new(),
        Err(message) => message,
    }
}

fn apply_settings_inner(json: &str) -> Result<(), String> {
    let settings = Settings::from_json_str(json).map_err(|err| err.to_string())?;
    let zone = settings.home_zone().map_err(|err| err.to_string())?;
    let active = *APPLIED_ZONE.get_or_init(|| zone);
    if active != zone {
        return Err(format!(
            "home zone already set to `{active}`; refusing to switch to `{zone}`"
        ));
    }
    settings.apply_logging().map_err(|err| err.to_string())?;
    Ok(())
}

/// Formats `input` (or now, when absent) with a directive pattern such as
/// `Y/m/d(W)`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_date(input: Option<String>, pattern: String) -> String {
    input
        .as_deref()
        .map_or_else(|| DateValue::now_in(active_zone()), parse_date)
        .format(&pattern)
}

/// Adds `amount` units of the interval code (`Y M D H I S`) and returns the
/// canonical `Y-m-d H:i:s` text.
#[flutter_rust_bridge::frb(sync)]
pub fn shift_date(input: String, amount: i64, interval: String) -> String {
    parse_date(&input)
        .modify(amount, &interval)
        .format(CANONICAL_PATTERN)
}

/// Calendar page navigation: first day of the next month, or last day of
/// the previous one.
#[flutter_rust_bridge::frb(sync)]
pub fn navigate_month(input: String, forward: bool) -> String {
    let value = parse_date(&input);
    let target = if forward {
        value.next_month()
    } else {
        value.previous_month()
    };
    target.format(CANONICAL_PATTERN)
}

/// First and last day of the month containing a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBounds {
    pub first: String,
    pub last: String,
    /// Whether the input date is today.
    pub contains_today: bool,
}

#[flutter_rust_bridge::frb(sync)]
pub fn month_bounds(input: String) -> MonthBounds {
    let value = parse_date(&input);
    MonthBounds {
        first: value.first_of_month().format(CANONICAL_PATTERN),
        last: value.last_of_month().format(CANONICAL_PATTERN),
        contains_today: value.is_today(),
    }
}

/// Unix epoch milliseconds of `input` read in the home zone, for date
/// pickers that work on epoch values.
#[flutter_rust_bridge::frb(sync)]
pub fn date_to_epoch_millis(input: String) -> i64 {
    epoch_millis_in(&input, active_zone())
}

fn epoch_millis_in(input: &str, zone: FixedOffset) -> i64 {
    DateValue::parse_in(input, zone).timestamp_millis()
}

/// Checkbox-group state sent by the UI for one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionToggleRequest {
    pub candidates: Vec<String>,
    pub selected: Vec<String>,
    pub all_item: String,
    pub allow_empty_selection: bool,
    /// Overrides `[all_item]` as the "everything selected" value.
    pub all_selected: Option<Vec<String>>,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionToggleResponse {
    pub selected: Vec<String>,
    pub changed: bool,
    /// Drives the outlined/contained style of the trigger button.
    pub is_all_selected: bool,
    /// Tooltip text for the trigger button.
    pub label: String,
}

/// Applies one toggle to the given selection and returns the new state.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_selection(request: SelectionToggleRequest) -> SelectionToggleResponse {
    let mut config = MultiSelectConfig::new(request.candidates, request.selected, request.all_item)
        .with_empty_selection(request.allow_empty_selection);
    if let Some(all_selected) = request.all_selected {
        config = config.with_all_selected(all_selected);
    }

    let mut select = MultiSelect::new(config);
    let changed = select.toggle(&request.item);
    SelectionToggleResponse {
        selected: select.selected().to_vec(),
        changed,
        is_all_selected: select.is_all_selected(),
        label: select.selection_label(|item| item.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_settings, core_version, date_to_epoch_millis, epoch_millis_in, format_date,
        init_logging, month_bounds, navigate_month, ping, shift_date, toggle_selection,
        SelectionToggleRequest,
    };
    use chrono::FixedOffset;

    fn request(selected: &[&str], item: &str) -> SelectionToggleRequest {
        SelectionToggleRequest {
            candidates: vec!["A".to_string(), "B".to_string(), "ALL".to_string()],
            selected: selected.iter().map(|value| value.to_string()).collect(),
            all_item: "ALL".to_string(),
            allow_empty_selection: false,
            all_selected: None,
            item: item.to_string(),
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), "   ".to_string());
        assert!(error.contains("invalid log directory"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/projdesk-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn apply_settings_rejects_bad_documents_and_offsets() {
        assert!(apply_settings("{".to_string()).contains("invalid settings document"));
        assert!(apply_settings(r#"{"home_utc_offset_minutes": 1440}"#.to_string())
            .contains("out of range"));
    }

    #[test]
    fn apply_settings_keeps_the_first_home_zone() {
        assert_eq!(apply_settings("{}".to_string()), "");
        assert_eq!(apply_settings(r#"{"home_utc_offset_minutes": 540}"#.to_string()), "");

        let error = apply_settings(r#"{"home_utc_offset_minutes": -300}"#.to_string());
        assert!(error.contains("refusing to switch"));
        assert_eq!(date_to_epoch_millis("2024-03-01".to_string()), 1_709_218_800_000);
    }

    #[test]
    fn home_zone_decides_the_instant_of_local_text() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(epoch_millis_in("2024-03-01", tokyo), 1_709_218_800_000);
        assert_eq!(epoch_millis_in("2024-03-01", new_york), 1_709_269_200_000);
        assert_eq!(
            epoch_millis_in("2024/03/01 09:00:00", new_york)
                - epoch_millis_in("2024/03/01 09:00:00", tokyo),
            14 * 3600 * 1000
        );
    }

    #[test]
    fn format_date_renders_pattern() {
        assert_eq!(
            format_date(Some("20240301".to_string()), "Y/m/d(W)".to_string()),
            "2024/03/01(金)"
        );
        assert_eq!(format_date(None, "Y".to_string()).len(), 4);
    }

    #[test]
    fn shift_and_navigate_return_canonical_text() {
        assert_eq!(
            shift_date("2024-01-31".to_string(), 1, "D".to_string()),
            "2024-02-01 00:00:00"
        );
        assert_eq!(
            navigate_month("2024-01-31 09:00:00".to_string(), true),
            "2024-02-01 09:00:00"
        );
        assert_eq!(
            navigate_month("2024-03-15".to_string(), false),
            "2024-02-29 00:00:00"
        );
    }

    #[test]
    fn month_bounds_cover_leap_february() {
        let bounds = month_bounds("2024-02-10".to_string());
        assert_eq!(bounds.first, "2024-02-01 00:00:00");
        assert_eq!(bounds.last, "2024-02-29 00:00:00");
        assert!(!bounds.contains_today);
    }

    #[test]
    fn toggle_selection_collapses_and_labels() {
        let first = toggle_selection(request(&["ALL"], "A"));
        assert_eq!(first.selected, vec!["A".to_string()]);
        assert!(first.changed);
        assert_eq!(first.label, "A");

        let second = toggle_selection(request(&["A"], "B"));
        assert_eq!(second.selected, vec!["ALL".to_string()]);
        assert!(second.is_all_selected);
    }

    #[test]
    fn toggle_selection_refuses_to_empty() {
        let response = toggle_selection(request(&["A"], "A"));
        assert_eq!(response.selected, vec!["A".to_string()]);
        assert!(!response.changed);
    }
}
