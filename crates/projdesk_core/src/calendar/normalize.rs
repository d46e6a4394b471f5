//! Text normalization pipeline for date input.
//!
//! Accepted shapes: `YYYYMMDD`, `YYYY-MM-DD[ hh:mm[:ss]]`,
//! `YYYY/MM/DD[ hh:mm[:ss]]`, and ISO-8601 text ending in `Z`.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Length of a bare `YYYY-MM-DD` date.
const DATE_ONLY_LEN: usize = 10;
/// Length of a compact `YYYYMMDD` date.
const COMPACT_DATE_LEN: usize = 8;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%dT%H:%M%:z"];

/// Reason a piece of date text could not be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Nothing left after trimming.
    Empty,
    /// The normalized text is not a date the parser understands.
    Unrecognized { normalized: String },
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "date text is empty"),
            Self::Unrecognized { normalized } => {
                write!(f, "unrecognized date text `{normalized}`")
            }
        }
    }
}

impl Error for DateParseError {}

/// Applies the normalization steps and returns the text handed to the parser.
///
/// 1. trim surrounding whitespace;
/// 2. an 8-character input is read as `YYYYMMDD` and expanded to midnight;
/// 3. `/` becomes `-`;
/// 4. spaces become the ISO `T` joiner;
/// 5. text carrying a time part either loses it (trailing `Z`, the time of
///    day is not trusted) or gets the home offset appended.
pub fn normalize_date_text(input: &str, zone: FixedOffset) -> String {
    let trimmed = input.trim();
    let expanded = if trimmed.chars().count() == COMPACT_DATE_LEN {
        expand_compact_date(trimmed)
    } else {
        trimmed.to_string()
    };

    let mut text = expanded.replace('/', "-").replace(' ', "T");
    if text.chars().count() > DATE_ONLY_LEN {
        if text.ends_with('Z') {
            text = text.chars().take(DATE_ONLY_LEN).collect();
        } else {
            text.push_str(&offset_suffix(zone));
        }
    }
    text
}

/// Parses already-normalized text into an instant viewed in `zone`.
///
/// Date-only text resolves to midnight of that calendar date in `zone`.
pub(crate) fn parse_normalized(
    text: &str,
    zone: FixedOffset,
) -> Result<DateTime<FixedOffset>, DateParseError> {
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    let parsed = if text.contains('T') {
        parse_date_time(text).map(|instant| instant.with_timezone(&zone))
    } else {
        parse_date_only(text)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|midnight| zone.from_local_datetime(&midnight).single())
    };

    parsed.ok_or_else(|| DateParseError::Unrecognized {
        normalized: text.to_string(),
    })
}

fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
}

fn parse_date_only(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d"))
        .ok()
}

fn expand_compact_date(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let year: String = chars[0..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..8].iter().collect();
    format!("{year}-{month}-{day} 00:00:00")
}

fn offset_suffix(zone: FixedOffset) -> String {
    let seconds = zone.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::{normalize_date_text, offset_suffix, parse_normalized, DateParseError};
    use chrono::{Datelike, FixedOffset, Timelike};

    fn tokyo() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn compact_date_expands_to_midnight_with_home_offset() {
        assert_eq!(
            normalize_date_text(" 20240301 ", tokyo()),
            "2024-03-01T00:00:00+09:00"
        );
    }

    #[test]
    fn slashes_and_spaces_are_rewritten() {
        assert_eq!(
            normalize_date_text("2024/03/01 12:30:00", tokyo()),
            "2024-03-01T12:30:00+09:00"
        );
        assert_eq!(normalize_date_text("2024/03/01", tokyo()), "2024-03-01");
    }

    #[test]
    fn utc_marker_drops_time_of_day() {
        assert_eq!(
            normalize_date_text("2024-02-29T15:04:05.000Z", tokyo()),
            "2024-02-29"
        );
    }

    #[test]
    fn offset_suffix_handles_negative_and_partial_hours() {
        assert_eq!(offset_suffix(FixedOffset::west_opt(5 * 3600).unwrap()), "-05:00");
        assert_eq!(offset_suffix(FixedOffset::east_opt(5 * 3600 + 1800).unwrap()), "+05:30");
    }

    #[test]
    fn parse_accepts_minutes_without_seconds() {
        let instant = parse_normalized("2024-03-01T08:15+09:00", tokyo()).unwrap();
        assert_eq!((instant.hour(), instant.minute(), instant.second()), (8, 15, 0));
    }

    #[test]
    fn date_only_text_is_midnight_in_zone() {
        let instant = parse_normalized("2024-03-01", tokyo()).unwrap();
        assert_eq!((instant.year(), instant.month(), instant.day()), (2024, 3, 1));
        assert_eq!(instant.hour(), 0);
    }

    #[test]
    fn parse_reports_empty_and_unrecognized_text() {
        assert_eq!(parse_normalized("", tokyo()), Err(DateParseError::Empty));
        let err = parse_normalized("not-a-date", tokyo()).unwrap_err();
        assert_eq!(
            err,
            DateParseError::Unrecognized {
                normalized: "not-a-date".to_string()
            }
        );
    }
}
