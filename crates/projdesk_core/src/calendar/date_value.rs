//! Immutable date/time value with tolerant construction.
//!
//! # Responsibility
//! - Hold one canonical instant produced by the normalization pipeline.
//! - Offer calendar arithmetic and directive-based formatting.
//!
//! # Invariants
//! - Construction from text never fails; unparseable text becomes "now"
//!   and emits a `date_parse_fallback` warning.
//! - Arithmetic that would leave chrono's supported range keeps the
//!   original value.
//!
//! # See also
//! - `calendar::normalize` for the accepted text shapes.

use super::normalize::{normalize_date_text, parse_normalized, DateParseError};
use crate::logging::sanitize_message;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeDelta, TimeZone, Timelike, Utc,
};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// UTC offset of the home timezone, in seconds (`+09:00`).
pub const HOME_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Single-character weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

const CANONICAL_PATTERN: &str = "Y-m-d H:i:s";
const MAX_LOGGED_INPUT_CHARS: usize = 64;
const MAX_DAYS_IN_MONTH: usize = 31;

/// Returns the home timezone as a fixed offset.
pub fn home_zone() -> FixedOffset {
    FixedOffset::east_opt(HOME_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Calendar field an amount is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Interval {
    /// Maps a one-letter interval code (`Y M D H I S`) to an interval.
    ///
    /// Unknown codes fall back to [`Interval::Day`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "Y" => Self::Year,
            "M" => Self::Month,
            "D" => Self::Day,
            "H" => Self::Hour,
            "I" => Self::Minute,
            "S" => Self::Second,
            _ => Self::Day,
        }
    }
}

/// A point in time viewed in a fixed offset (the home zone by default).
///
/// Equality and ordering compare instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    instant: DateTime<FixedOffset>,
}

impl DateValue {
    /// Current time in the home zone.
    pub fn now() -> Self {
        Self::now_in(home_zone())
    }

    /// Current time viewed in `zone`.
    pub fn now_in(zone: FixedOffset) -> Self {
        Self {
            instant: Utc::now().with_timezone(&zone),
        }
    }

    /// Builds a value from loosely-structured text, degrading to "now".
    pub fn parse(text: &str) -> Self {
        Self::parse_in(text, home_zone())
    }

    /// Same as [`DateValue::parse`] with a caller-supplied home zone.
    ///
    /// Empty input means "no date given" and silently yields the current
    /// time; anything else that fails to parse is logged first.
    pub fn parse_in(text: &str, zone: FixedOffset) -> Self {
        if text.is_empty() {
            return Self::now_in(zone);
        }
        match Self::try_parse_in(text, zone) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=date_parse_fallback module=calendar status=fallback input={} error={}",
                    sanitize_message(text, MAX_LOGGED_INPUT_CHARS),
                    err
                );
                Self::now_in(zone)
            }
        }
    }

    /// Strict variant of [`DateValue::parse`] that reports failures.
    pub fn try_parse(text: &str) -> Result<Self, DateParseError> {
        Self::try_parse_in(text, home_zone())
    }

    /// Strict variant of [`DateValue::parse_in`].
    pub fn try_parse_in(text: &str, zone: FixedOffset) -> Result<Self, DateParseError> {
        let normalized = normalize_date_text(text, zone);
        parse_normalized(&normalized, zone).map(|instant| Self { instant })
    }

    /// Formats an arbitrary instant as `H:i:s`.
    pub fn hours_minutes_seconds(instant: DateTime<FixedOffset>) -> String {
        Self::from(instant).format("H:i:s")
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Month of year, 1-based.
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Unix epoch milliseconds.
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Weekday index with Sunday = 0.
    pub fn weekday(&self) -> u32 {
        self.instant.weekday().num_days_from_sunday()
    }

    /// Single-character localized weekday label.
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.weekday() as usize]
    }

    /// Number of the last day in this value's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds `amount` of the interval named by a one-letter code.
    pub fn modify(&self, amount: i64, code: &str) -> Self {
        self.add(amount, Interval::from_code(code))
    }

    /// Adds `amount` units of `interval`; negative amounts subtract.
    ///
    /// Month and year steps keep the day of month and let it overflow into
    /// the following month (Jan 31 + 1 month is early March).
    pub fn add(&self, amount: i64, interval: Interval) -> Self {
        let shifted = match interval {
            Interval::Year => amount
                .checked_mul(12)
                .and_then(|months| self.shift_months(months)),
            Interval::Month => self.shift_months(amount),
            Interval::Day => TimeDelta::try_days(amount)
                .and_then(|delta| self.instant.checked_add_signed(delta)),
            Interval::Hour => TimeDelta::try_hours(amount)
                .and_then(|delta| self.instant.checked_add_signed(delta)),
            Interval::Minute => TimeDelta::try_minutes(amount)
                .and_then(|delta| self.instant.checked_add_signed(delta)),
            Interval::Second => TimeDelta::try_seconds(amount)
                .and_then(|delta| self.instant.checked_add_signed(delta)),
        };

        match shifted {
            Some(instant) => Self { instant },
            None => {
                warn!(
                    "event=date_shift_overflow module=calendar status=error amount={} interval={:?}",
                    amount, interval
                );
                *self
            }
        }
    }

    /// Renders the value through the directive language.
    ///
    /// | char | output |
    /// |---|---|
    /// | `Y` | 4-digit year |
    /// | `m` / `n` | month, zero-padded / plain |
    /// | `d` / `j` | day, zero-padded / plain |
    /// | `H` / `h` | hour (24h), zero-padded / plain |
    /// | `i` | minute, zero-padded |
    /// | `s` | second, zero-padded |
    /// | `t` | last day of the month |
    /// | `W` | weekday label |
    ///
    /// Any other character is copied through.
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        for c in pattern.chars() {
            match c {
                'Y' => out.push_str(&format!("{:04}", self.year())),
                'm' => out.push_str(&format!("{:02}", self.month())),
                'n' => out.push_str(&self.month().to_string()),
                'd' => out.push_str(&format!("{:02}", self.day())),
                'j' => out.push_str(&self.day().to_string()),
                'H' => out.push_str(&format!("{:02}", self.hour())),
                'h' => out.push_str(&self.hour().to_string()),
                'i' => out.push_str(&format!("{:02}", self.minute())),
                's' => out.push_str(&format!("{:02}", self.second())),
                't' => out.push_str(&self.days_in_month().to_string()),
                'W' => out.push_str(self.weekday_label()),
                other => out.push(other),
            }
        }
        out
    }

    /// Whether this value falls on the current calendar date.
    pub fn is_today(&self) -> bool {
        let today = Self::now_in(*self.instant.offset());
        self.format("Y-m-d") == today.format("Y-m-d")
    }

    /// First day of the following month, keeping the time of day.
    pub fn next_month(&self) -> Self {
        self.step_out_of_month(1)
    }

    /// Last day of the preceding month, keeping the time of day.
    pub fn previous_month(&self) -> Self {
        self.step_out_of_month(-1)
    }

    pub fn next_day(&self) -> Self {
        self.add(1, Interval::Day)
    }

    pub fn previous_day(&self) -> Self {
        self.add(-1, Interval::Day)
    }

    pub fn first_of_month(&self) -> Self {
        self.add(1 - i64::from(self.day()), Interval::Day)
    }

    pub fn last_of_month(&self) -> Self {
        match self.instant.with_day(self.days_in_month()) {
            Some(instant) => Self { instant },
            None => *self,
        }
    }

    // Walks day by day from the 28th until the `Y-m` text changes, so a
    // 29th-31st source never skips over a short month.
    fn step_out_of_month(&self, step: i64) -> Self {
        let month_key = self.format("Y-m");
        let mut cursor = self.add(28 - i64::from(self.day()), Interval::Day);
        for _ in 0..=MAX_DAYS_IN_MONTH {
            if cursor.format("Y-m") != month_key {
                break;
            }
            cursor = cursor.add(step, Interval::Day);
        }
        cursor
    }

    fn shift_months(&self, months: i64) -> Option<DateTime<FixedOffset>> {
        let local = self.instant.naive_local();
        let month_index = i64::from(local.year()) * 12 + i64::from(local.month0());
        let target = month_index.checked_add(months)?;
        let year = i32::try_from(target.div_euclid(12)).ok()?;
        let month = u32::try_from(target.rem_euclid(12)).ok()? + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = first.checked_add_signed(TimeDelta::try_days(i64::from(local.day()) - 1)?)?;
        self.instant
            .offset()
            .from_local_datetime(&date.and_time(local.time()))
            .single()
    }
}

impl Default for DateValue {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            instant: instant.with_timezone(&home_zone()),
        }
    }
}

impl FromStr for DateValue {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Display for DateValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(CANONICAL_PATTERN))
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
