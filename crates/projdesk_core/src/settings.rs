//! Runtime settings supplied by the UI shell.
//!
//! Missing keys fall back to defaults, so `{}` is a valid settings document.

use crate::logging::{default_log_level, init_logging, LoggingError};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default home zone offset in minutes (`+09:00`).
pub const DEFAULT_HOME_UTC_OFFSET_MINUTES: i32 = 9 * 60;

#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    InvalidOffset(i32),
    Logging(LoggingError),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid settings document: {err}"),
            Self::InvalidOffset(minutes) => {
                write!(f, "home UTC offset out of range: {minutes} minutes")
            }
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidOffset(_) => None,
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for SettingsError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; file logging stays off when unset.
    pub log_dir: Option<String>,
    /// Offset appended to zone-less date text, in minutes east of UTC.
    pub home_utc_offset_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            home_utc_offset_minutes: DEFAULT_HOME_UTC_OFFSET_MINUTES,
        }
    }
}

impl Settings {
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Home zone as a fixed offset; must lie strictly within ±24h.
    pub fn home_zone(&self) -> Result<FixedOffset, SettingsError> {
        self.home_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(SettingsError::InvalidOffset(self.home_utc_offset_minutes))
    }

    /// Starts file logging when a directory is configured.
    pub fn apply_logging(&self) -> Result<bool, SettingsError> {
        match self.log_dir.as_deref() {
            Some(dir) => {
                init_logging(&self.log_level, dir)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
