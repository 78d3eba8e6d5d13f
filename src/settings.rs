//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `LEADBOOK_`-prefixed environment variables (for example
//! `LEADBOOK_DUE_TODAY_WINDOW_HOURS=4`).

use crate::activity::domain::{DEFAULT_DUE_TODAY_WINDOW_HOURS, TaskStatusPolicy};
use chrono::Duration;
use chrono::format::{Item, StrftimeItems};
use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LEADBOOK";

/// Largest accepted due-today window, one week.
pub const MAX_DUE_TODAY_WINDOW_HOURS: u32 = 24 * 7;

/// Largest accepted recent-activity window, ten years.
pub const MAX_RECENT_ACTIVITY_DAYS: u32 = 3650;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or decoded.
    #[error(transparent)]
    Source(#[from] ConfigError),

    /// A value was decoded but is out of range.
    #[error("invalid setting `{key}`: {reason}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Tunables for status derivation, dashboards and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmSettings {
    /// Width in hours of the due-today window on either side of now.
    pub due_today_window_hours: u32,
    /// How many days back the dashboard counts activities as recent.
    pub recent_activity_days: u32,
    /// `strftime` pattern for the entry-date column of lead exports.
    pub csv_date_format: String,
}

impl Default for CrmSettings {
    fn default() -> Self {
        Self {
            due_today_window_hours: DEFAULT_DUE_TODAY_WINDOW_HOURS,
            recent_activity_days: 7,
            csv_date_format: "%Y-%m-%d".to_owned(),
        }
    }
}

impl CrmSettings {
    /// Loads settings from an optional TOML file and the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source cannot be decoded or a value is
    /// out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(file) = path {
            builder = builder.add_source(File::from(file).required(false));
        }
        Self::finish(builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    /// Parses settings from TOML text without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the text cannot be decoded or a value is
    /// out of range.
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()
    }

    fn validate(self) -> Result<Self, SettingsError> {
        if !(1..=MAX_DUE_TODAY_WINDOW_HOURS).contains(&self.due_today_window_hours) {
            return Err(SettingsError::InvalidValue {
                key: "due_today_window_hours",
                reason: format!("must be between 1 and {MAX_DUE_TODAY_WINDOW_HOURS} hours"),
            });
        }
        if !(1..=MAX_RECENT_ACTIVITY_DAYS).contains(&self.recent_activity_days) {
            return Err(SettingsError::InvalidValue {
                key: "recent_activity_days",
                reason: format!("must be between 1 and {MAX_RECENT_ACTIVITY_DAYS} days"),
            });
        }
        let malformed = StrftimeItems::new(&self.csv_date_format)
            .any(|item| matches!(item, Item::Error));
        if malformed || self.csv_date_format.is_empty() {
            return Err(SettingsError::InvalidValue {
                key: "csv_date_format",
                reason: format!("not a strftime pattern: {:?}", self.csv_date_format),
            });
        }
        Ok(self)
    }

    /// Returns the task status policy for the configured window.
    #[must_use]
    pub fn task_status_policy(&self) -> TaskStatusPolicy {
        TaskStatusPolicy::new(Duration::hours(i64::from(self.due_today_window_hours)))
    }

    /// Returns the dashboard's recent-activity window.
    #[must_use]
    pub fn recent_activity_window(&self) -> Duration {
        Duration::days(i64::from(self.recent_activity_days))
    }
}
