//! TOML-based application configuration.
//!
//! Stores the few knobs the dashboard has:
//! - School window start/end times and the check interval
//! - The simulated summary provider's delay
//!
//! Configuration is stored at `~/.config/dayboard/config.toml`. All values
//! default to the stock dashboard behavior (08:00-15:00 window, 60 s check
//! interval, 1 s provider delay).

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::school::{SchoolWindow, DEFAULT_CHECK_INTERVAL};
use crate::summary::SimulatedSummaryProvider;

/// School-window configuration. Times are `HH:MM` local wall-clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolConfig {
    #[serde(default = "default_school_start")]
    pub start: String,
    #[serde(default = "default_school_end")]
    pub end: String,
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,
}

/// Summary provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_summary_delay_ms")]
    pub delay_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayboard/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub school: SchoolConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

fn default_school_start() -> String {
    "08:00".to_string()
}
fn default_school_end() -> String {
    "15:00".to_string()
}
fn default_check_interval_secs() -> u64 {
    DEFAULT_CHECK_INTERVAL.as_secs()
}
fn default_summary_delay_ms() -> u64 {
    1000
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            start: default_school_start(),
            end: default_school_end(),
            check_interval_secs: default_check_interval_secs(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_summary_delay_ms(),
        }
    }
}

impl SchoolConfig {
    /// Parse the configured times into a [`SchoolWindow`].
    pub fn window(&self) -> Result<SchoolWindow, ConfigError> {
        let start = parse_time("school.start", &self.start)?;
        let end = parse_time("school.end", &self.end)?;
        Ok(SchoolWindow::new(start, end))
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

impl SummaryConfig {
    pub fn provider(&self) -> SimulatedSummaryProvider {
        SimulatedSummaryProvider::new(Duration::from_millis(self.delay_ms))
    }
}

fn parse_time(key: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("'{value}' is not a valid HH:MM time: {e}"),
    })
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("dayboard");
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, or return defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, or return defaults if no file exists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| save_err(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_err(e.to_string()))
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// existing field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set_in_memory(key, value)?;
        self.save()
    }

    fn set_in_memory(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let mut json = serde_json::to_value(&*self).map_err(|_| unknown())?;

        let mut parts = key.split('.').peekable();
        let mut current = &mut json;
        loop {
            let part = parts.next().ok_or_else(unknown)?;
            let obj = current.as_object_mut().ok_or_else(unknown)?;
            if parts.peek().is_none() {
                let existing = obj.get(part).ok_or_else(unknown)?;
                let new_value = match existing {
                    serde_json::Value::Number(_) => {
                        let n: u64 =
                            value.parse().map_err(|_| ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            })?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.to_string()),
                };
                obj.insert(part.to_string(), new_value);
                break;
            }
            current = obj.get_mut(part).ok_or_else(unknown)?;
        }

        let updated: Config = serde_json::from_value(json).map_err(|e| {
            ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;
        // Reject values that serde accepts but the domain does not.
        updated.school.window()?;
        *self = updated;
        Ok(())
    }
}
