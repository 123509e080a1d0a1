//! TOML-based application configuration.
//!
//! Stores the default countdown duration and interval plus ring rendering
//! preferences. Stored at `~/.config/ringdown/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::timer::TimerConfig;

/// Countdown defaults for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Ring rendering preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSection {
    /// Number of segments the ring is drawn with.
    #[serde(default = "default_segments")]
    pub segments: usize,
    /// Draw with ASCII characters only.
    #[serde(default)]
    pub ascii: bool,
    /// Ring the terminal bell on completion.
    #[serde(default = "default_true")]
    pub bell: bool,
}

// Default functions
fn default_duration_secs() -> u64 {
    60
}
fn default_interval_ms() -> u64 {
    1_000
}
fn default_segments() -> usize {
    24
}
fn default_true() -> bool {
    true
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            ascii: false,
            bell: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ringdown/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub ui: UiSection,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()).into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()).into())
    }

    /// Path of the config file on disk.
    pub fn config_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults first if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; missing files yield (and persist) defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Does not persist; call [`Config::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// as the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Validated countdown configuration from the stored defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored values violate the countdown
    /// invariants (zero duration/interval, interval longer than duration).
    pub fn timer_config(&self) -> Result<TimerConfig> {
        Ok(TimerConfig::new(
            self.timer.duration_secs.saturating_mul(1_000),
            self.timer.interval_ms,
        )?)
    }
}
