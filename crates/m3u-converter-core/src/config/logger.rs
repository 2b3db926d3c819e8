//! Logger configuration (YAML file + environment)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::logging::LogLevel;

/// Log file path; an empty value disables the file
pub const ENV_LOG_FILE: &str = "M3U_CONVERTER_LOG_FILE";
/// Minimum level name
pub const ENV_LOG_LEVEL: &str = "M3U_CONVERTER_LOG_LEVEL";
/// `1`/`true`/`yes` or `0`/`false`/`no`
pub const ENV_CLEAR_LOG: &str = "M3U_CONVERTER_CLEAR_LOG";

const APP_DIR: &str = "archimede_converter";

/// Default log file: `<temp_dir>/archimede_converter/m3u_converter.log`
pub fn default_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(APP_DIR);
    path.push("m3u_converter.log");
    path
}

/// Settings applied when the shared logger is first constructed
///
/// ```
/// use m3u_converter_core::config::LoggerConfig;
/// use m3u_converter_core::logging::LogLevel;
///
/// let config = LoggerConfig::default()
///     .with_log_file("/tmp/m3u.log")
///     .min_level(LogLevel::Info);
/// assert!(config.clear_on_start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Plain-text log file; console only when `None`
    pub log_file: Option<PathBuf>,
    /// Delete the previous log file on first construction
    pub clear_on_start: bool,
    /// Lines below this level are dropped
    pub min_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            clear_on_start: true,
            min_level: LogLevel::Debug,
        }
    }
}

impl LoggerConfig {
    /// Console plus the default log file
    pub fn with_default_file() -> Self {
        Self::default().with_log_file(default_log_path())
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn without_log_file(mut self) -> Self {
        self.log_file = None;
        self
    }

    pub fn clear_on_start(mut self, clear: bool) -> Self {
        self.clear_on_start = clear;
        self
    }

    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// User-level config file (`<config_dir>/archimede_converter/logger.yaml`)
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join(APP_DIR).join("logger.yaml")
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Defaults overridden by `M3U_CONVERTER_*` variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// User config file, then environment overrides
    pub fn load() -> ConfigResult<Self> {
        Ok(Self::from_yaml_file(Self::user_config_path())?.with_env_overrides())
    }

    /// Like `from_env`, but unknown level or flag values are errors
    pub fn try_from_env() -> ConfigResult<Self> {
        Self::default().try_with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; unknown values leave the field as is
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_LOG_FILE) {
            let path = path.trim();
            self.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL).as_deref().and_then(LogLevel::parse) {
            self.min_level = level;
        }

        if let Some(clear) = lookup(ENV_CLEAR_LOG).as_deref().and_then(parse_bool) {
            self.clear_on_start = clear;
        }

        self
    }

    /// Apply overrides from any key lookup, rejecting values that do not parse
    pub fn try_with_overrides<F>(self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if LogLevel::parse(&level).is_none() {
                return Err(ConfigError::invalid_value(ENV_LOG_LEVEL, level));
            }
        }

        if let Some(clear) = lookup(ENV_CLEAR_LOG) {
            if parse_bool(&clear).is_none() {
                return Err(ConfigError::invalid_value(ENV_CLEAR_LOG, clear));
            }
        }

        Ok(self.with_overrides(lookup))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
