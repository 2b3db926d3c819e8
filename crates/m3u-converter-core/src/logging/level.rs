//! Log levels, their fixed-width labels and console colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI sequence that resets console color
pub const COLOR_RESET: &str = "\x1b[0m";

/// Label used for levels that are not recognized
pub const FALLBACK_LABEL: &str = "[LOG] ";

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    #[serde(alias = "warn")]
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// Fixed-width label, padded with spaces to seven characters
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO] ",
            LogLevel::Warning => "[WARN] ",
            LogLevel::Error => "[ERROR]",
        }
    }

    /// ANSI color applied to the message on the console
    pub fn color(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[92m",
            LogLevel::Info => "\x1b[97m",
            LogLevel::Warning => "\x1b[93m",
            LogLevel::Error => "\x1b[91m",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// Case-insensitive lookup; `None` for anything unrecognized
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warning" | "warn" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a level name through `FromStr`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Label and color for a possibly unrecognized level
pub(crate) fn decorations(level: Option<LogLevel>) -> (&'static str, &'static str) {
    match level {
        Some(level) => (level.label(), level.color()),
        None => (FALLBACK_LABEL, ""),
    }
}
