//! M3U Converter Core
//!
//! Logging core of the Archimede M3U converter plugin. The plugin itself runs
//! inside the Enigma2 Python host; this crate holds the part that has real
//! behavior: a process-wide logger writing colored lines to the console and
//! plain lines to an optional log file.
//!
//! ```rust,no_run
//! use m3u_converter_core::{LoggerConfig, ProcessLogger};
//!
//! // Once, at plugin start
//! let logger = ProcessLogger::from_config(LoggerConfig::with_default_file());
//!
//! logger.info(&format!("converted {} of {} entries", 118, 120));
//! logger.log("bogus", "written with the [LOG] label");
//! ```
//!
//! Embedders that want the user's `logger.yaml` and the `M3U_CONVERTER_*`
//! variables honored build the shared logger with
//! `ProcessLogger::from_config(LoggerConfig::load()?)`; the Python binding's
//! `ProcessLogger.from_env()` does the same.
//!
//! Components that only need to emit messages should take a
//! [`SharedLogger`] so they can be handed a [`NoOpLogger`] in tests.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{default_log_path, ConfigError, ConfigResult, LoggerConfig};

pub use logging::{
    ErrorReport, LogLevel, LogSinkError, Logger, LoggerCell, LoggerExt, NoOpLogger,
    ProcessLogger, SharedLogger,
};
