//! Leveled console and file logging for the converter plugin

mod console;
mod error;
mod format;
mod level;
mod noop;
mod process_logger;
mod report;
mod traits;

pub use console::{ConsoleSink, MemoryConsole, StdoutConsole};
pub use error::LogSinkError;
pub use format::{console_line, file_line, timestamp, TIMESTAMP_FORMAT};
pub use level::{LogLevel, UnknownLevel, COLOR_RESET, FALLBACK_LABEL};
pub use noop::NoOpLogger;
pub use process_logger::{FailureHook, LoggerCell, ProcessLogger};
pub use report::ErrorReport;
pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};

pub use crate::config::default_log_path;
