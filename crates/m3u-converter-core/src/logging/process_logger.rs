//! Process-wide colored console and file logger
//!
//! Every line goes to the console with an ANSI color per level. When a log
//! file is configured the same line, without color codes, is appended to it.
//! The file is opened and closed on every call; no handle is kept between
//! calls. Nothing in here ever returns an error or panics on I/O failure.
//!
//! A logger can be owned and injected (`ProcessLogger::new`) or shared
//! process-wide (`ProcessLogger::instance`). The shared one is created
//! exactly once, with double-checked locking in `LoggerCell`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::{const_mutex, Mutex, RwLock};

use super::console::{ConsoleSink, StdoutConsole};
use super::error::LogSinkError;
use super::format::{console_line, file_line, timestamp, write_failure_notice};
use super::level::LogLevel;
use super::report::ErrorReport;
use super::traits::Logger;
use crate::config::LoggerConfig;

/// Callback invoked for every swallowed sink failure
pub type FailureHook = Arc<dyn Fn(&LogSinkError) + Send + Sync>;

/// Leveled logger writing to the console and an optional log file
pub struct ProcessLogger {
    log_file: Option<PathBuf>,
    min_level: LogLevel,
    console: Arc<dyn ConsoleSink>,
    failures: AtomicU64,
    failure_hook: RwLock<Option<FailureHook>>,
}

impl ProcessLogger {
    /// Create an owned logger printing to stdout
    ///
    /// If `clear_on_start` is set, any previous log file is removed here.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_console(config, Arc::new(StdoutConsole::new()))
    }

    /// Create an owned logger with a custom console sink
    pub fn with_console(config: LoggerConfig, console: Arc<dyn ConsoleSink>) -> Self {
        let logger = Self {
            log_file: config.log_file,
            min_level: config.min_level,
            console,
            failures: AtomicU64::new(0),
            failure_hook: RwLock::new(None),
        };
        logger.prepare_log_file(config.clear_on_start);
        logger
    }

    /// The process-wide logger, created on first call
    ///
    /// Arguments are only used by the call that creates the instance; later
    /// calls get the existing logger and their arguments are ignored.
    ///
    /// ```no_run
    /// use m3u_converter_core::logging::{default_log_path, ProcessLogger};
    ///
    /// let logger = ProcessLogger::instance(Some(default_log_path()), true);
    /// logger.info(&format!("loaded {} channels", 42));
    /// ```
    pub fn instance(log_file: Option<PathBuf>, clear_on_start: bool) -> Arc<ProcessLogger> {
        GLOBAL.get_or_init_with(|| {
            Self::new(LoggerConfig {
                log_file,
                clear_on_start,
                ..LoggerConfig::default()
            })
        })
    }

    /// Same as `instance`, driven by a full config
    pub fn from_config(config: LoggerConfig) -> Arc<ProcessLogger> {
        GLOBAL.get_or_init(config)
    }

    /// The process-wide logger, if it has been created
    pub fn try_global() -> Option<Arc<ProcessLogger>> {
        GLOBAL.get()
    }

    /// Configured log file
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Number of sink failures swallowed so far
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Observe sink failures; replaces any previous hook
    pub fn set_failure_hook<F>(&self, hook: F)
    where
        F: Fn(&LogSinkError) + Send + Sync + 'static,
    {
        *self.failure_hook.write() = Some(Arc::new(hook));
    }

    pub fn clear_failure_hook(&self) {
        *self.failure_hook.write() = None;
    }

    /// Log with a level name (case-insensitive)
    ///
    /// Unrecognized names are written with the `[LOG]` label and no color.
    pub fn log(&self, level: &str, message: &str) {
        self.emit(LogLevel::parse(level), message);
    }

    pub fn log_level(&self, level: LogLevel, message: &str) {
        self.emit(Some(level), message);
    }

    pub fn debug(&self, message: &str) {
        self.log_level(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log_level(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log_level(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log_level(LogLevel::Error, message);
    }

    /// Error level, prefixed with `CRITICAL: `
    pub fn critical(&self, message: &str) {
        self.log_level(LogLevel::Error, &format!("CRITICAL: {}", message));
    }

    /// Error level, prefixed with `EXCEPTION: ` and followed by the error's
    /// type, description and trace
    pub fn exception(&self, message: &str, report: &ErrorReport) {
        self.log_level(LogLevel::Error, &format!("EXCEPTION: {}\n{}", message, report));
    }

    /// `exception` for an error value; the trace is captured at this call
    pub fn exception_from<E: std::error::Error + 'static>(&self, message: &str, error: &E) {
        self.exception(message, &ErrorReport::capture(error));
    }

    fn emit(&self, level: Option<LogLevel>, message: &str) {
        if matches!(level, Some(level) if level < self.min_level) {
            return;
        }

        let ts = timestamp();
        self.console.write_line(&console_line(&ts, level, message));

        if let Some(path) = &self.log_file {
            if let Err(e) = append_line(path, &file_line(&ts, level, message)) {
                self.record_failure(LogSinkError::file_write(path, e));
                self.console.write_line(&write_failure_notice(&ts));
            }
        }
    }

    fn prepare_log_file(&self, clear_on_start: bool) {
        let Some(path) = &self.log_file else {
            return;
        };

        if clear_on_start {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => self.record_failure(LogSinkError::file_delete(path, e)),
            }
        }

        // Missing directories show up later as write failures
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
    }

    fn record_failure(&self, error: LogSinkError) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        let hook = self.failure_hook.read().clone();
        if let Some(hook) = hook {
            hook(&error);
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

impl std::fmt::Debug for ProcessLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessLogger")
            .field("log_file", &self.log_file)
            .field("min_level", &self.min_level)
            .field("failures", &self.failure_count())
            .finish()
    }
}

impl Logger for ProcessLogger {
    fn debug(&self, message: &str) {
        ProcessLogger::debug(self, message);
    }

    fn info(&self, message: &str) {
        ProcessLogger::info(self, message);
    }

    fn warn(&self, message: &str) {
        self.warning(message);
    }

    fn error(&self, message: &str) {
        ProcessLogger::error(self, message);
    }

    fn critical(&self, message: &str) {
        ProcessLogger::critical(self, message);
    }
}

/// Holds at most one logger, created on first access
///
/// The fast path is a lock-free read of the cell. Only when it is empty is
/// the init lock taken, and the cell is checked again under the lock before
/// the logger is built, so concurrent first calls build exactly one.
pub struct LoggerCell {
    instance: OnceCell<Arc<ProcessLogger>>,
    init_lock: Mutex<()>,
}

impl Default for LoggerCell {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerCell {
    pub const fn new() -> Self {
        Self {
            instance: OnceCell::new(),
            init_lock: const_mutex(()),
        }
    }

    pub fn get(&self) -> Option<Arc<ProcessLogger>> {
        self.instance.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    pub fn get_or_init(&self, config: LoggerConfig) -> Arc<ProcessLogger> {
        self.get_or_init_with(|| ProcessLogger::new(config))
    }

    /// Return the stored logger, building it with `init` if the cell is empty
    pub fn get_or_init_with<F>(&self, init: F) -> Arc<ProcessLogger>
    where
        F: FnOnce() -> ProcessLogger,
    {
        if let Some(logger) = self.instance.get() {
            return Arc::clone(logger);
        }

        let _guard = self.init_lock.lock();
        if let Some(logger) = self.instance.get() {
            return Arc::clone(logger);
        }

        let logger = Arc::new(init());
        // Cannot already be set: every writer holds `init_lock`
        let _ = self.instance.set(Arc::clone(&logger));
        logger
    }
}

/// The process-wide logger
static GLOBAL: LoggerCell = LoggerCell::new();
