//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction handed to converter components
///
/// Implementations:
/// - `ProcessLogger`: colored console plus optional log file
/// - `NoOpLogger`: silent logger for testing
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log an error message marked as critical
    fn critical(&self, message: &str) {
        self.error(&format!("CRITICAL: {}", message));
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

impl<T: Logger + ?Sized> Logger for Arc<T> {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
    fn info(&self, message: &str) {
        (**self).info(message)
    }
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
    fn error(&self, message: &str) {
        (**self).error(message)
    }
    fn critical(&self, message: &str) {
        (**self).critical(message)
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
    fn info(&self, message: &str) {
        (**self).info(message)
    }
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
    fn error(&self, message: &str) {
        (**self).error(message)
    }
    fn critical(&self, message: &str) {
        (**self).critical(message)
    }
}

/// Convenience macros; the message is formatted at the call site
#[macro_export]
macro_rules! m3u_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::debug(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! m3u_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::info(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! m3u_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::warn(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! m3u_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::Logger::error(&$logger, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(String, String)>>,
    }

    impl Recorder {
        fn push(&self, level: &str, message: &str) {
            self.seen.lock().push((level.to_string(), message.to_string()));
        }
    }

    impl Logger for Recorder {
        fn debug(&self, message: &str) {
            self.push("debug", message);
        }
        fn info(&self, message: &str) {
            self.push("info", message);
        }
        fn warn(&self, message: &str) {
            self.push("warn", message);
        }
        fn error(&self, message: &str) {
            self.push("error", message);
        }
    }

    #[test]
    fn test_default_critical_prefixes() {
        let recorder = Recorder::default();
        recorder.critical("tuner lost");
        assert_eq!(
            recorder.seen.lock()[0],
            ("error".to_string(), "CRITICAL: tuner lost".to_string())
        );
    }

    #[test]
    fn test_fmt_helpers_and_macros() {
        let recorder = Arc::new(Recorder::default());
        recorder.info_fmt(format_args!("{} channels", 12));

        let shared: SharedLogger = recorder.clone();
        crate::m3u_warn!(shared, "skipped {} of {}", 2, 14);

        let seen = recorder.seen.lock();
        assert_eq!(seen[0].1, "12 channels");
        assert_eq!(seen[1], ("warn".to_string(), "skipped 2 of 14".to_string()));
    }
}
