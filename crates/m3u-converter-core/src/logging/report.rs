//! Captured errors passed to `ProcessLogger::exception`

use std::any::type_name;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

/// An error described by its type, message and call-stack trace
///
/// Callers build this from the error they are handling; the logger never
/// looks at ambient "current error" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub type_name: String,
    pub description: String,
    pub trace: Vec<String>,
}

impl ErrorReport {
    pub fn new(
        type_name: impl Into<String>,
        description: impl Into<String>,
        trace: Vec<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            description: description.into(),
            trace,
        }
    }

    /// Capture an error together with its `source()` chain and a backtrace
    /// taken at the moment of the call.
    pub fn capture<E: Error + 'static>(error: &E) -> Self {
        let mut trace = Vec::new();

        let mut source = error.source();
        while let Some(cause) = source {
            trace.push(format!("Caused by: {}", cause));
            source = cause.source();
        }

        let backtrace = Backtrace::force_capture().to_string();
        trace.extend(
            backtrace
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );

        Self::new(short_type_name::<E>(), error.to_string(), trace)
    }

    /// Whether a trace block was captured
    pub fn has_trace(&self) -> bool {
        !self.trace.is_empty()
    }
}

/// Last path segment of a type name, generic arguments kept
///
/// `std::io::error::Error` becomes `Error`, matching Python's `__name__`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.description)?;
        for line in &self.trace {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("playlist unreadable")]
    struct Outer {
        #[source]
        inner: std::io::Error,
    }

    #[test]
    fn test_capture_walks_sources() {
        let err = Outer {
            inner: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let report = ErrorReport::capture(&err);

        assert_eq!(report.type_name, "Outer");
        assert_eq!(report.description, "playlist unreadable");
        assert_eq!(report.trace[0], "Caused by: denied");
        assert!(report.has_trace());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<Outer>(), "Outer");
        assert_eq!(short_type_name::<u32>(), "u32");
    }

    #[test]
    fn test_display() {
        let report = ErrorReport::new("ValueError", "bad url", vec!["  at parse".to_string()]);
        assert_eq!(report.to_string(), "ValueError: bad url\n  at parse");

        let bare = ErrorReport::new("ValueError", "bad url", Vec::new());
        assert!(!bare.has_trace());
        assert_eq!(bare.to_string(), "ValueError: bad url");
    }
}
