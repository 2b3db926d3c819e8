//! Sink failures
//!
//! These never reach logging callers. They are counted and handed to the
//! optional failure hook.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while touching the log file
#[derive(Error, Debug)]
pub enum LogSinkError {
    /// Removing the previous log file at startup failed
    ///
    /// An absent file is the normal case and never produces this error.
    #[error("Failed to clear log file {}: {source}", path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending a line to the log file failed
    #[error("Failed to write to log file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogSinkError {
    pub fn file_delete(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileDelete {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Path of the file involved
    pub fn path(&self) -> &std::path::Path {
        match self {
            LogSinkError::FileDelete { path, .. } | LogSinkError::FileWrite { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        let err = LogSinkError::file_write(
            "/nowhere/m3u.log",
            io::Error::new(io::ErrorKind::NotFound, "missing dir"),
        );
        assert_eq!(err.path(), std::path::Path::new("/nowhere/m3u.log"));
        assert!(err.to_string().starts_with("Failed to write to log file /nowhere/m3u.log"));

        let err = LogSinkError::file_delete(
            "/tmp/m3u.log",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, LogSinkError::FileDelete { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
