//! Error types for logger initialization
//!
//! Only setup failures surface to the caller; write-path failures are
//! reported through the diagnostic side-channel and swallowed.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log directory missing and could not be created
    #[error("failed to create log directory '{path}': {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be opened or created
    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a directory creation error
    pub fn directory_create(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation targeted
    pub fn path(&self) -> &str {
        match self {
            LoggerError::DirectoryCreate { path, .. } | LoggerError::FileOpen { path, .. } => path,
        }
    }

    /// The underlying OS error code, when the OS reported one
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            LoggerError::DirectoryCreate { source, .. } | LoggerError::FileOpen { source, .. } => {
                source.raw_os_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::directory_create(
            "/srv/app/logs",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(matches!(err, LoggerError::DirectoryCreate { .. }));
        assert_eq!(err.path(), "/srv/app/logs");

        let err = LoggerError::file_open(
            "/srv/app/logs/tracker.log",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, LoggerError::FileOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_open(
            "/srv/app/logs/tracker.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to open log file '/srv/app/logs/tracker.log': permission denied"
        );
    }

    #[test]
    fn test_os_error_code() {
        let err = LoggerError::directory_create("/x", io::Error::from_raw_os_error(13));
        assert_eq!(err.os_error_code(), Some(13));

        let err =
            LoggerError::directory_create("/x", io::Error::new(io::ErrorKind::Other, "synthetic"));
        assert_eq!(err.os_error_code(), None);
    }
}
