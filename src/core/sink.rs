//! Log sink handle and filesystem setup
//!
//! The sink is always in one of exactly two states: an open append-mode
//! file, or the process standard-error stream. Initialization failures
//! leave it on stderr; there is no uninitialized state.

use crate::core::error::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Destination for rendered log lines.
#[derive(Debug, Default)]
pub enum Sink {
    /// Open append-mode log file, shared across processes via its path.
    File(File),
    /// Standard-error fallback, used before `open` and after `close` or an
    /// open failure.
    #[default]
    Stderr,
}

impl Sink {
    pub fn is_file(&self) -> bool {
        matches!(self, Sink::File(_))
    }
}

/// Ensure `<base>/logs` exists, creating it `rwxr-xr-x` when missing.
///
/// A concurrent creator winning the race is not an error.
pub fn ensure_log_dir(base_dir: &Path) -> Result<PathBuf> {
    let log_dir = base_dir.join("logs");
    if log_dir.is_dir() {
        return Ok(log_dir);
    }

    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    match builder.create(&log_dir) {
        Ok(()) => Ok(log_dir),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(log_dir),
        Err(e) => Err(LoggerError::directory_create(log_dir.display().to_string(), e)),
    }
}

/// Open `<log_dir>/<prefix>.log` for appending, creating it `rw-r--r--`
/// when missing.
pub fn open_log_file(log_dir: &Path, prefix: &str) -> Result<File> {
    let path = log_dir.join(format!("{prefix}.log"));

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options
        .open(&path)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
}
