//! Main logger implementation

use super::{
    error::Result,
    record::{render_prefix, truncate_message},
    severity::{Severity, UNKNOWN_CAPTION},
    sink::{ensure_log_dir, open_log_file, Sink},
};
use fs2::FileExt;
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Side-channel for write-path failures.
///
/// Logging must never fail the caller's operation, so write, flush, and
/// lock errors are reported here instead of being returned. The default
/// reporter prints to stderr.
pub type DiagnosticCallback = Arc<dyn Fn(&str) + Send + Sync>;

fn default_diagnostics() -> DiagnosticCallback {
    Arc::new(|message| eprintln!("[LOGGER ERROR] {}", message))
}

/// Append-only file logger with syslog-style severities.
///
/// One logger owns one sink: either an open log file under
/// `<base>/logs/<prefix>.log`, or the process stderr stream before
/// [`open`](FileLogger::open) succeeds (and again after
/// [`close`](FileLogger::close)). The file may be shared with other
/// processes logging to the same path; each record is written under a
/// blocking exclusive advisory file lock, so lines never interleave.
///
/// # Example
///
/// ```no_run
/// use flock_logger::{FileLogger, Severity};
///
/// let logger = FileLogger::new();
/// logger.open("/srv/app", "tracker")?;
/// logger.set_threshold(Severity::Debug);
/// logger.info("tracker started");
/// # Ok::<(), flock_logger::LoggerError>(())
/// ```
pub struct FileLogger {
    threshold: RwLock<Severity>,
    sink: Mutex<Sink>,
    diagnostics: DiagnosticCallback,
}

impl FileLogger {
    /// Create a logger writing to stderr with the default `Info` threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: RwLock::new(Severity::default()),
            sink: Mutex::new(Sink::Stderr),
            diagnostics: default_diagnostics(),
        }
    }

    /// Create a logger with a custom diagnostic reporter.
    ///
    /// Useful in tests and in applications that route logger self-reports
    /// somewhere other than stderr.
    #[must_use]
    pub fn with_diagnostics(diagnostics: DiagnosticCallback) -> Self {
        Self {
            threshold: RwLock::new(Severity::default()),
            sink: Mutex::new(Sink::Stderr),
            diagnostics,
        }
    }

    /// Open (or switch to) the log file `<base_dir>/logs/<prefix>.log`.
    ///
    /// Creates the `logs` subdirectory when missing. A previously opened
    /// file sink is closed first. On open failure the sink is left on the
    /// stderr fallback and the error is returned; callers should treat it
    /// as non-fatal and keep logging.
    pub fn open(&self, base_dir: impl AsRef<Path>, prefix: &str) -> Result<()> {
        let log_dir = ensure_log_dir(base_dir.as_ref())?;

        self.close();

        let file = open_log_file(&log_dir, prefix)?;
        *self.sink.lock() = Sink::File(file);
        Ok(())
    }

    /// Close the log file, if one is open, and fall back to stderr.
    ///
    /// Idempotent; safe to call on an already-closed logger.
    pub fn close(&self) {
        let mut sink = self.sink.lock();
        if sink.is_file() {
            *sink = Sink::Stderr;
        }
    }

    /// Whether the sink is currently an open log file (as opposed to the
    /// stderr fallback).
    pub fn is_file_backed(&self) -> bool {
        self.sink.lock().is_file()
    }

    /// Current severity threshold for the named entry points.
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Set the severity threshold. Takes effect on the next log call.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Log a message at the given severity, subject to the threshold.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if severity < *self.threshold.read() {
            return;
        }
        self.write_record(severity.caption(), &message.into());
    }

    /// Log a message by raw numeric priority, bypassing the threshold.
    ///
    /// Priorities `0..=7` map to the eight severity captions; anything else
    /// is captioned `UNKNOWN`. Used for one-off messages such as startup
    /// banners that must appear regardless of configuration.
    pub fn log_with_priority(&self, priority: i32, message: impl Into<String>) {
        let caption = Severity::from_priority(priority)
            .map(|s| s.caption())
            .unwrap_or(UNKNOWN_CAPTION);
        self.write_record(caption, &message.into());
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) {
        self.log(Severity::Notice, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn crit(&self, message: impl Into<String>) {
        self.log(Severity::Crit, message);
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) {
        self.log(Severity::Alert, message);
    }

    #[inline]
    pub fn emerg(&self, message: impl Into<String>) {
        self.log(Severity::Emerg, message);
    }

    /// The only code path that touches the sink.
    ///
    /// For a file sink: take a blocking exclusive advisory lock on the
    /// whole file, write prefix, body, and newline, fsync, then release
    /// the lock. There is no lock timeout; a hung lock holder stalls every
    /// logger sharing the file, including in other processes.
    fn write_record(&self, caption: &str, message: &str) {
        let text = truncate_message(message);
        let prefix = render_prefix(chrono::Local::now(), caption);

        let mut sink = self.sink.lock();
        match &mut *sink {
            Sink::File(file) => {
                if let Err(e) = file.lock_exclusive() {
                    self.report(&format!("failed to lock log file: {}", e));
                }

                self.write_parts(file, &prefix, text);

                if let Err(e) = file.sync_all() {
                    self.report(&format!("failed to sync log file: {}", e));
                }

                // Released even when the preceding sync failed
                if let Err(e) = FileExt::unlock(&*file) {
                    self.report(&format!("failed to unlock log file: {}", e));
                }
            }
            Sink::Stderr => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                self.write_parts(&mut handle, &prefix, text);
            }
        }
    }

    /// Write the three parts of a record in order, checking each.
    ///
    /// A failed part is reported and skipped; the record may be partially
    /// written, which matches the best-effort contract.
    fn write_parts<W: Write>(&self, writer: &mut W, prefix: &str, text: &str) {
        for part in [prefix.as_bytes(), text.as_bytes(), b"\n".as_slice()] {
            if let Err(e) = writer.write_all(part) {
                self.report(&format!("failed to write log record: {}", e));
            }
        }
    }

    fn report(&self, message: &str) {
        (self.diagnostics)(&format!("{}: {}", module_path!(), message));
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_logger_is_stderr_backed() {
        let logger = FileLogger::new();
        assert!(!logger.is_file_backed());
        assert_eq!(logger.threshold(), Severity::Info);
    }

    #[test]
    fn test_open_switches_to_file_sink() {
        let base = TempDir::new().expect("Failed to create temp dir");
        let logger = FileLogger::new();
        logger.open(base.path(), "tracker").expect("Failed to open");
        assert!(logger.is_file_backed());
    }

    #[test]
    fn test_close_is_idempotent() {
        let base = TempDir::new().expect("Failed to create temp dir");
        let logger = FileLogger::new();
        logger.open(base.path(), "tracker").expect("Failed to open");

        logger.close();
        assert!(!logger.is_file_backed());
        logger.close();
        assert!(!logger.is_file_backed());
    }

    #[test]
    fn test_threshold_gates_named_entry_points() {
        let base = TempDir::new().expect("Failed to create temp dir");
        let logger = FileLogger::new();
        logger.open(base.path(), "gate").expect("Failed to open");
        logger.set_threshold(Severity::Warning);

        logger.info("filtered out");
        logger.warning("kept");

        let content =
            std::fs::read_to_string(base.path().join("logs/gate.log")).expect("read failed");
        assert!(!content.contains("filtered out"));
        assert!(content.contains("kept"));
    }

    #[test]
    fn test_stderr_logging_does_not_panic() {
        // No file opened: everything goes to the stderr fallback
        let logger = FileLogger::new();
        logger.info("to stderr");
        logger.log_with_priority(99, "unknown priority to stderr");
    }
}
