//! # flock_logger
//!
//! A small append-only file logger with syslog-style severities and
//! cross-process advisory file locking.
//!
//! ## Features
//!
//! - **Single Sink**: One open log file per logger, with a transparent
//!   stderr fallback when no file is configured or openable
//! - **Cross-Process Safe**: Records are written under an exclusive
//!   advisory file lock, so writers in different processes never corrupt
//!   each other's lines
//! - **Thread Safe**: Loggers are shared by reference across threads
//! - **Best Effort**: Write failures never propagate to the caller

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        DiagnosticCallback, FileLogger, LoggerError, Result, Severity, MAX_MESSAGE_LEN,
        UNKNOWN_CAPTION,
    };
}

pub use crate::core::{
    DiagnosticCallback, FileLogger, LoggerError, Result, Severity, Sink, MAX_MESSAGE_LEN,
    UNKNOWN_CAPTION,
};
