//! Core logger types

pub mod error;
pub mod logger;
pub mod record;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use logger::{DiagnosticCallback, FileLogger};
pub use record::MAX_MESSAGE_LEN;
pub use severity::{Severity, UNKNOWN_CAPTION};
pub use sink::Sink;
