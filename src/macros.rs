//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use flock_logger::prelude::*;
//! use flock_logger::info;
//!
//! let logger = FileLogger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a message by raw numeric priority, bypassing the threshold.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::log_priority;
/// log_priority!(logger, 1, "startup banner, version {}", "1.0.0");
/// ```
#[macro_export]
macro_rules! log_priority {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {
        $logger.log_with_priority($priority, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// # logger.set_threshold(Severity::Debug);
/// use flock_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::notice;
/// notice!(logger, "Configuration reloaded from {}", "/etc/app.conf");
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a crit-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::crit;
/// crit!(logger, "Storage server {} unreachable", "10.0.0.7");
/// ```
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Crit, $($arg)+)
    };
}

/// Log an alert-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::alert;
/// alert!(logger, "Disk usage at {}%", 98);
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log an emerg-level message.
///
/// # Examples
///
/// ```
/// # use flock_logger::prelude::*;
/// # let logger = FileLogger::new();
/// use flock_logger::emerg;
/// emerg!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emerg, $($arg)+)
    };
}
