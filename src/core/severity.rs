//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight syslog-style severity levels, ordered least to most urgent.
///
/// The derived `Ord` follows urgency, so threshold checks are plain
/// comparisons: a message passes the filter when its severity is at least
/// the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Notice = 2,
    Warning = 3,
    Error = 4,
    Crit = 5,
    Alert = 6,
    Emerg = 7,
}

/// Caption used for priorities outside the eight recognized levels.
pub const UNKNOWN_CAPTION: &str = "UNKNOWN";

impl Severity {
    /// All levels, least to most urgent.
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Crit,
        Severity::Alert,
        Severity::Emerg,
    ];

    /// The caption written into each log line for this severity.
    pub fn caption(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Crit => "CRIT",
            Severity::Alert => "ALERT",
            Severity::Emerg => "EMERG",
        }
    }

    /// Map a raw numeric priority to a severity.
    ///
    /// Returns `None` for values outside `0..=7`; callers emitting by raw
    /// priority caption those as [`UNKNOWN_CAPTION`].
    pub fn from_priority(priority: i32) -> Option<Self> {
        match priority {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Notice),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Error),
            5 => Some(Severity::Crit),
            6 => Some(Severity::Alert),
            7 => Some(Severity::Emerg),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caption())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "NOTICE" => Ok(Severity::Notice),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "CRIT" | "CRITICAL" => Ok(Severity::Crit),
            "ALERT" => Ok(Severity::Alert),
            "EMERG" | "EMERGENCY" => Ok(Severity::Emerg),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
