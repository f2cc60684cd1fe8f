//! Severity definitions and terminal color policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape sequence resetting all terminal attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Ordered log severity, most severe first.
///
/// Discriminants are 1-based and grow with verbosity, so the derived
/// ordering makes `Critical` the smallest value and `Debug` the largest.
/// A logger configured at level `L` admits a record of severity `S`
/// exactly when `L >= S` (see [`Severity::admits`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Critical = 1,
    Error = 2,
    Warning = 3,
    Notice = 4,
    #[default]
    Info = 5,
    Debug = 6,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// First three characters of the severity name (`CRI`, `ERR`, ...).
    pub fn abbrev(&self) -> &'static str {
        &self.to_str()[..3]
    }

    /// Whether a logger at this minimum level admits a record of `severity`.
    #[inline]
    pub fn admits(self, severity: Severity) -> bool {
        self >= severity
    }

    /// SGR foreground escape used when color output is enabled.
    pub fn color_escape(&self) -> &'static str {
        match self {
            Severity::Critical => "\x1b[35m", // magenta
            Severity::Error => "\x1b[31m",    // red
            Severity::Warning => "\x1b[33m",  // yellow
            Severity::Notice => "\x1b[32m",   // green
            Severity::Info => "\x1b[37m",     // white
            Severity::Debug => "\x1b[36m",    // cyan
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CRITICAL" => Ok(Severity::Critical),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
