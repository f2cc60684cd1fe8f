//! Per-call record snapshot and caller source location

use super::severity::Severity;
use std::panic::Location;
use std::path::Path;

/// Source location of a logging call.
///
/// Convenience methods on the logger capture this implicitly through
/// `#[track_caller]`; `log_at` accepts one explicitly when the interesting
/// call site is further up the stack (e.g. inside a logging shim).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Base name of the source file, without its directory path.
    pub fn base_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Immutable snapshot of one log event.
///
/// Built synchronously inside the log call, rendered once, then discarded.
/// The timestamp is already formatted with the time layout that was active
/// when the call was made.
#[derive(Debug, Clone)]
pub struct Record {
    /// Sequence id, monotonically increasing across all loggers of a domain
    pub id: u64,
    /// Formatted timestamp
    pub time: String,
    /// Module name of the owning logger
    pub module: String,
    pub level: Severity,
    /// Base name of the calling source file
    pub filename: String,
    pub line: u32,
    pub message: String,
    pub category: String,
}
