//! Logging macros for printf-style message formatting.
//!
//! These macros pair a category with `format!`-style arguments and expand
//! to the underlying logger call, so the call's `Result` (bytes written or
//! the sink error) reaches the caller.
//!
//! # Examples
//!
//! ```
//! use fmtlog::prelude::*;
//! use fmtlog::info;
//! use std::sync::Arc;
//!
//! let domain = Arc::new(LogDomain::new());
//! let logger = Logger::builder(&domain).sink(std::io::sink()).build();
//!
//! let port = 8080;
//! info!(logger, "net", "listening on port {}", port).unwrap();
//! ```

/// Log a formatted message at an arbitrary severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::log;
/// log!(logger, Severity::Error, "db", "query failed: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $category:expr, $($arg:tt)+) => {
        $logger.log($level, $category, format!($($arg)+))
    };
}

/// Log a formatted message at `Critical` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::critical;
/// critical!(logger, "core", "state corrupted at index {}", 3).unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $category, $($arg)+)
    };
}

/// Log a formatted message at `Error` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::error;
/// error!(logger, "net", "connection refused by {}", "peer").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $category, $($arg)+)
    };
}

/// Log a formatted message at `Warning` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::warning;
/// warning!(logger, "disk", "only {} MB left", 128).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $category, $($arg)+)
    };
}

/// Log a formatted message at `Notice` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::notice;
/// notice!(logger, "session", "user {} signed in", 42).unwrap();
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $category, $($arg)+)
    };
}

/// Log a formatted message at `Info` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::info;
/// info!(logger, "startup", "processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $category, $($arg)+)
    };
}

/// Log a formatted message at `Debug` severity.
///
/// # Examples
///
/// ```
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::builder(&domain).sink(std::io::sink()).build();
/// use fmtlog::debug;
/// debug!(logger, "cache", "hit ratio {:.2}", 0.97).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $category, $($arg)+)
    };
}

/// Log a formatted message at `Critical` severity, then exit the process
/// with code 1.
///
/// # Examples
///
/// ```no_run
/// # use fmtlog::prelude::*;
/// # use std::sync::Arc;
/// # let domain = Arc::new(LogDomain::new());
/// # let logger = Logger::new(&domain);
/// use fmtlog::fatal;
/// fatal!(logger, "core", "unrecoverable: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.fatal($category, format!($($arg)+))
    };
}
