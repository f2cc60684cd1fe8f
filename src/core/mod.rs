//! Core logging types

pub mod domain;
pub mod error;
pub mod logger;
pub mod record;
pub mod severity;
pub mod template;
pub mod worker;

pub use domain::LogDomain;
pub use error::{LoggerError, Result};
pub use logger::{thread_stack, Logger, LoggerBuilder};
pub use record::{CallSite, Record};
pub use severity::{Severity, COLOR_RESET};
pub use template::{CompiledFormat, DEFAULT_TEMPLATE, DEFAULT_TIME_LAYOUT};
pub use worker::Worker;
