//! # fmtlog
//!
//! A leveled, format-customizable logging library: messages tagged with a
//! severity and category are rendered through a compiled placeholder
//! template into an output sink, optionally colorized, gated by a minimum
//! severity.
//!
//! ## Features
//!
//! - **Compiled Templates**: `%{...}` placeholder templates compile once
//!   into an exact-arity segment template, with a `%{time:layout}` escape
//!   hatch for custom timestamp layouts
//! - **Severity Gating**: six ordered severities from `Critical` to `Debug`
//!   with a per-worker minimum threshold
//! - **Thread Safe**: one lock per worker serializes sink writes and
//!   template swaps; sequence ids linearize call order across loggers
//! - **Colored Output**: fixed per-severity ANSI colors, caller-controlled

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        thread_stack, CallSite, CompiledFormat, LogDomain, Logger, LoggerBuilder, LoggerError,
        Record, Result, Severity, Worker, COLOR_RESET, DEFAULT_TEMPLATE, DEFAULT_TIME_LAYOUT,
    };
}

pub use crate::core::{
    thread_stack, CallSite, CompiledFormat, LogDomain, Logger, LoggerBuilder, LoggerError, Record,
    Result, Severity, Worker, COLOR_RESET, DEFAULT_TEMPLATE, DEFAULT_TIME_LAYOUT,
};
