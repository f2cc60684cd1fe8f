//! Shared per-process logging state
//!
//! The original design kept the sequence counter and the default template in
//! globals; here they live in one explicit object constructed at process
//! start and handed to every logger by shared reference.

use super::template::CompiledFormat;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide logging state shared by all loggers: the sequence-id
/// counter and the default format inherited by newly built workers.
///
/// Sequence ids come from a single atomic counter, so id order is a valid
/// linearization of call order across every logger sharing the domain.
#[derive(Debug)]
pub struct LogDomain {
    sequence: AtomicU64,
    default_format: RwLock<CompiledFormat>,
}

impl LogDomain {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            default_format: RwLock::new(CompiledFormat::default()),
        }
    }

    /// Allocate the next sequence id. The first id issued is 1.
    pub fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Replace the default format template. Workers built afterwards
    /// inherit it; already-built workers keep the format they were
    /// constructed with.
    pub fn set_default_format(&self, template: &str) {
        *self.default_format.write() = CompiledFormat::compile(template);
    }

    /// The current default format.
    pub fn default_format(&self) -> CompiledFormat {
        self.default_format.read().clone()
    }
}

impl Default for LogDomain {
    fn default() -> Self {
        Self::new()
    }
}
