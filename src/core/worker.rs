//! The lockable write path: severity gate, rendering, sink output

use super::error::Result;
use super::record::Record;
use super::severity::{Severity, COLOR_RESET};
use super::template::CompiledFormat;
use parking_lot::{Mutex, RwLock};
use std::io::Write;

/// Owns a sink and the compiled template, and serializes every write to
/// that sink behind one mutex.
///
/// The template is read and replaced under the same mutex as the sink, so
/// a concurrent format change can never tear a render. Loggers sharing a
/// `Worker` therefore serialize automatically; independent workers pointed
/// at the same underlying destination do not serialize against each other.
pub struct Worker {
    color: bool,
    min_level: RwLock<Severity>,
    inner: Mutex<WorkerInner>,
}

struct WorkerInner {
    sink: Box<dyn Write + Send>,
    format: CompiledFormat,
}

impl Worker {
    pub fn new(
        sink: Box<dyn Write + Send>,
        color: bool,
        min_level: Severity,
        format: CompiledFormat,
    ) -> Self {
        Self {
            color,
            min_level: RwLock::new(min_level),
            inner: Mutex::new(WorkerInner { sink, format }),
        }
    }

    /// Whether rendered lines are wrapped in color escapes.
    pub fn color(&self) -> bool {
        self.color
    }

    pub fn min_level(&self) -> Severity {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: Severity) {
        *self.min_level.write() = level;
    }

    /// Recompile and swap the format template.
    pub fn set_format(&self, template: &str) {
        self.inner.lock().format = CompiledFormat::compile(template);
    }

    /// The time layout of the currently active template.
    pub fn time_layout(&self) -> String {
        self.inner.lock().format.time_layout().to_string()
    }

    /// Gate, render, and write one record.
    ///
    /// A record filtered out by the minimum severity is a silent no-op
    /// returning `Ok(0)` without touching the sink lock. An admitted record
    /// is rendered and written in a single newline-terminated chunk,
    /// returning the number of bytes written (terminator included) or the
    /// sink's error.
    pub fn log(&self, record: &Record) -> Result<usize> {
        if !self.min_level.read().admits(record.level) {
            return Ok(0);
        }

        let mut inner = self.inner.lock();
        let text = inner.format.render(record);
        let mut line = String::with_capacity(text.len() + 16);
        if self.color {
            line.push_str(record.level.color_escape());
            line.push_str(&text);
            line.push_str(COLOR_RESET);
        } else {
            line.push_str(&text);
        }
        line.push('\n');
        inner.sink.write_all(line.as_bytes())?;
        Ok(line.len())
    }
}
