//! Logger facade: per-severity operations, call-site capture, worker binding

use super::domain::LogDomain;
use super::error::Result;
use super::record::{CallSite, Record};
use super::severity::Severity;
use super::template::DEFAULT_TIME_LAYOUT;
use super::worker::Worker;
use chrono::Local;
use parking_lot::RwLock;
use std::backtrace::Backtrace;
use std::fmt::Write as _;
use std::io;
use std::panic::Location;
use std::sync::Arc;

/// Binds a module name to a [`Worker`] and stamps every call with a
/// sequence id from the shared [`LogDomain`].
///
/// All logging operations funnel through one internal emit step: resolve
/// the call site, allocate the next id, format the timestamp with the
/// worker's active time layout, build the [`Record`], and hand it to the
/// worker. The worker reference can be swapped at any time with
/// [`Logger::redirect`]; the old worker is simply dropped, since writes
/// are synchronous there is nothing to drain.
pub struct Logger {
    module: String,
    domain: Arc<LogDomain>,
    worker: RwLock<Arc<Worker>>,
}

impl Logger {
    /// A logger with all defaults: module `DEFAULT`, color enabled,
    /// stderr sink, minimum severity `Info`.
    #[must_use]
    pub fn new(domain: &Arc<LogDomain>) -> Self {
        Self::builder(domain).build()
    }

    #[must_use]
    pub fn builder(domain: &Arc<LogDomain>) -> LoggerBuilder {
        LoggerBuilder::new(domain)
    }

    /// Bind another logger to an existing worker. Loggers sharing a worker
    /// serialize their writes through the worker's lock.
    #[must_use]
    pub fn attach(domain: &Arc<LogDomain>, module: impl Into<String>, worker: Arc<Worker>) -> Self {
        Self {
            module: module.into(),
            domain: Arc::clone(domain),
            worker: RwLock::new(worker),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// The currently bound worker.
    pub fn worker(&self) -> Arc<Worker> {
        Arc::clone(&self.worker.read())
    }

    /// Atomically replace the bound worker, e.g. to change sink, color,
    /// or level in one step.
    pub fn redirect(&self, worker: Arc<Worker>) {
        *self.worker.write() = worker;
    }

    /// Recompile the bound worker's format template.
    pub fn set_format(&self, template: &str) {
        self.worker.read().set_format(template);
    }

    pub fn set_min_level(&self, level: Severity) {
        self.worker.read().set_min_level(level);
    }

    /// Log a message at an arbitrary severity, capturing the immediate
    /// caller as the source location.
    #[track_caller]
    pub fn log(
        &self,
        level: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<usize> {
        self.emit(level, category.into(), message.into(), Location::caller().into())
    }

    /// Log with an explicitly supplied call site, for callers that wrap
    /// this logger and want their own caller reported instead.
    pub fn log_at(
        &self,
        level: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
        site: CallSite,
    ) -> Result<usize> {
        self.emit(level, category.into(), message.into(), site)
    }

    #[track_caller]
    pub fn critical(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Critical, category, message)
    }

    #[track_caller]
    pub fn error(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Error, category, message)
    }

    #[track_caller]
    pub fn warning(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Warning, category, message)
    }

    #[track_caller]
    pub fn notice(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Notice, category, message)
    }

    #[track_caller]
    pub fn info(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Info, category, message)
    }

    #[track_caller]
    pub fn debug(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Debug, category, message)
    }

    /// Log at `Critical`, then exit the process with code 1. The write
    /// completes before the exit; a sink error at this point has nowhere
    /// to be reported.
    #[track_caller]
    pub fn fatal(&self, category: impl Into<String>, message: impl Into<String>) -> ! {
        let _ = self.log(Severity::Critical, category, message);
        std::process::exit(1);
    }

    /// Log at `Critical`, then panic with the message.
    #[track_caller]
    pub fn panic(&self, category: impl Into<String>, message: impl Into<String>) -> ! {
        let message = message.into();
        let _ = self.log(Severity::Critical, category, message.clone());
        panic!("{}", message);
    }

    /// Log the calling thread's execution stack at `Error` severity,
    /// prefixed with `message` (or `"Stack info"` when empty).
    #[track_caller]
    pub fn stack_as_error(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Error, category, stack_message(message.into()))
    }

    /// Like [`Logger::stack_as_error`], at `Critical` severity.
    #[track_caller]
    pub fn stack_as_critical(&self, category: impl Into<String>, message: impl Into<String>) -> Result<usize> {
        self.log(Severity::Critical, category, stack_message(message.into()))
    }

    fn emit(&self, level: Severity, category: String, message: String, site: CallSite) -> Result<usize> {
        let worker = self.worker();
        let now = Local::now();
        let layout = worker.time_layout();

        let mut time = String::new();
        if write!(time, "{}", now.format(&layout)).is_err() {
            // A layout chrono cannot render must not poison the call.
            time.clear();
            let _ = write!(time, "{}", now.format(DEFAULT_TIME_LAYOUT));
        }

        let record = Record {
            id: self.domain.next_id(),
            time,
            module: self.module.clone(),
            level,
            filename: site.base_name().to_string(),
            line: site.line,
            message,
            category,
        };
        worker.log(&record)
    }
}

/// Every write is logged as one `Info` record under the `default_logger`
/// category, so a `Logger` can stand in wherever an output stream is
/// expected.
impl io::Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let message = String::from_utf8_lossy(buf).into_owned();
        self.log(Severity::Info, "default_logger", message)
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The calling thread's execution stack, with the capture machinery's own
/// top frames stripped.
pub fn thread_stack() -> String {
    strip_own_frames(&Backtrace::force_capture().to_string())
}

fn stack_message(message: String) -> String {
    let message = if message.is_empty() {
        "Stack info".to_string()
    } else {
        message
    };
    format!("{}\n{}", message, thread_stack())
}

// Frame headers look like "  3: path::to::function"; continuation lines
// ("      at src/file.rs:10:5") belong to the preceding header.
fn is_frame_header(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) && trimmed.contains(": ")
}

fn strip_own_frames(raw: &str) -> String {
    const OWN_FRAMES: [&str; 4] = ["Backtrace", "thread_stack", "stack_message", "stack_as_"];

    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = true;
    for line in raw.lines() {
        if skipping
            && is_frame_header(line)
            && !OWN_FRAMES.iter().any(|marker| line.contains(marker))
        {
            skipping = false;
        }
        if !skipping {
            kept.push(line);
        }
    }
    if kept.is_empty() {
        raw.to_string()
    } else {
        kept.join("\n")
    }
}

/// Builder for a logger with a fresh worker.
///
/// Defaults: module `DEFAULT`, color enabled, stderr sink, minimum
/// severity `Info`. The worker is seeded with the domain's default format
/// at `build` time.
pub struct LoggerBuilder {
    domain: Arc<LogDomain>,
    module: String,
    color: bool,
    sink: Option<Box<dyn io::Write + Send>>,
    min_level: Severity,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(domain: &Arc<LogDomain>) -> Self {
        Self {
            domain: Arc::clone(domain),
            module: "DEFAULT".to_string(),
            color: true,
            sink: None,
            min_level: Severity::Info,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl io::Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(io::stderr()) as Box<dyn io::Write + Send>);
        let worker = Arc::new(Worker::new(
            sink,
            self.color,
            self.min_level,
            self.domain.default_format(),
        ));
        Logger {
            module: self.module,
            domain: self.domain,
            worker: RwLock::new(worker),
        }
    }
}
