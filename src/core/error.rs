//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors a logging call can surface.
///
/// The only runtime failure class is the sink rejecting a write. Malformed
/// format templates are not errors (they compile deterministically, see
/// [`CompiledFormat::compile`](crate::core::template::CompiledFormat::compile)),
/// and misconfiguration is rejected by the type system at build time.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink refused the rendered record
    #[error("sink write failed: {0}")]
    SinkWrite(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a sink write error from a raw IO error
    pub fn sink_write(source: std::io::Error) -> Self {
        LoggerError::SinkWrite(source)
    }
}
