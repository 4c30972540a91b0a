//! Diagnostic sink for render-pass reporting.
//!
//! Components that log take an explicit `&dyn DiagnosticSink` instead of
//! writing to a process-wide logger, which keeps them testable without
//! global side effects. Production callers typically pass [`LogSink`];
//! tests pass [`NullSink`].

/// Receiver for diagnostic messages emitted during a render pass.
pub trait DiagnosticSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Routes diagnostics to the [`log`] crate.
///
/// Messages are picked up by whatever logger implementation the embedding
/// process installs (env_logger, tracing bridge, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}
