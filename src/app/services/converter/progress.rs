//! Progress reporting seam for the conversion pipeline
//!
//! Progress is purely observational: the sink receives human-readable status
//! strings at defined checkpoints and has no control effect on the pipeline.

/// Receiver for per-file progress checkpoint messages
pub trait ProgressSink: Send + Sync {
    /// Report one status message
    fn report(&self, message: &str);
}

/// Sink that discards all progress messages (quiet mode, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _message: &str) {}
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}
