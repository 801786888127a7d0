//! Sink trait definition

use std::sync::Arc;

use crate::logging::entry::LogEntry;

/// Destination for formatted log entries
///
/// Implementations:
/// - `ConsoleSink`: one writer per console channel (stdout/stderr by default)
/// - `FileSink`: appends to `<dir>/<name>.log`
/// - `MemorySink`: records lines for tests
/// - `NoOpSink`: discards everything
///
/// `emit` must write the entry before returning and must not fail
/// towards the caller.
pub trait LogSink: Send + Sync {
    fn emit(&self, entry: &LogEntry);
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn LogSink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;
