//! No-op sink implementation

use super::traits::LogSink;
use crate::logging::entry::LogEntry;

/// A sink that does nothing
///
/// Useful when a logger is required by an API but output is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn emit(&self, _entry: &LogEntry) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::level::LogLevel;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();
        let entry = LogEntry::new(chrono::Utc::now(), LogLevel::Error, "t", "dropped");
        sink.emit(&entry);
    }
}
