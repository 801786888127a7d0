//! In-memory sink

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::logging::entry::LogEntry;
use crate::logging::level::Channel;

/// In-memory sink for tests
///
/// Records every formatted line together with the channel it would
/// have been written to.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use clientlog_core::{Channel, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(Some("auth")).with_sink(sink.clone());
/// logger.warning("token expires soon");
///
/// assert_eq!(sink.lines_on(Channel::Warn).len(), 1);
/// assert!(sink.lines_on(Channel::Log).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// All recorded lines, in emission order
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().clone()
    }

    /// Lines recorded on one channel
    pub fn lines_on(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, entry: &LogEntry) {
        self.lines
            .lock()
            .push((entry.level.channel(), entry.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::level::LogLevel;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let now = chrono::Utc::now();
        sink.emit(&LogEntry::new(now, LogLevel::Info, "m", "first"));
        sink.emit(&LogEntry::new(now, LogLevel::Error, "m", "second"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines()[0].0, Channel::Log);
        assert_eq!(sink.lines()[1].0, Channel::Error);
        assert!(sink.lines_on(Channel::Warn).is_empty());
        assert!(sink.lines_on(Channel::Error)[0].ends_with("[m] second"));

        sink.clear();
        assert!(sink.is_empty());
    }
}
