//! Console sink implementation

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::logging::entry::LogEntry;
use crate::logging::level::Channel;

type Writer = Mutex<Box<dyn Write + Send>>;

/// A sink that writes each entry to the console channel of its level
///
/// Each channel has its own writer so that a forwarding mechanism
/// watching the console can tell severities apart.
pub struct ConsoleSink {
    log: Writer,
    warn: Writer,
    error: Writer,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl ConsoleSink {
    /// Log to stdout, warnings and errors to stderr
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr(), io::stderr())
    }

    /// Create a console sink over arbitrary writers, one per channel
    pub fn with_writers(
        log: impl Write + Send + 'static,
        warn: impl Write + Send + 'static,
        error: impl Write + Send + 'static,
    ) -> Self {
        Self {
            log: Mutex::new(Box::new(log)),
            warn: Mutex::new(Box::new(warn)),
            error: Mutex::new(Box::new(error)),
        }
    }

    fn writer(&self, channel: Channel) -> &Writer {
        match channel {
            Channel::Log => &self.log,
            Channel::Warn => &self.warn,
            Channel::Error => &self.error,
        }
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, entry: &LogEntry) {
        let mut writer = self.writer(entry.level.channel()).lock();
        // A closed console is the host's problem, not the caller's.
        let _ = writeln!(writer, "{}", entry);
        let _ = writer.flush();
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
