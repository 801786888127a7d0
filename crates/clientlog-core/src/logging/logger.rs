//! Named, leveled logger
//!
//! A [`Logger`] stamps each message with the current UTC time, its level
//! and its name, and hands the entry to a sink. By default the sink is
//! the process console, so that a forwarding plugin watching
//! `log`/`warn`/`error` can pick the lines up.

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::clock::{Clock, SystemClock};
use super::entry::LogEntry;
use super::level::LogLevel;
use super::sinks::{ConsoleSink, SharedSink};
use crate::error::{LogError, LogResult};

/// Name used when none is given and none can be inferred
pub const UNKNOWN_NAME: &str = "unknown";

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

// Every console logger shares one sink so concurrent lines never interleave.
static STDIO_SINK: Lazy<SharedSink> = Lazy::new(|| Arc::new(ConsoleSink::stdio()));

/// A logger tagged with a component name
///
/// # Example
///
/// ```
/// use clientlog_core::Logger;
///
/// let auth = Logger::new(Some("auth"));
/// auth.info("User logged in successfully");
/// // [2024-01-01T00:00:00.000Z] [INFO] [auth] User logged in successfully
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    sink: SharedSink,
    clock: SharedClock,
}

impl Logger {
    /// Create a logger writing to the console
    ///
    /// A missing or empty `name` is inferred from the calling source file
    /// (`src/auth/session.rs` gives `session`), falling back to
    /// [`UNKNOWN_NAME`].
    #[track_caller]
    pub fn new(name: Option<&str>) -> Self {
        Self::at_location(name, Location::caller())
    }

    pub(crate) fn at_location(name: Option<&str>, caller: &Location<'_>) -> Self {
        Self {
            name: resolve_name(name, caller.file()),
            sink: STDIO_SINK.clone(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the sink entries are written to
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the entry for `message` at the current instant without emitting it
    pub fn entry(&self, level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(self.clock.now(), level, self.name.as_str(), message)
    }

    /// Format and emit one line at `level`
    pub fn log(&self, level: LogLevel, message: &str) {
        self.sink.emit(&self.entry(level, message));
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

/// Pick the logger name: the given one if non-empty, else inferred, else `unknown`
pub fn resolve_name(name: Option<&str>, caller_file: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => infer_name(caller_file).unwrap_or_else(|_| UNKNOWN_NAME.to_string()),
    }
}

/// Derive a component name from a source path
///
/// Uses the file stem; `mod.rs` and `lib.rs`/`main.rs` yield their
/// directory name instead (`src/auth/mod.rs` gives `auth`).
pub fn infer_name(caller_file: &str) -> LogResult<String> {
    let path = Path::new(caller_file);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| LogError::NameInference(format!("no file name in '{}'", caller_file)))?;

    if matches!(stem, "mod" | "lib" | "main") {
        let parent = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty() && *s != "src");
        if let Some(parent) = parent {
            return Ok(parent.to_string());
        }
    }

    Ok(stem.to_string())
}

/// Log an info message with format arguments
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

/// Log a warning message with format arguments
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

/// Log an error message with format arguments
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}
