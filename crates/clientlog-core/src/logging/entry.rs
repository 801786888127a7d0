//! Log entries and the single-line layout they serialize to
//!
//! ```text
//! [2024-01-01T00:00:00.000Z] [INFO] [auth] User logged in successfully
//! ```
//!
//! Forwarded logs are parsed by downstream consumers, so the layout is
//! stable. The message is inserted verbatim: embedded newlines and
//! control characters are not escaped.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::level::LogLevel;
use crate::error::{LogError, LogResult};

/// One log record, produced per call and handed to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub name: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: LogLevel,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            name: name.into(),
            message: message.into(),
        }
    }

    /// ISO-8601 UTC with millisecond precision and a `Z` suffix
    pub fn format_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Recover an entry from a formatted line
    ///
    /// The three bracketed fields are read in order; everything after the
    /// separating space is the message, kept as-is.
    pub fn parse(line: &str) -> LogResult<Self> {
        let rest = line
            .strip_prefix('[')
            .ok_or_else(|| LogError::parse("missing opening '['"))?;
        let (timestamp, rest) = rest
            .split_once("] [")
            .ok_or_else(|| LogError::parse("missing level field"))?;
        let (level, rest) = rest
            .split_once("] [")
            .ok_or_else(|| LogError::parse("missing name field"))?;
        let (name, message) = rest
            .split_once("] ")
            .ok_or_else(|| LogError::parse("missing message separator"))?;

        if !timestamp.ends_with('Z') {
            return Err(LogError::parse(format!("timestamp '{}' is not UTC", timestamp)));
        }
        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| LogError::parse(format!("invalid timestamp '{}': {}", timestamp, e)))?
            .with_timezone(&Utc);

        Ok(Self::new(timestamp, level.parse()?, name, message))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {}",
            self.format_timestamp(),
            self.level,
            self.name,
            self.message
        )
    }
}
