//! Log levels and the console channels they map to

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Severity of a log entry
///
/// The set is closed: every level maps to exactly one [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    /// Label used in the formatted line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Console channel this level is written to
    pub fn channel(&self) -> Channel {
        match self {
            LogLevel::Info => Channel::Log,
            LogLevel::Warning => Channel::Warn,
            LogLevel::Error => Channel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(LogError::parse(format!("unknown level '{}'", other))),
        }
    }
}

/// Output channel of the host console
///
/// Named after the console methods a forwarding plugin intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Warn,
    Error,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Log => "log",
            Channel::Warn => "warn",
            Channel::Error => "error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_level_channel_mapping() {
        assert_eq!(LogLevel::Info.channel(), Channel::Log);
        assert_eq!(LogLevel::Warning.channel(), Channel::Warn);
        assert_eq!(LogLevel::Error.channel(), Channel::Error);
    }

    #[test]
    fn test_channels_are_distinct() {
        let channels: std::collections::HashSet<_> =
            LogLevel::ALL.iter().map(|l| l.channel()).collect();
        assert_eq!(channels.len(), LogLevel::ALL.len());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("warn".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }
}
