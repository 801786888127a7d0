//! Time source for log timestamps

use chrono::{DateTime, Utc};

use crate::error::{LogError, LogResult};

/// Supplies the instant stamped on each entry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Parse an RFC 3339 timestamp such as `2024-01-01T00:00:00.000Z`
    pub fn parse(timestamp: &str) -> LogResult<Self> {
        let instant = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| LogError::parse(format!("invalid timestamp '{}': {}", timestamp, e)))?;
        Ok(Self::new(instant.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::parse("2024-01-01T00:00:00.000Z").unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_fixed_clock_normalises_offset() {
        let clock = FixedClock::parse("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(clock.now().timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_fixed_clock_rejects_garbage() {
        assert!(matches!(FixedClock::parse("yesterday"), Err(LogError::Parse(_))));
    }
}
