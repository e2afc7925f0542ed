//! Record timestamps
//!
//! Records carry `time` as integer seconds since the Unix epoch. The clock is a
//! trait so tests can pin the value.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current time for log records
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Whole seconds since the Unix epoch
    fn epoch_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Shared clock handle stored by loggers
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock backed by `chrono::Utc::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Frozen at `seconds` after the epoch; out-of-range values clamp to the epoch
    pub fn at_epoch_seconds(seconds: i64) -> Self {
        Self(DateTime::from_timestamp(seconds, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at_epoch_seconds(1_736_332_245);
        assert_eq!(clock.epoch_seconds(), 1_736_332_245);
        assert_eq!(clock.now().to_rfc3339(), "2025-01-08T10:30:45+00:00");
    }

    #[test]
    fn test_system_clock_is_recent() {
        let before = Utc::now().timestamp();
        let seconds = SystemClock.epoch_seconds();
        let after = Utc::now().timestamp();

        assert!(before <= seconds && seconds <= after);
    }
}
