//! Pause-length configuration.
//!
//! Every pause in the fixtures is expressed in whole "time units". A unit is
//! one second unless `STDIO_FIXTURES_TIME_UNIT_MS` overrides it, which lets a
//! harness run the fixtures faster while keeping the pauses proportional.

use std::thread;
use std::time::Duration;

/// Environment variable overriding the length of one time unit, in milliseconds.
pub const TIME_UNIT_ENV: &str = "STDIO_FIXTURES_TIME_UNIT_MS";

/// Default length of one time unit, in milliseconds.
pub const DEFAULT_TIME_UNIT_MS: u64 = 1_000;

/// Length of one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnit(Duration);

impl Default for TimeUnit {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TIME_UNIT_MS)
    }
}

impl TimeUnit {
    /// A zero-length unit; pauses return immediately.
    pub const ZERO: TimeUnit = TimeUnit(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Resolve the unit from `STDIO_FIXTURES_TIME_UNIT_MS`.
    ///
    /// Unset or blank falls back to the default. An unparsable value is
    /// logged and also falls back to the default.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(TIME_UNIT_ENV).ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw.parse::<u64>() {
            Ok(ms) => Self::from_millis(ms),
            Err(e) => {
                tracing::warn!(
                    value = raw,
                    error = %e,
                    "ignoring invalid {TIME_UNIT_ENV}, using {DEFAULT_TIME_UNIT_MS}ms"
                );
                Self::default()
            }
        }
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Duration of `units` time units.
    pub fn times(self, units: u32) -> Duration {
        self.0 * units
    }

    /// Block the current thread for `units` time units.
    pub fn pause(self, units: u32) {
        let duration = self.times(units);
        if duration.is_zero() {
            return;
        }
        tracing::debug!(?duration, "pausing");
        thread::sleep(duration);
    }
}
