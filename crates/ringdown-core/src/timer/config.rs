use crate::error::ValidationError;

/// The one-minute dial.
pub const DEFAULT_DURATION_MS: u64 = 60_000;
/// One tick per second.
pub const DEFAULT_INTERVAL_MS: u64 = 1_000;

/// Countdown parameters. Immutable once the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    duration_ms: u64,
    interval_ms: u64,
}

impl TimerConfig {
    /// Validate and build a countdown configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is zero or if the interval exceeds
    /// the duration.
    pub fn new(duration_ms: u64, interval_ms: u64) -> Result<Self, ValidationError> {
        if duration_ms == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if interval_ms == 0 {
            return Err(ValidationError::ZeroInterval);
        }
        if interval_ms > duration_ms {
            return Err(ValidationError::IntervalExceedsDuration {
                interval_ms,
                duration_ms,
            });
        }
        Ok(Self {
            duration_ms,
            interval_ms,
        })
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}
