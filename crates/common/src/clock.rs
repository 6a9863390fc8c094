use chrono::Utc;

/// Source of wall-clock time for responses.
pub trait Clock: Send + Sync + 'static {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        millis_since_epoch(Utc::now().timestamp_millis())
    }
}

/// Clamps a signed epoch offset to `u64`. Instants before 1970 read as `0`.
fn millis_since_epoch(ms: i64) -> u64 {
    u64::try_from(ms).unwrap_or(0)
}

/// Always returns the same instant. Used in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
