//! Clock Abstraction
//!
//! Injectable time source so staleness calculations can be driven by a
//! manually advanced clock in tests instead of sleeping.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Time source abstraction for reading the current wall-clock time.
///
/// Components that need "how long ago" answers take an `Arc<dyn Clock>` at
/// construction and never call a real-time source directly.
pub trait Clock: Send + Sync {
    /// Returns the current time
    fn now(&self) -> DateTime<Utc>;

    /// Returns the duration elapsed since `earlier`
    ///
    /// Saturates to zero when `earlier` is in the future.
    fn since(&self, earlier: DateTime<Utc>) -> Duration {
        (self.now() - earlier).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Real wall-clock time source for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic tests
///
/// Time stands still until [`advance`](MockClock::advance) or
/// [`set`](MockClock::set) moves it, so tests assert exact elapsed durations
/// instead of sleeping and hoping.
#[derive(Debug, Default)]
pub struct MockClock {
    /// Current time as nanoseconds since the Unix epoch
    now_nanos: AtomicI64,
}

impl MockClock {
    /// Create a mock clock fixed at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now_nanos: AtomicI64::new(start.timestamp_nanos_opt().unwrap_or(0)),
        }
    }

    /// Move the clock forward by `delta`
    pub fn advance(&self, delta: Duration) {
        let nanos = i64::try_from(delta.as_nanos()).unwrap_or(i64::MAX);
        self.now_nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    /// Jump the clock to an absolute time (forwards or backwards)
    pub fn set(&self, to: DateTime<Utc>) {
        self.now_nanos
            .store(to.timestamp_nanos_opt().unwrap_or(0), Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.now_nanos.load(Ordering::SeqCst))
    }
}
