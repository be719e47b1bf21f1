//! Timestamp sources for seeded rows.

use std::sync::atomic::{AtomicU32, Ordering};

use time::{Duration, OffsetDateTime};

/// Source of the current wall-clock time.
///
/// Successive reads within one run must be non-decreasing.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// UTC wall clock, truncated to the microsecond precision Postgres stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        truncate_to_micros(OffsetDateTime::now_utc())
    }
}

fn truncate_to_micros(t: OffsetDateTime) -> OffsetDateTime {
    let nanos = t.nanosecond() / 1_000 * 1_000;
    t.replace_nanosecond(nanos).unwrap_or(t)
}

/// Deterministic clock for tests.
///
/// The first read returns `start`; every later read advances by `step`.
#[derive(Debug)]
pub struct FixedClock {
    start: OffsetDateTime,
    step: Duration,
    reads: AtomicU32,
}

impl FixedClock {
    /// A clock that always returns `at`.
    pub fn new(at: OffsetDateTime) -> Self {
        Self::stepping(at, Duration::ZERO)
    }

    /// A clock that moves forward by `step` on each read.
    pub fn stepping(start: OffsetDateTime, step: Duration) -> Self {
        Self {
            start,
            step,
            reads: AtomicU32::new(0),
        }
    }

    /// Number of times [`Clock::now`] has been called.
    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_micro_precision() {
        let now = SystemClock.now();
        assert_eq!(now.nanosecond() % 1_000, 0);
        assert_eq!(now.offset(), time::UtcOffset::UTC);
    }

    #[test]
    fn test_fixed_clock_steps_and_counts() {
        let start = OffsetDateTime::UNIX_EPOCH;
        let clock = FixedClock::stepping(start, Duration::seconds(2));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(2));
        assert_eq!(clock.now(), start + Duration::seconds(4));
        assert_eq!(clock.reads(), 3);
    }

    #[test]
    fn test_fixed_clock_constant() {
        let clock = FixedClock::new(OffsetDateTime::UNIX_EPOCH);
        assert_eq!(clock.now(), clock.now());
    }
}
