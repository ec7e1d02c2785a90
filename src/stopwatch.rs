//! Elapsed-time bookkeeping that survives a laptop lid being closed.

use std::time::{Duration, SystemTime};

/// Gaps between ticks longer than this are taken to be the machine sleeping.
pub const SLEEP_THRESHOLD: Duration = Duration::from_secs(30);

/// A wall-clock stopwatch that leaves suspend intervals out of the elapsed
/// time and reports them separately.
///
/// Reads `SystemTime`, since the monotonic clock does not advance while the
/// machine is suspended.
#[derive(Clone, Debug)]
pub struct Stopwatch {
    start: SystemTime,
    last_elapsed: Duration,
    asleep: Duration,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self::start_at(SystemTime::now())
    }

    pub fn start_at(now: SystemTime) -> Self {
        Self {
            start: now,
            last_elapsed: Duration::ZERO,
            asleep: Duration::ZERO,
        }
    }

    /// Returns `(elapsed, asleep)`, both truncated to whole seconds.
    pub fn tick(&mut self) -> (Duration, Duration) {
        self.tick_at(SystemTime::now())
    }

    pub fn tick_at(&mut self, now: SystemTime) -> (Duration, Duration) {
        let elapsed = whole_seconds(now.duration_since(self.start).unwrap_or_default());

        let elapsed = if elapsed.saturating_sub(self.last_elapsed) > SLEEP_THRESHOLD {
            tracing::debug!(
                gap = (elapsed - self.last_elapsed).as_secs(),
                "long gap between ticks, assuming the machine slept"
            );
            self.asleep += elapsed - self.last_elapsed;
            self.start = now - self.last_elapsed;
            self.last_elapsed
        } else {
            self.last_elapsed = elapsed;
            elapsed
        };

        (elapsed, self.asleep)
    }
}

fn whole_seconds(d: Duration) -> Duration {
    Duration::from_secs(d.as_secs())
}
