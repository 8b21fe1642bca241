//! Repeating timers driven by the host event loop.
//!
//! Widgets never sleep or spawn. The host reports elapsed time through
//! `advance`, and each widget turns whole elapsed periods into ticks. A
//! [`TimerSlot`] holds at most one live [`Interval`]: starting always replaces
//! whatever was running, so a widget can never end up with two timers of the
//! same kind.

use std::time::Duration;

/// A repeating interval measured against reported elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `dt` to the elapsed time and return how many periods completed.
    ///
    /// A zero period never fires. The count saturates at `u32::MAX`; the
    /// partial period left over is kept either way.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let period = self.period.as_nanos();
        if period == 0 {
            return 0;
        }
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        self.elapsed = duration_from_nanos(total % period);
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

// Callers pass a remainder below some `Duration`, so the seconds fit in u64.
fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

/// Owner of a single cancellable [`Interval`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSlot {
    active: Option<Interval>,
}

impl TimerSlot {
    /// Cancel any running interval and start a fresh one.
    pub fn start(&mut self, period: Duration) {
        self.stop();
        self.active = Some(Interval::new(period));
    }

    /// Cancel the running interval. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Ticks completed by the running interval; zero when stopped.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.active
            .as_mut()
            .map(|interval| interval.advance(dt))
            .unwrap_or(0)
    }
}
