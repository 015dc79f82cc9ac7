//! Periodic timers on an explicit clock.
//!
//! The carousel needs a repeating timer that can be cancelled. Rather than
//! callbacks, a [`Scheduler`] hands out [`TimerHandle`]s and reports which
//! handles fired when time moves forward; the controller routes each firing
//! to whoever owns the handle. [`VirtualClock`] is the deterministic
//! implementation used by the controller, the CLI replay and the tests.
//!
//! Clock arithmetic saturates at [`Duration::MAX`]. One advance reports at
//! most [`MAX_FIRINGS_PER_ADVANCE`] firings; intervals still due after that
//! are skipped forward to their first slot past the new time, keeping their
//! original phase.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Upper bound on the firings one [`Scheduler::advance`] call reports.
pub const MAX_FIRINGS_PER_ADVANCE: usize = 1024;

/// Opaque identity of one periodic timer. Never reused by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One timer firing and the clock time it fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    pub handle: TimerHandle,
    pub at: Duration,
}

pub trait Scheduler {
    /// Current clock time.
    fn now(&self) -> Duration;

    /// Move the clock forward by `by`, returning every firing in the window
    /// `(now, now + by]` in due-time order. Simultaneous firings are ordered
    /// by handle creation order. A timer whose period fits several times in
    /// the window fires several times, up to [`MAX_FIRINGS_PER_ADVANCE`].
    fn advance(&mut self, by: Duration) -> Vec<Firing>;

    /// Start a timer that fires every `period`, first one `period` from now.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;

    /// Cancel a timer. Cancelling an unknown or already cancelled handle is
    /// a no-op.
    fn clear_interval(&mut self, handle: TimerHandle);

    /// Number of timers currently scheduled.
    fn active_timers(&self) -> usize;

    fn is_active(&self, handle: TimerHandle) -> bool;
}

#[derive(Debug, Clone)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<TimerHandle, Interval>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn earliest_due(&self, limit: Duration) -> Option<(TimerHandle, Duration)> {
        self.intervals
            .iter()
            .filter(|(_, interval)| interval.next_due <= limit)
            .min_by_key(|(handle, interval)| (interval.next_due, **handle))
            .map(|(handle, interval)| (*handle, interval.next_due))
    }
}

impl Interval {
    /// Move `next_due` to the first slot strictly after `target`.
    fn skip_past(&mut self, target: Duration) {
        if self.next_due > target {
            return;
        }
        let period = self.period.as_nanos();
        let steps = (target - self.next_due).as_nanos() / period + 1;
        self.next_due = add_nanos(self.next_due, period.saturating_mul(steps));
    }
}

fn add_nanos(base: Duration, nanos: u128) -> Duration {
    u64::try_from(nanos)
        .map(|n| base.saturating_add(Duration::from_nanos(n)))
        .unwrap_or(Duration::MAX)
}

impl Scheduler for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn advance(&mut self, by: Duration) -> Vec<Firing> {
        let target = self.now.saturating_add(by);
        let mut fired = Vec::new();
        while fired.len() < MAX_FIRINGS_PER_ADVANCE {
            let Some((handle, due)) = self.earliest_due(target) else {
                break;
            };
            if let Some(interval) = self.intervals.get_mut(&handle) {
                interval.next_due = due.saturating_add(interval.period);
            }
            fired.push(Firing { handle, at: due });
        }
        for interval in self.intervals.values_mut() {
            interval.skip_past(target);
        }
        self.now = target;
        fired
    }

    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        // A zero period would fire forever within one advance.
        let period = period.max(Duration::from_millis(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.intervals.insert(
            handle,
            Interval {
                period,
                next_due: self.now.saturating_add(period),
            },
        );
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.remove(&handle);
    }

    fn active_timers(&self) -> usize {
        self.intervals.len()
    }

    fn is_active(&self, handle: TimerHandle) -> bool {
        self.intervals.contains_key(&handle)
    }
}
