/// Repeating timers on the simulation clock.

/// A repeating millisecond timer against an absolute clock.
///
/// `ready` re-anchors the next deadline to `now + period` instead of
/// accumulating missed periods, so a clock that was frozen and resumed
/// releases at most one firing, never a backlog burst.  Cancelling or
/// restarting a timer is done by replacing the value; the previous
/// handle simply ceases to exist, so no two spawn streams can overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    pub period: u64,
    pub next_due: u64,
}

impl Interval {
    pub fn new(now: u64, period: u64) -> Self {
        Interval { period, next_due: now + period }
    }

    /// True at most once per elapsed period.
    pub fn ready(&mut self, now: u64) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }
}
