use std::time::{Duration, Instant};

/// Coalesces bursts of update triggers into a single pass after a quiet
/// period.
///
/// Purely clock-driven: every operation takes the current instant from the
/// caller, so an event loop polls it with its own notion of "now" and tests
/// drive it without sleeping. Re-triggering while a deadline is pending
/// supersedes that deadline; at most one pass ever comes due per burst.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) a pass for one quiet period from `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per scheduled deadline, when `now` has reached it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending deadline, for use as an event-poll
    /// timeout. `None` when nothing is scheduled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
