use std::time::{Duration, Instant};

/// One-shot deadline for a pending hide.
///
/// The timer never fires by itself: whoever owns it polls [`HideTimer::is_due`]
/// and drops it to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    scheduled_at: Instant,
    deadline: Instant,
}

impl HideTimer {
    pub fn schedule(now: Instant, delay: Duration) -> Self {
        Self {
            scheduled_at: now,
            deadline: now + delay,
        }
    }

    pub fn scheduled_at(&self) -> Instant {
        self.scheduled_at
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
#[path = "hide_timer_tests.rs"]
mod hide_timer_tests;
