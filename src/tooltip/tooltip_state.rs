use std::time::Instant;

use super::hide_timer::HideTimer;

/// Lock, pending hide and last text of one tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    /// Set while a pointer button is held inside the brush; hides are ignored meanwhile
    pub locked: bool,
    /// At most one hide is ever pending
    pub pending_hide: Option<HideTimer>,
    /// Last text shown, kept across hides so a re-show can reuse it
    pub current_text: String,
}

impl TooltipState {
    pub fn new(initial_text: &str) -> Self {
        Self {
            locked: false,
            pending_hide: None,
            current_text: initial_text.to_string(),
        }
    }

    pub fn is_hide_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Drop the pending hide, returning it if there was one
    pub fn cancel_pending_hide(&mut self) -> Option<HideTimer> {
        self.pending_hide.take()
    }

    /// Take the pending hide if its deadline has passed
    pub fn take_due_hide(&mut self, now: Instant) -> Option<HideTimer> {
        match self.pending_hide {
            Some(timer) if timer.is_due(now) => self.pending_hide.take(),
            _ => None,
        }
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
