//! Tooltip primitives: show, hide, lock and label updates
//!
//! Everything the event handlers do is expressed through these few
//! operations. The hide timer is cancelled before every new show or hide
//! decision, so at most one hide is ever pending.

use std::rc::Rc;
use std::time::{Duration, Instant};

use super::clock::Clock;
use super::hide_timer::HideTimer;
use super::label::FloatingLabel;
use super::position::{PositionFn, PositionPolicy, Viewport, default_position};
use super::tooltip_state::TooltipState;
use crate::brush::{BrushEvent, PointerEvent};

/// Turns a selection-change event into label text. `None` means "nothing to show".
pub type Formatter = Box<dyn Fn(&BrushEvent) -> Option<String>>;

pub struct TooltipCore {
    pub(crate) state: TooltipState,
    pub(crate) label: FloatingLabel,
    formatter: Formatter,
    position_fn: Option<PositionFn>,
    policy: PositionPolicy,
    hide_delay: Duration,
    clock: Rc<dyn Clock>,
    viewport: Rc<dyn Viewport>,
    #[cfg(test)]
    hides_scheduled: u64,
}

impl TooltipCore {
    pub fn new(
        mut label: FloatingLabel,
        formatter: Formatter,
        initial_text: &str,
        hide_delay: Duration,
        clock: Rc<dyn Clock>,
        viewport: Rc<dyn Viewport>,
    ) -> Self {
        label.set_text(initial_text);
        Self {
            state: TooltipState::new(initial_text),
            label,
            formatter,
            position_fn: None,
            policy: PositionPolicy::default(),
            hide_delay,
            clock,
            viewport,
            #[cfg(test)]
            hides_scheduled: 0,
        }
    }

    pub fn set_position_fn(&mut self, position_fn: Option<PositionFn>) {
        self.position_fn = position_fn;
    }

    pub fn set_policy(&mut self, policy: PositionPolicy) {
        self.policy = policy;
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn label(&self) -> &FloatingLabel {
        &self.label
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// How many hide timers have been scheduled since attach
    #[cfg(test)]
    pub(crate) fn hides_scheduled(&self) -> u64 {
        self.hides_scheduled
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Run the formatter. Empty text counts as no text.
    pub fn format(&self, event: &BrushEvent) -> Option<String> {
        (self.formatter)(event).filter(|text| !text.is_empty())
    }

    pub fn cancel_pending_hide(&mut self) {
        if self.state.cancel_pending_hide().is_some() {
            log::debug!("tooltip {}: pending hide cancelled", self.label.id());
        }
    }

    /// Cancel any pending hide and fade the label in
    pub fn show(&mut self) {
        self.cancel_pending_hide();
        let now = self.clock.now();
        self.label.fade_in(now);
    }

    /// Cancel any pending hide and, unless locked, schedule a new one
    pub fn hide(&mut self) {
        self.cancel_pending_hide();
        if self.state.locked {
            return;
        }
        let now = self.clock.now();
        self.state.pending_hide = Some(HideTimer::schedule(now, self.hide_delay));
        #[cfg(test)]
        {
            self.hides_scheduled += 1;
        }
        log::debug!(
            "tooltip {}: hide scheduled in {:?}",
            self.label.id(),
            self.hide_delay
        );
    }

    pub fn lock(&mut self, pointer: &PointerEvent, show: bool) {
        self.cancel_pending_hide();
        self.state.locked = true;
        self.update_location(pointer);
        self.refresh_text();
        if show {
            self.show();
        }
    }

    pub fn unlock(&mut self) {
        self.state.locked = false;
        self.hide();
    }

    pub fn update_location(&mut self, pointer: &PointerEvent) {
        let position = match &self.position_fn {
            Some(position_fn) => position_fn(pointer, &self.label, self.viewport.as_ref()),
            None => default_position(
                &self.policy,
                pointer,
                self.label.outer_width(),
                self.viewport.as_ref(),
            ),
        };
        self.label.set_position(position);
    }

    /// Put the stored text back on the label
    pub fn refresh_text(&mut self) {
        self.label.set_text(&self.state.current_text);
    }

    /// Store and display `text` at the pointer, or start hiding when either is missing
    pub fn update_tooltip(&mut self, text: Option<String>, source: Option<&PointerEvent>) {
        match (text, source) {
            (Some(text), Some(pointer)) => {
                self.state.current_text = text;
                // Placed before the text changes: the flip measures the label as it is on screen
                self.update_location(pointer);
                self.refresh_text();
            }
            _ => self.hide(),
        }
    }

    /// Fire the pending hide if due and finish elapsed fades. Returns true if a hide fired.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let fired = self.state.take_due_hide(now).is_some();
        if fired {
            log::debug!("tooltip {}: hiding", self.label.id());
            self.label.fade_out(now);
        }
        self.label.settle(now);
        fired
    }

    /// Earliest instant at which [`TooltipCore::tick`] has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        let hide = self.state.pending_hide.map(|timer| timer.deadline());
        match (hide, self.label.fade_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel everything and take the label off screen
    pub fn shut_down(&mut self) {
        self.cancel_pending_hide();
        self.state.locked = false;
        self.label.hide_now();
    }
}

#[cfg(test)]
#[path = "tooltip_core_tests.rs"]
mod tooltip_core_tests;
