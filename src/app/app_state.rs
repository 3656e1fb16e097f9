use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::axis_brush::AxisBrush;
use crate::brush::{Bounds, BrushEvent, BrushRegion, Selection};
use crate::config::Config;
use crate::tooltip::{Clock, SystemClock, TooltipController, ViewportMetrics};

/// Longest the event loop waits when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rows from the top of the screen to the brush track
const TRACK_TOP: u16 = 4;
const TRACK_HEIGHT: u16 = 3;
const TRACK_MARGIN: u16 = 4;

/// Maps track columns to the values the axis represents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub track_x: f64,
    pub track_width: f64,
    pub domain_min: f64,
    pub domain_max: f64,
}

impl Scale {
    pub fn value_at(&self, x: f64) -> f64 {
        if self.track_width <= 0.0 {
            return self.domain_min;
        }
        let t = (x - self.track_x) / self.track_width;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// `"lo–hi"` for a non-empty selection
    pub fn format_selection(&self, selection: Selection) -> Option<String> {
        if selection.is_empty() {
            return None;
        }
        Some(format!(
            "{:.0}–{:.0}",
            self.value_at(selection.start),
            self.value_at(selection.end)
        ))
    }
}

/// Application state
pub struct App {
    pub region: BrushRegion,
    pub brush: AxisBrush,
    pub tooltip: TooltipController,
    scale: Rc<Cell<Scale>>,
    viewport: Rc<Cell<ViewportMetrics>>,
    clock: Rc<dyn Clock>,
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, area: Rect, domain: (f64, f64)) -> Self {
        Self::with_clock(config, area, domain, Rc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, area: Rect, domain: (f64, f64), clock: Rc<dyn Clock>) -> Self {
        let track = track_bounds(area);
        let scale = Rc::new(Cell::new(Scale {
            track_x: track.x,
            track_width: track.width,
            domain_min: domain.0,
            domain_max: domain.1,
        }));
        let viewport = Rc::new(Cell::new(ViewportMetrics::new(area.width as f64, 0.0)));

        let mut region = BrushRegion::new(track);
        let brush = AxisBrush::install(&mut region, track);

        let formatter_scale = Rc::clone(&scale);
        let tooltip = TooltipController::builder(config.floating_label(), move |event: &BrushEvent| {
            event
                .selection
                .and_then(|selection| formatter_scale.get().format_selection(selection))
        })
        .options(config.tooltip_options())
        .clock(Rc::clone(&clock))
        .viewport(viewport.clone())
        .attach(&mut region);

        Self {
            region,
            brush,
            tooltip,
            scale,
            viewport,
            clock,
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn scale(&self) -> Scale {
        self.scale.get()
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Drop the selection the way a host would, without user input
    pub fn clear_selection(&mut self) {
        self.brush.set_selection(&mut self.region, None);
    }

    /// Relayout after the terminal changed size
    pub fn resize(&mut self, area: Rect) {
        let track = track_bounds(area);
        self.brush.set_track(&mut self.region, track);
        let mut scale = self.scale.get();
        scale.track_x = track.x;
        scale.track_width = track.width;
        self.scale.set(scale);
        self.viewport.set(ViewportMetrics::new(area.width as f64, 0.0));
    }

    /// Fire due tooltip timers
    pub fn tick(&mut self) {
        self.tooltip.tick();
    }

    /// How long the event loop may block before the next tick is needed
    pub fn poll_timeout(&self) -> Duration {
        match self.tooltip.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(self.now()).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }
}

/// Track spans the screen width minus margins, a few rows below the top
pub fn track_bounds(area: Rect) -> Bounds {
    let x = area.x.saturating_add(TRACK_MARGIN);
    let width = area.width.saturating_sub(TRACK_MARGIN * 2);
    let height = TRACK_HEIGHT.min(area.height.saturating_sub(TRACK_TOP));
    Bounds::new(
        x as f64,
        area.y.saturating_add(TRACK_TOP) as f64,
        width as f64,
        height as f64,
    )
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
