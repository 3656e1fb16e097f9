//! Label placement next to the pointer
//!
//! The default policy puts the label to the right of the pointer and
//! flips it to the left when a label of the estimated width would run
//! past the right edge of the viewport.

use std::cell::Cell;

use super::label::{FloatingLabel, LabelPosition};
use crate::brush::PointerEvent;

/// Custom placement: pointer, the label being placed, and the viewport
pub type PositionFn = Box<dyn Fn(&PointerEvent, &FloatingLabel, &dyn Viewport) -> LabelPosition>;

/// Document measurements the default policy depends on
pub trait Viewport {
    fn width(&self) -> f64;
    /// Vertical scroll offset of the document
    fn scroll_top(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub width: f64,
    pub scroll_top: f64,
}

impl ViewportMetrics {
    pub fn new(width: f64, scroll_top: f64) -> Self {
        Self { width, scroll_top }
    }
}

impl Viewport for ViewportMetrics {
    fn width(&self) -> f64 {
        self.width
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }
}

/// Shared, resizable metrics for hosts whose viewport changes at runtime
impl Viewport for Cell<ViewportMetrics> {
    fn width(&self) -> f64 {
        self.get().width
    }

    fn scroll_top(&self) -> f64 {
        self.get().scroll_top
    }
}

/// Offsets used by [`default_position`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPolicy {
    /// Horizontal gap between pointer and label
    pub offset: f64,
    /// Width assumed when deciding whether the label fits on the right
    pub label_width_estimate: f64,
    /// Vertical shift so the label is centred on the pointer
    pub half_label_height: f64,
}

impl Default for PositionPolicy {
    fn default() -> Self {
        Self {
            offset: 16.0,
            label_width_estimate: 280.0,
            half_label_height: 16.0,
        }
    }
}

pub fn default_position(
    policy: &PositionPolicy,
    pointer: &PointerEvent,
    label_width: f64,
    viewport: &dyn Viewport,
) -> LabelPosition {
    let mut left = pointer.page_x + policy.offset;
    if left + policy.label_width_estimate >= viewport.width() {
        left = pointer.page_x - label_width - policy.offset;
    }
    let top = pointer.page_y - viewport.scroll_top() - policy.half_label_height;
    LabelPosition::new(left, top)
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
