//! Tooltip module
//!
//! A floating label that follows the pointer over a brush. The label is
//! shown while the pointer hovers the selection or its handles, stays
//! up while a button is held inside the brush, and fades out after a
//! short grace period once the pointer leaves or the button is released.

mod clock;
mod controller;
mod hide_timer;
mod label;
mod position;
mod tooltip_core;
mod tooltip_events;
mod tooltip_render;
mod tooltip_state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{AttachMode, TooltipBuilder, TooltipController, TooltipOptions};
pub use hide_timer::HideTimer;
pub use label::{FADE_DURATION, FloatingLabel, LabelPosition, Visibility};
pub use position::{PositionFn, PositionPolicy, Viewport, ViewportMetrics, default_position};
pub use tooltip_core::{Formatter, TooltipCore};
pub use tooltip_events::{
    handle_brush_end, handle_brush_move, handle_brush_start, handle_container_down,
    handle_container_up, handle_element_down, handle_element_enter, handle_element_leave,
    handle_element_move, handle_element_up,
};
pub use tooltip_render::render_tooltip;
pub use tooltip_state::TooltipState;
