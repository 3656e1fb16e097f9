//! Demo application
//!
//! A terminal screen with an axis and a brush over it. Dragging on the
//! axis selects a range; the tooltip shows the range next to the pointer.

mod app_events;
mod app_render;
mod app_state;
mod axis_brush;

pub use app_events::{handle_key, handle_mouse};
pub use app_state::{App, Scale};
pub use axis_brush::{AxisBrush, BrushElements};
