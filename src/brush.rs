//! Brush event source
//!
//! The brush is the interactive area a tooltip is attached to. It exposes
//! three lifecycle phases (start, brush, end), pointer events on the
//! container and on its classed sub-elements, and a selector query.

mod brush_event;
mod listeners;
mod region;

pub use brush_event::{BrushEvent, BrushPhase, PointerEvent, PointerKind, Selection};
pub use listeners::{ListenerId, Listeners};
pub use region::{
    Bounds, BrushListener, BrushRegion, ElementId, InteractiveRegion, PointerListener,
    PointerTarget,
};
