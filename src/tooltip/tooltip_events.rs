//! Event handlers bound by the controller
//!
//! One handler per brush phase and per pointer event. Brush events
//! without a source pointer event come from the host, not the user, and
//! never move or open the tooltip.

use super::tooltip_core::TooltipCore;
use crate::brush::{BrushEvent, PointerEvent};

/// Shared by drag-start (`show == false`) and drag-move (`show == true`)
fn handle_brush(core: &mut TooltipCore, event: &BrushEvent, show: bool) {
    let Some(source) = event.source_event else {
        return;
    };
    let text = core.format(event);
    if show && event.has_range() && text.is_some() {
        core.show();
    }
    core.update_tooltip(text, Some(&source));
}

pub fn handle_brush_start(core: &mut TooltipCore, event: &BrushEvent) {
    handle_brush(core, event, false);
}

pub fn handle_brush_move(core: &mut TooltipCore, event: &BrushEvent) {
    handle_brush(core, event, true);
}

pub fn handle_brush_end(core: &mut TooltipCore, event: &BrushEvent) {
    let Some(source) = event.source_event else {
        return;
    };
    core.unlock();
    let text = core.format(event);
    core.update_tooltip(text, Some(&source));
}

/// Button pressed anywhere in the brush: hold the tooltip without forcing it open
pub fn handle_container_down(core: &mut TooltipCore, pointer: &PointerEvent) {
    core.lock(pointer, false);
}

pub fn handle_container_up(core: &mut TooltipCore, _pointer: &PointerEvent) {
    core.unlock();
}

pub fn handle_element_enter(core: &mut TooltipCore, _pointer: &PointerEvent) {
    core.show();
}

pub fn handle_element_move(core: &mut TooltipCore, pointer: &PointerEvent) {
    core.show();
    core.update_location(pointer);
    core.refresh_text();
}

pub fn handle_element_up(core: &mut TooltipCore, _pointer: &PointerEvent) {
    core.unlock();
}

pub fn handle_element_leave(core: &mut TooltipCore, _pointer: &PointerEvent) {
    core.hide();
}

pub fn handle_element_down(core: &mut TooltipCore, pointer: &PointerEvent) {
    core.lock(pointer, true);
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
