//! One-dimensional brush over the demo axis
//!
//! Owns the selection geometry and keeps the region's sub-elements in
//! sync with it: an overlay covering the whole track, the selection body,
//! and one handle cell at each edge. Gestures emit the start/brush/end
//! lifecycle through the region so every listener sees them.

use crate::brush::{Bounds, BrushEvent, BrushPhase, BrushRegion, ElementId, PointerEvent, Selection};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    /// Dragging out a new selection from `anchor`
    Create { anchor: f64 },
    /// Dragging the whole selection; `grab` is the pointer offset from its start
    Move { grab: f64, width: f64 },
    /// Dragging one edge while the other stays at `fixed`
    Resize { fixed: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushElements {
    pub overlay: ElementId,
    pub selection: ElementId,
    pub east: ElementId,
    pub west: ElementId,
}

#[derive(Debug)]
pub struct AxisBrush {
    track: Bounds,
    selection: Option<Selection>,
    gesture: Option<Gesture>,
    elements: BrushElements,
}

impl AxisBrush {
    /// Add the brush's elements to `region` and size the region to the track
    pub fn install(region: &mut BrushRegion, track: Bounds) -> Self {
        region.set_bounds(track);
        let elements = BrushElements {
            overlay: region.add_element("rect", &["overlay"], track),
            selection: region.add_element("rect", &["selection"], Bounds::default()),
            east: region.add_element("rect", &["handle", "handle--e"], Bounds::default()),
            west: region.add_element("rect", &["handle", "handle--w"], Bounds::default()),
        };
        let brush = Self {
            track,
            selection: None,
            gesture: None,
            elements,
        };
        brush.sync(region);
        brush
    }

    pub fn track(&self) -> Bounds {
        self.track
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn elements(&self) -> BrushElements {
        self.elements
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a gesture if the pointer is on the track
    pub fn press(&mut self, region: &mut BrushRegion, pointer: PointerEvent) {
        if !self.track.contains(pointer.page_x, pointer.page_y) {
            return;
        }
        let x = self.clamp(pointer.page_x);
        let target = region.element_at(pointer.page_x, pointer.page_y);

        let gesture = match (self.selection, target) {
            (Some(selection), Some(id)) if id == self.elements.west => Gesture::Resize {
                fixed: selection.end,
            },
            (Some(selection), Some(id)) if id == self.elements.east => Gesture::Resize {
                fixed: selection.start,
            },
            (Some(selection), Some(id)) if id == self.elements.selection => Gesture::Move {
                grab: x - selection.start,
                width: selection.span(),
            },
            _ => {
                self.selection = Some(Selection::new(x, x));
                Gesture::Create { anchor: x }
            }
        };
        self.gesture = Some(gesture);
        self.sync(region);
        region.emit(
            BrushPhase::Start,
            &BrushEvent::from_pointer(pointer, self.selection),
        );
    }

    /// Continue the gesture under way, if any
    pub fn drag(&mut self, region: &mut BrushRegion, pointer: PointerEvent) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let x = self.clamp(pointer.page_x);
        let selection = match gesture {
            Gesture::Create { anchor } | Gesture::Resize { fixed: anchor } => ordered(anchor, x),
            Gesture::Move { grab, width } => {
                let start = (x - grab).min(self.track_end() - width).max(self.track.x);
                Selection::new(start, start + width)
            }
        };
        self.selection = Some(selection);
        self.sync(region);
        region.emit(
            BrushPhase::Brush,
            &BrushEvent::from_pointer(pointer, self.selection),
        );
    }

    /// Finish the gesture. A click without movement clears the selection.
    pub fn release(&mut self, region: &mut BrushRegion, pointer: PointerEvent) {
        if self.gesture.take().is_none() {
            return;
        }
        if self.selection.is_some_and(|s| s.is_empty()) {
            self.selection = None;
        }
        self.sync(region);
        region.emit(
            BrushPhase::End,
            &BrushEvent::from_pointer(pointer, self.selection),
        );
    }

    /// Replace the selection without user input
    pub fn set_selection(&mut self, region: &mut BrushRegion, selection: Option<Selection>) {
        self.gesture = None;
        self.selection = selection.map(|s| {
            let (a, b) = (self.clamp(s.start), self.clamp(s.end));
            ordered(a, b)
        });
        self.sync(region);
        let event = BrushEvent::programmatic(self.selection);
        region.emit(BrushPhase::Start, &event);
        region.emit(BrushPhase::Brush, &event);
        region.emit(BrushPhase::End, &event);
    }

    /// Move the brush to a new track, keeping the selection's relative place
    pub fn set_track(&mut self, region: &mut BrushRegion, track: Bounds) {
        let old = self.track;
        self.selection = self.selection.map(|s| {
            let rescale = |x: f64| {
                if old.width > 0.0 {
                    track.x + (x - old.x) / old.width * track.width
                } else {
                    track.x
                }
            };
            Selection::new(rescale(s.start), rescale(s.end))
        });
        self.track = track;
        region.set_bounds(track);
        self.sync(region);
    }

    fn track_end(&self) -> f64 {
        self.track.x + self.track.width
    }

    fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.track.x, self.track_end())
    }

    fn sync(&self, region: &mut BrushRegion) {
        let BrushElements {
            overlay,
            selection,
            east,
            west,
        } = self.elements;
        let y = self.track.y;
        let height = self.track.height;
        region.set_element_bounds(overlay, self.track);

        match self.selection.filter(|s| !s.is_empty()) {
            Some(s) => {
                region.set_element_bounds(selection, Bounds::new(s.start, y, s.span(), height));
                region.set_element_bounds(west, Bounds::new(s.start, y, 1.0, height));
                region.set_element_bounds(east, Bounds::new(s.end - 1.0, y, 1.0, height));
                for id in [selection, west, east] {
                    region.set_element_visible(id, true);
                }
            }
            None => {
                for id in [selection, west, east] {
                    region.set_element_visible(id, false);
                }
            }
        }
    }
}

fn ordered(a: f64, b: f64) -> Selection {
    if a <= b {
        Selection::new(a, b)
    } else {
        Selection::new(b, a)
    }
}

#[cfg(test)]
#[path = "axis_brush_tests.rs"]
mod axis_brush_tests;
