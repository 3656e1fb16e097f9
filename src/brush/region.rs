//! Brush region: container, sub-elements and event dispatch
//!
//! Pointer events bubble the way they do in a document tree: the
//! listeners of the element under the pointer run first, then the
//! container's. Hover is tracked here so that enter/leave pairs are
//! synthesised from plain pointer moves.

use super::brush_event::{BrushEvent, BrushPhase, PointerEvent, PointerKind};
use super::listeners::{ListenerId, Listeners};

pub type BrushListener = Box<dyn FnMut(&BrushEvent)>;
pub type PointerListener = Box<dyn FnMut(&PointerEvent)>;

/// Index of a sub-element inside its region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Where a pointer listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    Container,
    Element(ElementId),
}

/// Axis-aligned rectangle in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The event surface a tooltip controller binds to
pub trait InteractiveRegion {
    /// Register a listener for a brush lifecycle phase, after existing ones
    fn on_brush(
        &mut self,
        phase: BrushPhase,
        namespace: Option<&str>,
        listener: BrushListener,
    ) -> ListenerId;

    /// Register a pointer listener on the container or on one sub-element
    fn on_pointer(
        &mut self,
        target: PointerTarget,
        kind: PointerKind,
        namespace: Option<&str>,
        listener: PointerListener,
    ) -> ListenerId;

    /// Find every sub-element matching `selector`. No match yields an empty list.
    fn select_all(&self, selector: &str) -> Vec<ElementId>;

    fn remove_listener(&mut self, id: ListenerId) -> bool;

    fn remove_namespace(&mut self, namespace: &str) -> usize;
}

#[derive(Debug)]
struct Element {
    tag: String,
    classes: Vec<String>,
    bounds: Bounds,
    visible: bool,
}

impl Element {
    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.classes.iter().any(|c| c == class),
            None => selector == "*" || self.tag == selector,
        }
    }
}

/// Concrete brush container with classed, hit-testable sub-elements
#[derive(Debug, Default)]
pub struct BrushRegion {
    bounds: Bounds,
    elements: Vec<Element>,
    brush_listeners: Listeners<BrushPhase, BrushEvent>,
    pointer_listeners: Listeners<(PointerTarget, PointerKind), PointerEvent>,
    hovered: Option<ElementId>,
    pointer_inside: bool,
}

impl BrushRegion {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Add a sub-element. Later elements sit on top of earlier ones for hit-testing.
    pub fn add_element(&mut self, tag: &str, classes: &[&str], bounds: Bounds) -> ElementId {
        self.elements.push(Element {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            bounds,
            visible: true,
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn set_element_bounds(&mut self, id: ElementId, bounds: Bounds) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.bounds = bounds;
        }
    }

    /// Hidden elements are skipped by hit-testing
    pub fn set_element_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.visible = visible;
        }
    }

    pub fn element_bounds(&self, id: ElementId) -> Option<Bounds> {
        self.elements.get(id.0).map(|element| element.bounds)
    }

    pub fn is_element_visible(&self, id: ElementId) -> bool {
        self.elements.get(id.0).is_some_and(|element| element.visible)
    }

    /// Topmost visible element under the point
    pub fn element_at(&self, x: f64, y: f64) -> Option<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .find(|(_, element)| element.visible && element.bounds.contains(x, y))
            .map(|(index, _)| ElementId(index))
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn brush_listener_count(&self, phase: BrushPhase) -> usize {
        self.brush_listeners.count_for(&phase)
    }

    pub fn pointer_listener_count(&self, target: PointerTarget, kind: PointerKind) -> usize {
        self.pointer_listeners.count_for(&(target, kind))
    }

    /// Deliver a lifecycle event to every listener of `phase`
    pub fn emit(&mut self, phase: BrushPhase, event: &BrushEvent) -> usize {
        self.brush_listeners.dispatch(&phase, event)
    }

    pub fn pointer_down(&mut self, pointer: PointerEvent) {
        self.bubble(PointerKind::Down, pointer);
    }

    pub fn pointer_up(&mut self, pointer: PointerEvent) {
        self.bubble(PointerKind::Up, pointer);
    }

    /// Track hover across elements and the container, then deliver the move
    pub fn pointer_moved(&mut self, pointer: PointerEvent) {
        let under = self.element_at(pointer.page_x, pointer.page_y);
        if under != self.hovered {
            if let Some(previous) = self.hovered {
                self.dispatch_pointer(PointerTarget::Element(previous), PointerKind::Leave, &pointer);
            }
            if let Some(next) = under {
                self.dispatch_pointer(PointerTarget::Element(next), PointerKind::Enter, &pointer);
            }
            self.hovered = under;
        }

        let inside = self.bounds.contains(pointer.page_x, pointer.page_y);
        if inside != self.pointer_inside {
            let kind = if inside {
                PointerKind::Enter
            } else {
                PointerKind::Leave
            };
            self.dispatch_pointer(PointerTarget::Container, kind, &pointer);
            self.pointer_inside = inside;
        }

        self.bubble(PointerKind::Move, pointer);
    }

    fn bubble(&mut self, kind: PointerKind, pointer: PointerEvent) {
        if let Some(element) = self.element_at(pointer.page_x, pointer.page_y) {
            self.dispatch_pointer(PointerTarget::Element(element), kind, &pointer);
        }
        if self.bounds.contains(pointer.page_x, pointer.page_y) {
            self.dispatch_pointer(PointerTarget::Container, kind, &pointer);
        }
    }

    fn dispatch_pointer(&mut self, target: PointerTarget, kind: PointerKind, pointer: &PointerEvent) {
        self.pointer_listeners.dispatch(&(target, kind), pointer);
    }
}

impl InteractiveRegion for BrushRegion {
    fn on_brush(
        &mut self,
        phase: BrushPhase,
        namespace: Option<&str>,
        listener: BrushListener,
    ) -> ListenerId {
        self.brush_listeners.add(phase, namespace, listener)
    }

    fn on_pointer(
        &mut self,
        target: PointerTarget,
        kind: PointerKind,
        namespace: Option<&str>,
        listener: PointerListener,
    ) -> ListenerId {
        self.pointer_listeners.add((target, kind), namespace, listener)
    }

    fn select_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.matches(selector))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.brush_listeners.remove(id) || self.pointer_listeners.remove(id)
    }

    fn remove_namespace(&mut self, namespace: &str) -> usize {
        self.brush_listeners.remove_namespace(namespace)
            + self.pointer_listeners.remove_namespace(namespace)
    }
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod region_tests;
