/// Lifecycle phase of a brush gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushPhase {
    /// Pointer pressed and a gesture began
    Start,
    /// Selection changed during the gesture
    Brush,
    /// Gesture finished
    End,
}

/// Pointer interaction kinds delivered to the container and sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Up,
    Enter,
    Move,
    Leave,
}

/// Raw pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Ordered pair of selection boundaries along the brush axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    pub start: f64,
    pub end: f64,
}

impl Selection {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A selection whose boundaries coincide covers no range
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }
}

/// Selection-change payload delivered for every brush phase.
///
/// `source_event` is `None` when the change was made programmatically
/// (for example when the host clears the brush), and `selection` is `None`
/// when no range is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrushEvent {
    pub source_event: Option<PointerEvent>,
    pub selection: Option<Selection>,
}

impl BrushEvent {
    /// Event caused by direct user input at `pointer`
    pub fn from_pointer(pointer: PointerEvent, selection: Option<Selection>) -> Self {
        Self {
            source_event: Some(pointer),
            selection,
        }
    }

    /// Event caused by the host changing the brush without user input
    pub fn programmatic(selection: Option<Selection>) -> Self {
        Self {
            source_event: None,
            selection,
        }
    }

    /// True when there is a selection and it covers a non-empty range
    pub fn has_range(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "brush_event_tests.rs"]
mod brush_event_tests;
