#[cfg(test)]
pub mod test_helpers {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::brush::{Bounds, BrushEvent, BrushRegion, ElementId, PointerEvent, Selection};
    use crate::tooltip::{FloatingLabel, Formatter, ManualClock, TooltipCore, ViewportMetrics};

    pub const HIDE_DELAY: Duration = Duration::from_millis(200);
    pub const VIEWPORT_WIDTH: f64 = 1000.0;

    /// Formats a non-empty selection as `"{start}–{end}"`
    pub fn range_formatter() -> Formatter {
        Box::new(|event: &BrushEvent| {
            event
                .selection
                .filter(|selection| !selection.is_empty())
                .map(|selection| format!("{}–{}", selection.start, selection.end))
        })
    }

    pub fn silent_formatter() -> Formatter {
        Box::new(|_: &BrushEvent| None)
    }

    pub fn test_viewport() -> Rc<ViewportMetrics> {
        Rc::new(ViewportMetrics::new(VIEWPORT_WIDTH, 0.0))
    }

    pub fn test_core_with(formatter: Formatter) -> (Rc<ManualClock>, TooltipCore) {
        let clock = Rc::new(ManualClock::new());
        let core = TooltipCore::new(
            FloatingLabel::new("tooltip"),
            formatter,
            "drag to select",
            HIDE_DELAY,
            clock.clone(),
            test_viewport(),
        );
        (clock, core)
    }

    pub fn test_core() -> (Rc<ManualClock>, TooltipCore) {
        test_core_with(range_formatter())
    }

    pub fn pointer(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(x, y)
    }

    pub fn user_drag(x: f64, start: f64, end: f64) -> BrushEvent {
        BrushEvent::from_pointer(pointer(x, 50.0), Some(Selection::new(start, end)))
    }

    /// Brush over `0..100` with a selection body and both handles
    pub struct TestRegion {
        pub region: BrushRegion,
        pub selection: ElementId,
        pub west: ElementId,
        pub east: ElementId,
    }

    pub fn test_region() -> TestRegion {
        let mut region = BrushRegion::new(Bounds::new(0.0, 0.0, 100.0, 10.0));
        region.add_element("rect", &["overlay"], Bounds::new(0.0, 0.0, 100.0, 10.0));
        let selection = region.add_element("rect", &["selection"], Bounds::new(20.0, 0.0, 40.0, 10.0));
        let east = region.add_element("rect", &["handle", "handle--e"], Bounds::new(58.0, 0.0, 4.0, 10.0));
        let west = region.add_element("rect", &["handle", "handle--w"], Bounds::new(18.0, 0.0, 4.0, 10.0));
        TestRegion {
            region,
            selection,
            west,
            east,
        }
    }
}
