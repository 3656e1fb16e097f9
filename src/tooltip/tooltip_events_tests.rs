//! Tests for tooltip/tooltip_events

use proptest::prelude::*;

use super::*;
use crate::brush::Selection;
use crate::tooltip::Clock;
use crate::test_utils::test_helpers::*;

#[test]
fn test_drag_move_with_range_shows_formatted_text() {
    let (_clock, mut core) = test_core();

    handle_brush_move(&mut core, &user_drag(100.0, 10.0, 20.0));

    assert!(core.label().is_shown());
    assert_eq!(core.label().text(), "10–20");
}

#[test]
fn test_drag_move_with_empty_selection_does_not_force_visible() {
    let (_clock, mut core) = test_core_with(Box::new(|_: &BrushEvent| Some("15".to_string())));

    handle_brush_move(&mut core, &user_drag(100.0, 15.0, 15.0));

    assert!(!core.label().is_shown());
    assert_eq!(core.label().text(), "15");
}

#[test]
fn test_drag_move_without_text_starts_hide() {
    let (_clock, mut core) = test_core_with(silent_formatter());

    handle_brush_move(&mut core, &user_drag(100.0, 10.0, 20.0));

    assert!(!core.label().is_shown());
    assert!(core.state().is_hide_pending());
}

#[test]
fn test_programmatic_drag_move_is_ignored() {
    let (_clock, mut core) = test_core();
    let before = core.label().clone();

    handle_brush_move(&mut core, &BrushEvent::programmatic(Some(Selection::new(10.0, 20.0))));

    assert_eq!(core.label(), &before);
    assert!(!core.state().is_hide_pending());
}

#[test]
fn test_drag_start_updates_without_showing() {
    let (_clock, mut core) = test_core();

    handle_brush_start(&mut core, &user_drag(100.0, 10.0, 20.0));

    assert!(!core.label().is_shown());
    assert_eq!(core.label().text(), "10–20");
    assert_eq!(core.label().position().left, 116.0);
}

#[test]
fn test_drag_end_unlocks_and_schedules_hide() {
    let (_clock, mut core) = test_core();
    handle_container_down(&mut core, &pointer(50.0, 5.0));
    assert!(core.state().locked);

    handle_brush_end(&mut core, &user_drag(60.0, 10.0, 30.0));

    assert!(!core.state().locked);
    assert!(core.state().is_hide_pending());
    assert_eq!(core.label().text(), "10–30");
}

#[test]
fn test_programmatic_drag_end_keeps_lock() {
    let (_clock, mut core) = test_core();
    handle_container_down(&mut core, &pointer(50.0, 5.0));

    handle_brush_end(&mut core, &BrushEvent::programmatic(None));

    assert!(core.state().locked);
}

#[test]
fn test_container_down_locks_without_showing() {
    let (_clock, mut core) = test_core();
    core.hide();

    handle_container_down(&mut core, &pointer(100.0, 200.0));

    assert!(core.state().locked);
    assert!(!core.state().is_hide_pending());
    assert!(!core.label().is_shown());
    assert_eq!(core.label().position().top, 184.0);
}

#[test]
fn test_locked_then_formatter_signals_hide() {
    let (_clock, mut core) = test_core();
    handle_element_down(&mut core, &pointer(30.0, 5.0));
    handle_brush_move(&mut core, &user_drag(40.0, 10.0, 20.0));
    let shown = core.label().clone();

    handle_brush_move(&mut core, &user_drag(41.0, 20.0, 20.0));

    assert!(!core.state().is_hide_pending());
    assert_eq!(core.hides_scheduled(), 0);
    assert_eq!(core.label(), &shown);
}

#[test]
fn test_pointer_up_after_lock_hides_after_delay() {
    let (clock, mut core) = test_core();
    handle_element_down(&mut core, &pointer(30.0, 5.0));
    assert!(core.label().is_shown());

    handle_container_up(&mut core, &pointer(30.0, 5.0));
    assert!(!core.state().locked);
    assert_eq!(core.state().pending_hide.map(|t| t.deadline()), Some(clock.now() + HIDE_DELAY));

    clock.advance(HIDE_DELAY);
    core.tick();
    assert!(!core.label().is_shown());
}

#[test]
fn test_element_enter_shows() {
    let (_clock, mut core) = test_core();
    handle_element_enter(&mut core, &pointer(30.0, 5.0));
    assert!(core.label().is_shown());
}

#[test]
fn test_element_move_restores_stored_text() {
    let (_clock, mut core) = test_core();
    handle_brush_move(&mut core, &user_drag(100.0, 10.0, 20.0));
    core.label.set_text("stale");

    handle_element_move(&mut core, &pointer(200.0, 100.0));

    assert!(core.label().is_shown());
    assert_eq!(core.label().text(), "10–20");
    assert_eq!(core.label().position().left, 216.0);
}

#[test]
fn test_element_leave_then_enter_cancels_hide() {
    let (clock, mut core) = test_core();
    handle_element_enter(&mut core, &pointer(30.0, 5.0));

    handle_element_leave(&mut core, &pointer(70.0, 5.0));
    clock.advance_ms(150);
    handle_element_enter(&mut core, &pointer(35.0, 5.0));
    clock.advance_ms(150);
    core.tick();

    assert!(core.label().is_shown());
    assert!(!core.state().is_hide_pending());
}

#[test]
fn test_element_up_unlocks() {
    let (_clock, mut core) = test_core();
    handle_element_down(&mut core, &pointer(30.0, 5.0));

    handle_element_up(&mut core, &pointer(30.0, 5.0));

    assert!(!core.state().locked);
    assert!(core.state().is_hide_pending());
}

#[test]
fn test_element_down_forces_visible() {
    let (_clock, mut core) = test_core();

    handle_element_down(&mut core, &pointer(30.0, 5.0));

    assert!(core.state().locked);
    assert!(core.label().is_shown());
    assert_eq!(core.label().text(), "drag to select");
}

#[derive(Debug, Clone)]
enum HideTrigger {
    Leave,
    SilentDrag,
    ProgrammaticEnd,
    EmptyDrag,
}

fn apply(core: &mut TooltipCore, trigger: &HideTrigger) {
    match trigger {
        HideTrigger::Leave => handle_element_leave(core, &pointer(70.0, 5.0)),
        HideTrigger::SilentDrag => handle_brush_move(core, &user_drag(10.0, 3.0, 3.0)),
        HideTrigger::ProgrammaticEnd => handle_brush_end(core, &BrushEvent::programmatic(None)),
        HideTrigger::EmptyDrag => handle_brush_start(
            core,
            &BrushEvent::from_pointer(pointer(10.0, 5.0), None),
        ),
    }
}

fn hide_trigger() -> impl Strategy<Value = HideTrigger> {
    prop_oneof![
        Just(HideTrigger::Leave),
        Just(HideTrigger::SilentDrag),
        Just(HideTrigger::ProgrammaticEnd),
        Just(HideTrigger::EmptyDrag),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_locked_tooltip_never_schedules_hide(triggers in prop::collection::vec(hide_trigger(), 0..20)) {
        let (_clock, mut core) = test_core();
        handle_container_down(&mut core, &pointer(30.0, 5.0));

        for trigger in &triggers {
            apply(&mut core, trigger);
        }

        prop_assert!(!core.state().is_hide_pending());
        prop_assert_eq!(core.hides_scheduled(), 0);

        handle_container_up(&mut core, &pointer(30.0, 5.0));
        prop_assert_eq!(core.hides_scheduled(), 1);
        prop_assert!(core.state().is_hide_pending());
    }

    #[test]
    fn prop_programmatic_events_leave_label_untouched(
        start in -1000.0f64..1000.0,
        end in -1000.0f64..1000.0,
        has_selection in prop::bool::ANY,
        phase in 0u8..3,
    ) {
        let (_clock, mut core) = test_core();
        handle_element_enter(&mut core, &pointer(30.0, 5.0));
        let before = core.label().clone();
        let state_before = core.state().clone();

        let selection = has_selection.then(|| Selection::new(start, end));
        let event = BrushEvent::programmatic(selection);
        match phase {
            0 => handle_brush_start(&mut core, &event),
            1 => handle_brush_move(&mut core, &event),
            _ => handle_brush_end(&mut core, &event),
        }

        prop_assert_eq!(core.label(), &before);
        prop_assert_eq!(core.state(), &state_before);
    }

    #[test]
    fn prop_drag_end_with_source_always_unlocks(
        locked_by_element in prop::bool::ANY,
        start in 0.0f64..100.0,
        end in 0.0f64..100.0,
    ) {
        let (_clock, mut core) = test_core();
        if locked_by_element {
            handle_element_down(&mut core, &pointer(30.0, 5.0));
        } else {
            handle_container_down(&mut core, &pointer(30.0, 5.0));
        }

        handle_brush_end(&mut core, &user_drag(40.0, start, end));

        prop_assert!(!core.state().locked);
    }
}
