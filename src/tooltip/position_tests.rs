//! Tests for tooltip/position

use insta::assert_debug_snapshot;
use proptest::prelude::*;

use super::*;

fn viewport(width: f64, scroll_top: f64) -> ViewportMetrics {
    ViewportMetrics::new(width, scroll_top)
}

#[test]
fn test_label_placed_right_of_pointer() {
    let pos = default_position(
        &PositionPolicy::default(),
        &PointerEvent::new(100.0, 200.0),
        120.0,
        &viewport(1000.0, 0.0),
    );

    assert_eq!(pos, LabelPosition::new(116.0, 184.0));
}

#[test]
fn test_label_flips_left_near_right_edge() {
    let pos = default_position(
        &PositionPolicy::default(),
        &PointerEvent::new(800.0, 200.0),
        120.0,
        &viewport(1000.0, 0.0),
    );

    assert_eq!(pos.left, 800.0 - 120.0 - 16.0);
}

#[test]
fn test_flip_boundary_is_inclusive() {
    let policy = PositionPolicy::default();
    let view = viewport(1000.0, 0.0);

    // 704 + 16 + 280 == 1000
    let at_edge = default_position(&policy, &PointerEvent::new(704.0, 0.0), 120.0, &view);
    let inside = default_position(&policy, &PointerEvent::new(703.0, 0.0), 120.0, &view);

    assert_eq!(at_edge.left, 568.0);
    assert_eq!(inside.left, 719.0);
}

#[test]
fn test_scroll_offset_shifts_top() {
    let pos = default_position(
        &PositionPolicy::default(),
        &PointerEvent::new(10.0, 50.0),
        10.0,
        &viewport(1000.0, 30.0),
    );

    assert_eq!(pos.top, 4.0);
}

#[test]
fn test_shared_viewport_follows_updates() {
    let shared = Cell::new(viewport(1000.0, 0.0));
    let pointer = PointerEvent::new(100.0, 20.0);
    let policy = PositionPolicy::default();

    let wide = default_position(&policy, &pointer, 50.0, &shared);
    shared.set(viewport(300.0, 0.0));
    let narrow = default_position(&policy, &pointer, 50.0, &shared);

    assert_eq!(wide.left, 116.0);
    assert_eq!(narrow.left, 34.0);
}

#[test]
fn test_default_policy_table() {
    let policy = PositionPolicy::default();
    let positions: Vec<LabelPosition> = [
        (PointerEvent::new(100.0, 200.0), 120.0, viewport(1000.0, 0.0)),
        (PointerEvent::new(800.0, 200.0), 120.0, viewport(1000.0, 0.0)),
        (PointerEvent::new(704.0, 50.0), 120.0, viewport(1000.0, 30.0)),
        (PointerEvent::new(703.0, 50.0), 120.0, viewport(1000.0, 30.0)),
    ]
    .iter()
    .map(|(pointer, width, view)| default_position(&policy, pointer, *width, view))
    .collect();

    assert_debug_snapshot!("default_policy_table", positions);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_flip_decided_by_estimate_not_actual_width(
        x in 0.0f64..2000.0,
        label_width in 1.0f64..400.0,
        width in 300.0f64..2000.0,
    ) {
        let policy = PositionPolicy::default();
        let pos = default_position(&policy, &PointerEvent::new(x, 0.0), label_width, &viewport(width, 0.0));

        if x + policy.offset + policy.label_width_estimate >= width {
            prop_assert_eq!(pos.left, x - label_width - policy.offset);
            prop_assert!(pos.left + label_width < x);
        } else {
            prop_assert_eq!(pos.left, x + policy.offset);
            prop_assert!(pos.left > x);
        }
    }

    #[test]
    fn prop_repeated_placement_is_identical(
        x in 0.0f64..2000.0,
        y in 0.0f64..2000.0,
        scroll in 0.0f64..500.0,
    ) {
        let policy = PositionPolicy::default();
        let pointer = PointerEvent::new(x, y);
        let view = viewport(1280.0, scroll);

        let first = default_position(&policy, &pointer, 90.0, &view);
        let second = default_position(&policy, &pointer, 90.0, &view);

        prop_assert_eq!(first, second);
    }
}
