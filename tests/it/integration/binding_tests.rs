//! Standard chord bindings and the actions they apply to a pad.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use wirepad::chord::{standard_bindings, ChordAction, ChordMatcher, KeyModifiers};
use wirepad::events::PadEvent;
use wirepad::geometry::Size;

use crate::helpers::{id_at, TestPadBuilder};

/// Feed `presses` through a matcher carrying the standard bindings, spacing
/// them out so each press is its own chord, and collect the emitted actions.
fn actions_from(presses: &[(&str, KeyModifiers)]) -> Vec<ChordAction> {
    let mut matcher = ChordMatcher::new();
    let log: Rc<RefCell<Vec<ChordAction>>> = Rc::new(RefCell::new(Vec::new()));
    let sink_log = log.clone();
    standard_bindings(&mut matcher, move |action| sink_log.borrow_mut().push(action));

    let mut now = Instant::now();
    for (key, mods) in presses {
        matcher.press_at(key, *mods, now);
        now += Duration::from_millis(400);
    }

    let collected = log.borrow().clone();
    collected
}

fn shift() -> KeyModifiers {
    KeyModifiers {
        shift: true,
        ..KeyModifiers::NONE
    }
}

fn meta() -> KeyModifiers {
    KeyModifiers {
        meta: true,
        ..KeyModifiers::NONE
    }
}

fn meta_shift() -> KeyModifiers {
    KeyModifiers {
        meta: true,
        shift: true,
        ..KeyModifiers::NONE
    }
}

fn alt() -> KeyModifiers {
    KeyModifiers {
        alt: true,
        ..KeyModifiers::NONE
    }
}

// ============================================================================
// Binding table
// ============================================================================

#[test]
fn test_arrows_nudge_and_shift_doubles_the_step() {
    let actions = actions_from(&[
        ("arrowLeft", KeyModifiers::NONE),
        ("arrowRight", shift()),
        ("arrowUp", KeyModifiers::NONE),
        ("arrowDown", shift()),
    ]);
    assert_eq!(
        actions,
        vec![
            ChordAction::Nudge { dx: -1.0, dy: 0.0 },
            ChordAction::Nudge { dx: 2.0, dy: 0.0 },
            ChordAction::Nudge { dx: 0.0, dy: -1.0 },
            ChordAction::Nudge { dx: 0.0, dy: 2.0 },
        ]
    );
}

#[test]
fn test_meta_arrows_reorder() {
    let actions = actions_from(&[
        ("arrowUp", meta()),
        ("arrowUp", meta_shift()),
        ("arrowDown", meta()),
        ("arrowDown", meta_shift()),
    ]);
    assert_eq!(
        actions,
        vec![
            ChordAction::BringForward { to_front: false },
            ChordAction::BringForward { to_front: true },
            ChordAction::SendBackward { to_back: false },
            ChordAction::SendBackward { to_back: true },
        ]
    );
}

#[test]
fn test_alt_axis_centering_and_delete_keys() {
    let actions = actions_from(&[
        ("x", alt()),
        ("y", alt()),
        ("backspace", KeyModifiers::NONE),
        ("delete", KeyModifiers::NONE),
    ]);
    assert_eq!(
        actions,
        vec![
            ChordAction::CenterX,
            ChordAction::CenterY,
            ChordAction::DeleteSelection,
            ChordAction::DeleteSelection,
        ]
    );
}

#[test]
fn test_plain_arrow_does_not_fire_reorder() {
    let actions = actions_from(&[("arrowUp", KeyModifiers::NONE)]);
    assert_eq!(actions, vec![ChordAction::Nudge { dx: 0.0, dy: -1.0 }]);
}

// ============================================================================
// Applying actions
// ============================================================================

#[test]
fn test_nudge_translates_selection() {
    let mut pad = TestPadBuilder::new()
        .with_rect(10.0, 10.0, 20.0, 20.0)
        .with_rect(50.0, 10.0, 20.0, 20.0)
        .selected(0)
        .selected(1)
        .build();

    pad.apply_action(ChordAction::Nudge { dx: 2.0, dy: 0.0 });

    assert_eq!(pad.document().objects()[0].location.x, 12.0);
    assert_eq!(pad.document().objects()[1].location.x, 52.0);
    assert!(pad.drain_events().contains(&PadEvent::PaintRequest));
}

#[test]
fn test_bring_forward_raises_paint_order() {
    let mut pad = TestPadBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .selected(0)
        .build();
    let raised = id_at(&pad, 0);

    pad.apply_action(ChordAction::BringForward { to_front: false });
    assert_eq!(pad.document().object_order(raised), Some(1));

    pad.apply_action(ChordAction::BringForward { to_front: true });
    assert_eq!(pad.document().object_order(raised), Some(2));
}

#[test]
fn test_send_backward_lowers_paint_order() {
    let mut pad = TestPadBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .selected(2)
        .build();
    let lowered = id_at(&pad, 2);

    pad.apply_action(ChordAction::SendBackward { to_back: false });
    assert_eq!(pad.document().object_order(lowered), Some(1));

    pad.apply_action(ChordAction::SendBackward { to_back: true });
    assert_eq!(pad.document().object_order(lowered), Some(0));
}

#[test]
fn test_center_x_uses_surface_center_without_pointer() {
    let mut pad = TestPadBuilder::new()
        .with_rect(0.0, 0.0, 20.0, 20.0)
        .selected(0)
        .build();
    pad.set_surface_size(Size::new(200.0, 100.0));

    pad.apply_action(ChordAction::CenterX);
    assert_eq!(pad.document().objects()[0].location.x, 90.0);

    pad.apply_action(ChordAction::CenterY);
    assert_eq!(pad.document().objects()[0].location.y, 40.0);
}

#[test]
fn test_delete_selection_removes_and_reports() {
    let mut pad = TestPadBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(20.0, 0.0, 10.0, 10.0)
        .selected(1)
        .build();

    pad.apply_action(ChordAction::DeleteSelection);

    assert_eq!(pad.document().object_count(), 1);
    assert!(pad
        .drain_events()
        .contains(&PadEvent::SelectionChanged(Vec::new())));
}

#[test]
fn test_matcher_to_pad_delete_flow() {
    let mut pad = TestPadBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .selected(0)
        .build();

    for action in actions_from(&[("backspace", KeyModifiers::NONE)]) {
        pad.apply_action(action);
    }
    assert_eq!(pad.document().object_count(), 0);
}
