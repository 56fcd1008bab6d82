#![allow(clippy::float_cmp)]

use super::*;

const MARGIN: f64 = 16.0;

fn viewport() -> Size {
    Size::new(1000.0, 800.0)
}

fn button() -> Size {
    Size::new(56.0, 56.0)
}

fn timer(kind: TimerKind, seq: u64) -> TimerId {
    TimerId { kind, seq }
}

// =============================================================
// DragSession::begin
// =============================================================

#[test]
fn begin_bottom_right_button_anchors_right_bottom() {
    let session = DragSession::begin(Point::new(950.0, 750.0), Rect::new(928.0, 728.0, 56.0, 56.0), viewport());
    assert_eq!(session.horizontal, HorizontalSide::Right);
    assert_eq!(session.vertical, VerticalSide::Bottom);
    assert_eq!(session.button_x, 928.0);
    assert_eq!(session.button_y, 728.0);
    assert_eq!(session.x, 950.0);
    assert_eq!(session.y, 750.0);
}

#[test]
fn begin_top_left_button_anchors_left_top() {
    let session = DragSession::begin(Point::new(30.0, 30.0), Rect::new(16.0, 16.0, 56.0, 56.0), viewport());
    assert_eq!(session.horizontal, HorizontalSide::Left);
    assert_eq!(session.vertical, VerticalSide::Top);
}

#[test]
fn begin_center_exactly_on_midpoint_anchors_left_top() {
    let session = DragSession::begin(Point::new(500.0, 400.0), Rect::new(472.0, 372.0, 56.0, 56.0), viewport());
    assert_eq!(session.horizontal, HorizontalSide::Left);
    assert_eq!(session.vertical, VerticalSide::Top);
}

// =============================================================
// DragSession::position_at
// =============================================================

#[test]
fn position_at_start_point_reproduces_origin() {
    let session = DragSession::begin(Point::new(950.0, 750.0), Rect::new(928.0, 728.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(950.0, 750.0), viewport(), button(), MARGIN);
    assert_eq!(pos, Position::default());
}

#[test]
fn position_at_moves_right_anchor_by_negative_delta() {
    let session = DragSession::begin(Point::new(900.0, 700.0), Rect::new(928.0, 728.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(700.0, 500.0), viewport(), button(), MARGIN);
    assert_eq!(pos.right(), Some(216.0));
    assert_eq!(pos.bottom(), Some(216.0));
}

#[test]
fn position_at_left_top_follows_delta() {
    let session = DragSession::begin(Point::new(30.0, 30.0), Rect::new(16.0, 16.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(130.0, 80.0), viewport(), button(), MARGIN);
    assert_eq!(pos.left(), Some(116.0));
    assert_eq!(pos.top(), Some(66.0));
}

#[test]
fn position_at_clamps_to_margin() {
    let session = DragSession::begin(Point::new(30.0, 30.0), Rect::new(16.0, 16.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(-500.0, -500.0), viewport(), button(), MARGIN);
    assert_eq!(pos.left(), Some(16.0));
    assert_eq!(pos.top(), Some(16.0));
}

#[test]
fn position_at_clamps_to_far_edge() {
    let session = DragSession::begin(Point::new(30.0, 30.0), Rect::new(16.0, 16.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(5000.0, 5000.0), viewport(), button(), MARGIN);
    assert_eq!(pos.left(), Some(928.0));
    assert_eq!(pos.top(), Some(728.0));
}

#[test]
fn position_at_right_anchor_clamps_far_edge() {
    let session = DragSession::begin(Point::new(950.0, 750.0), Rect::new(928.0, 728.0, 56.0, 56.0), viewport());
    let pos = session.position_at(Point::new(-4000.0, -4000.0), viewport(), button(), MARGIN);
    assert_eq!(pos.right(), Some(928.0));
    assert_eq!(pos.bottom(), Some(728.0));
}

#[test]
fn position_at_tiny_viewport_pins_to_margin() {
    let tiny = Size::new(60.0, 60.0);
    let session = DragSession::begin(Point::new(10.0, 10.0), Rect::new(0.0, 0.0, 56.0, 56.0), tiny);
    let pos = session.position_at(Point::new(40.0, 40.0), tiny, button(), MARGIN);
    assert_eq!(pos.left(), Some(16.0));
    assert_eq!(pos.top(), Some(16.0));
}

#[test]
fn position_at_uses_current_viewport() {
    let session = DragSession::begin(Point::new(950.0, 750.0), Rect::new(928.0, 728.0, 56.0, 56.0), viewport());
    let resized = Size::new(1200.0, 800.0);
    let pos = session.position_at(Point::new(950.0, 750.0), resized, button(), MARGIN);
    assert_eq!(pos.right(), Some(216.0));
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn state_default_is_idle() {
    assert_eq!(GestureState::default(), GestureState::Idle);
    assert!(GestureState::Idle.armed_timer().is_none());
}

#[test]
fn pending_press_reports_its_timer() {
    let id = timer(TimerKind::LongPress, 3);
    let state = GestureState::PendingPress(PendingPress { point: Point::new(1.0, 2.0), timer: id });
    assert_eq!(state.armed_timer(), Some(id));
    assert!(!state.is_dragging());
}

#[test]
fn suppressed_reports_its_timer() {
    let id = timer(TimerKind::DoubleClickSuppression, 9);
    let state = GestureState::SuppressedByDoubleClick { timer: id };
    assert_eq!(state.armed_timer(), Some(id));
}

#[test]
fn dragging_has_no_timer() {
    let session = DragSession::begin(Point::default(), Rect::new(0.0, 0.0, 56.0, 56.0), viewport());
    let state = GestureState::Dragging(session);
    assert!(state.is_dragging());
    assert!(state.armed_timer().is_none());
}

#[test]
fn timer_ids_compare_by_kind_and_seq() {
    assert_eq!(timer(TimerKind::LongPress, 1), timer(TimerKind::LongPress, 1));
    assert_ne!(timer(TimerKind::LongPress, 1), timer(TimerKind::LongPress, 2));
    assert_ne!(timer(TimerKind::LongPress, 1), timer(TimerKind::DoubleClickSuppression, 1));
}
