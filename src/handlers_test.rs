use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::*;
use crate::gesture::{TimerId, TimerKind};
use crate::position::{Horizontal, Vertical};

fn recorder() -> (Rc<RefCell<Vec<String>>>, Handlers) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c, d, e) = (log.clone(), log.clone(), log.clone(), log.clone(), log.clone());
    let handlers = Handlers::new(move || a.borrow_mut().push("click".into()))
        .on_double_click(move || b.borrow_mut().push("double".into()))
        .on_long_press(move || c.borrow_mut().push("long".into()))
        .on_drag_end(move || d.borrow_mut().push("end".into()))
        .on_position_change(move |p| e.borrow_mut().push(p.css_declarations()));
    (log, handlers)
}

#[test]
fn new_has_no_double_click() {
    let handlers = Handlers::new(|| {});
    assert!(!handlers.has_double_click());
    assert!(Handlers::new(|| {}).on_double_click(|| {}).has_double_click());
}

#[test]
fn dispatch_invokes_callbacks_in_order() {
    let (log, handlers) = recorder();
    let pos = Position::new(Horizontal::Left(20.0), Vertical::Top(30.0));
    let rest = handlers.dispatch(vec![
        Action::LongPress,
        Action::PositionChanged(pos),
        Action::DragEnd,
        Action::Click,
        Action::DoubleClick,
    ]);
    assert!(rest.is_empty());
    assert_eq!(*log.borrow(), vec!["long", "left: 20px; top: 30px;", "end", "click", "double"]);
}

#[test]
fn dispatch_returns_host_actions() {
    let (log, handlers) = recorder();
    let id = TimerId { kind: TimerKind::LongPress, seq: 1 };
    let rest = handlers.dispatch(vec![
        Action::CancelTimer(id),
        Action::Click,
        Action::AttachDragListeners,
    ]);
    assert_eq!(rest, vec![Action::CancelTimer(id), Action::AttachDragListeners]);
    assert_eq!(*log.borrow(), vec!["click"]);
}

#[test]
fn dispatch_skips_missing_optional_handlers() {
    let clicks = Rc::new(RefCell::new(0));
    let counter = clicks.clone();
    let handlers = Handlers::new(move || *counter.borrow_mut() += 1);
    let rest = handlers.dispatch(vec![
        Action::DoubleClick,
        Action::LongPress,
        Action::DragEnd,
        Action::PositionChanged(Position::default()),
        Action::Click,
    ]);
    assert!(rest.is_empty());
    assert_eq!(*clicks.borrow(), 1);
}

#[test]
fn action_is_callback_classification() {
    assert!(Action::Click.is_callback());
    assert!(Action::PositionChanged(Position::default()).is_callback());
    assert!(!Action::AttachDragListeners.is_callback());
    assert!(!Action::CancelTimer(TimerId { kind: TimerKind::DoubleClickSuppression, seq: 2 }).is_callback());
}

#[test]
fn split_defers_callbacks_until_invoked() {
    let (log, handlers) = recorder();
    let id = TimerId { kind: TimerKind::DoubleClickSuppression, seq: 4 };
    let (invocations, host) = handlers.split(vec![
        Action::DoubleClick,
        Action::CancelTimer(id),
        Action::StartTimer { id, delay_ms: 300 },
    ]);
    assert_eq!(host, vec![Action::CancelTimer(id), Action::StartTimer { id, delay_ms: 300 }]);
    assert!(log.borrow().is_empty());
    for invocation in invocations {
        invocation.invoke();
    }
    assert_eq!(*log.borrow(), vec!["double"]);
}

#[test]
fn callback_may_dispatch_through_the_same_handlers() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b) = (log.clone(), log.clone());
    let handlers = Rc::new_cyclic(|weak: &Weak<Handlers>| {
        let weak = weak.clone();
        Handlers::new(move || {
            a.borrow_mut().push("click");
            if let Some(handlers) = weak.upgrade() {
                handlers.dispatch(vec![Action::DragEnd]);
            }
        })
        .on_drag_end(move || b.borrow_mut().push("end"))
    });
    handlers.dispatch(vec![Action::Click]);
    assert_eq!(*log.borrow(), vec!["click", "end"]);
}

#[test]
fn callback_reentering_itself_is_skipped() {
    let clicks = Rc::new(RefCell::new(0));
    let counter = clicks.clone();
    let handlers = Rc::new_cyclic(|weak: &Weak<Handlers>| {
        let weak = weak.clone();
        Handlers::new(move || {
            *counter.borrow_mut() += 1;
            if let Some(handlers) = weak.upgrade() {
                handlers.dispatch(vec![Action::Click]);
            }
        })
    });
    handlers.dispatch(vec![Action::Click]);
    assert_eq!(*clicks.borrow(), 1);
}
