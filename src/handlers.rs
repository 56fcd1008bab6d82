//! Outbound callbacks to the embedding application.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::position::Position;
use crate::widget::Action;

type Callback = Rc<RefCell<dyn FnMut()>>;
type PositionCallback = Rc<RefCell<dyn FnMut(Position)>>;

/// The callbacks a button reports to. Only `on_click` is required.
///
/// Callbacks are shared handles so a host can collect the ones an action
/// list needs, release its own borrows, and only then call out. A callback
/// may therefore call back into the host (toggle dragging, unmount).
pub struct Handlers {
    on_click: Callback,
    on_double_click: Option<Callback>,
    on_long_press: Option<Callback>,
    on_drag_end: Option<Callback>,
    on_position_change: Option<PositionCallback>,
}

/// One pending callback, detached from the [`Handlers`] it came from.
pub enum Invocation {
    Plain(Callback),
    Position(PositionCallback, Position),
}

impl Invocation {
    /// Run the callback. A callback that is already running further up the
    /// stack is skipped rather than re-entered.
    pub fn invoke(self) {
        match self {
            Self::Plain(f) => {
                if let Ok(mut f) = f.try_borrow_mut() {
                    (*f)();
                } else {
                    warn!("fab: callback re-entered itself, skipped");
                }
            }
            Self::Position(f, position) => {
                if let Ok(mut f) = f.try_borrow_mut() {
                    (*f)(position);
                } else {
                    warn!("fab: position callback re-entered itself, skipped");
                }
            }
        }
    }
}

impl Handlers {
    #[must_use]
    pub fn new(on_click: impl FnMut() + 'static) -> Self {
        Self {
            on_click: Rc::new(RefCell::new(on_click)),
            on_double_click: None,
            on_long_press: None,
            on_drag_end: None,
            on_position_change: None,
        }
    }

    #[must_use]
    pub fn on_double_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_double_click = Some(Rc::new(RefCell::new(f)));
        self
    }

    #[must_use]
    pub fn on_long_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_long_press = Some(Rc::new(RefCell::new(f)));
        self
    }

    #[must_use]
    pub fn on_drag_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_end = Some(Rc::new(RefCell::new(f)));
        self
    }

    #[must_use]
    pub fn on_position_change(mut self, f: impl FnMut(Position) + 'static) -> Self {
        self.on_position_change = Some(Rc::new(RefCell::new(f)));
        self
    }

    /// Whether a double-click handler is registered. Without one, a quick
    /// second press is treated as an ordinary press.
    #[must_use]
    pub fn has_double_click(&self) -> bool {
        self.on_double_click.is_some()
    }

    /// Separate callback actions from host actions (timers, listeners).
    ///
    /// Callback actions become [`Invocation`]s in order; those without a
    /// registered handler are dropped.
    #[must_use]
    pub fn split(&self, actions: Vec<Action>) -> (Vec<Invocation>, Vec<Action>) {
        let (callbacks, host): (Vec<_>, Vec<_>) = actions.into_iter().partition(Action::is_callback);
        let invocations = callbacks.into_iter().filter_map(|action| self.invocation(action)).collect();
        (invocations, host)
    }

    /// Invoke the callback for every callback action, in order, and hand back
    /// the rest for the host to perform.
    pub fn dispatch(&self, actions: Vec<Action>) -> Vec<Action> {
        let (invocations, host) = self.split(actions);
        for invocation in invocations {
            invocation.invoke();
        }
        host
    }

    fn invocation(&self, action: Action) -> Option<Invocation> {
        let plain = |f: &Option<Callback>| f.clone().map(Invocation::Plain);
        match action {
            Action::Click => Some(Invocation::Plain(self.on_click.clone())),
            Action::DoubleClick => plain(&self.on_double_click),
            Action::LongPress => plain(&self.on_long_press),
            Action::DragEnd => plain(&self.on_drag_end),
            Action::PositionChanged(position) => {
                self.on_position_change.clone().map(|f| Invocation::Position(f, position))
            }
            Action::StartTimer { .. }
            | Action::CancelTimer(_)
            | Action::AttachDragListeners
            | Action::DetachDragListeners => None,
        }
    }
}
