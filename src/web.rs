//! Browser host: binds a [`WidgetCore`] to a DOM button.
//!
//! This module is the only place that touches `web_sys`. It normalizes mouse
//! and touch events into [`Point`]s, reads geometry from the DOM, runs the
//! timers and document listeners the core asks for, and forwards callback
//! actions to [`Handlers`].
//!
//! Closures registered with the DOM hold a `Weak` reference to the host, so
//! dropping the [`FabHost`] releases every listener and timer. Callbacks run
//! after the host has finished its own bookkeeping and with no borrow held,
//! so a callback may toggle dragging, reposition, or unmount the button.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::config::GestureConfig;
use crate::consts::DRAG_HINT;
use crate::error::HostError;
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{TimerId, TimerKind};
use crate::handlers::Handlers;
use crate::position::Position;
use crate::widget::{Action, ButtonEvent, WidgetCore};

/// Install the browser console logger and panic hook.
///
/// # Errors
///
/// Returns an error if a logger is already installed.
pub fn init_logging(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
}

/// Initial settings for a mounted button.
#[derive(Debug, Clone)]
pub struct FabOptions {
    pub aria_label: String,
    pub draggable: bool,
    pub position: Position,
    pub config: GestureConfig,
}

impl Default for FabOptions {
    fn default() -> Self {
        Self {
            aria_label: String::new(),
            draggable: false,
            position: Position::default(),
            config: GestureConfig::default(),
        }
    }
}

/// A DOM event listener that unregisters itself on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        passive: Option<bool>,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, HostError> {
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let result = match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
            }
            None => target.add_event_listener_with_callback(event, callback),
        };
        result.map_err(|err| dom_error("addEventListener", &err))?;
        Ok(Self { target: target.clone(), event, closure })
    }

    fn detach(&self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, callback) {
            warn!("fab: removeEventListener({}) failed: {err:?}", self.event);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

struct Inner {
    element: HtmlElement,
    core: RefCell<WidgetCore>,
    handlers: Handlers,
    /// One slot per timer kind. A fired timeout stays in its slot until it is
    /// replaced or cancelled.
    timers: RefCell<HashMap<TimerKind, (TimerId, Timeout)>>,
    /// The timer whose callback is on the stack, if any.
    firing: Cell<Option<TimerId>>,
    button_listeners: RefCell<Vec<Listener>>,
    drag_listeners: RefCell<Vec<Listener>>,
    /// Detached listeners. Any of them may be the one currently running, so
    /// they are dropped on the next drag attach or together with the host.
    retired: RefCell<Vec<Listener>>,
    /// Timeouts removed from their slot while running.
    retired_timers: RefCell<Vec<Timeout>>,
}

/// A floating action button mounted on an existing element.
pub struct FabHost {
    inner: Rc<Inner>,
}

impl FabHost {
    /// Take over `element`: apply position and accessibility attributes and
    /// register the button's own listeners.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if `options.config` fails validation, and
    /// another [`HostError`] if an attribute cannot be set or a listener
    /// cannot be registered.
    pub fn mount(element: HtmlElement, options: FabOptions, handlers: Handlers) -> Result<Self, HostError> {
        let mut core = WidgetCore::try_new(options.config, options.position)?;
        core.set_double_click_enabled(handlers.has_double_click());
        core.set_draggable(options.draggable);

        let inner = Rc::new(Inner {
            element,
            core: RefCell::new(core),
            handlers,
            timers: RefCell::new(HashMap::new()),
            firing: Cell::new(None),
            button_listeners: RefCell::new(Vec::new()),
            drag_listeners: RefCell::new(Vec::new()),
            retired: RefCell::new(Vec::new()),
            retired_timers: RefCell::new(Vec::new()),
        });

        set_attribute(&inner.element, "role", "button")?;
        set_attribute(&inner.element, "tabindex", "0")?;
        set_attribute(&inner.element, "aria-label", &options.aria_label)?;
        apply_hint(&inner.element, options.draggable)?;
        apply_position(&inner.element, &options.position);

        let listeners = button_listeners(&inner)?;
        *inner.button_listeners.borrow_mut() = listeners;
        log::debug!("fab: mounted (draggable: {})", options.draggable);
        Ok(Self { inner })
    }

    /// Apply a new controlled position.
    pub fn set_position(&self, position: Position) {
        self.inner.core.borrow_mut().set_position(position);
        apply_position(&self.inner.element, &position);
    }

    /// Enable or disable drag. Disabling mid-gesture abandons it silently.
    pub fn set_draggable(&self, draggable: bool) {
        let actions = self.inner.core.borrow_mut().set_draggable(draggable);
        if let Err(err) = apply_hint(&self.inner.element, draggable) {
            warn!("fab: {err}");
        }
        run(&self.inner, actions);
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.core.borrow().is_dragging()
    }

    /// Cancel timers and detach every listener. Safe to call more than once,
    /// including from inside a callback.
    pub fn unmount(&self) {
        let actions = self.inner.core.borrow_mut().unmount();
        run(&self.inner, actions);
        let timers = std::mem::take(&mut *self.inner.timers.borrow_mut());
        for (id, timeout) in timers.into_values() {
            drop_timer(&self.inner, id, timeout);
        }
        retire(&self.inner, &self.inner.button_listeners);
        retire(&self.inner, &self.inner.drag_listeners);
    }
}

impl Drop for FabHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================
// Action execution
// =============================================================

fn run(inner: &Rc<Inner>, actions: Vec<Action>) {
    if actions.is_empty() {
        return;
    }
    // Host work first, so a callback that re-enters sees settled timers and
    // listeners.
    let (invocations, host_actions) = inner.handlers.split(actions);
    for action in host_actions {
        match action {
            Action::StartTimer { id, delay_ms } => start_timer(inner, id, delay_ms),
            Action::CancelTimer(id) => {
                let armed = inner.timers.borrow().get(&id.kind).is_some_and(|(armed, _)| *armed == id);
                if armed {
                    let removed = inner.timers.borrow_mut().remove(&id.kind);
                    if let Some((id, timeout)) = removed {
                        drop_timer(inner, id, timeout);
                    }
                }
            }
            Action::AttachDragListeners => {
                inner.retired.borrow_mut().clear();
                inner.retired_timers.borrow_mut().clear();
                match drag_listeners(inner) {
                    Ok(listeners) => *inner.drag_listeners.borrow_mut() = listeners,
                    Err(err) => warn!("fab: could not attach drag listeners: {err}"),
                }
            }
            Action::DetachDragListeners => retire(inner, &inner.drag_listeners),
            Action::Click | Action::DoubleClick | Action::LongPress | Action::DragEnd | Action::PositionChanged(_) => {}
        }
    }
    for invocation in invocations {
        invocation.invoke();
    }
}

/// Detach `listeners` now and keep them alive until it is safe to drop them.
fn retire(inner: &Inner, listeners: &RefCell<Vec<Listener>>) {
    let listeners = std::mem::take(&mut *listeners.borrow_mut());
    for listener in &listeners {
        listener.detach();
    }
    inner.retired.borrow_mut().extend(listeners);
}

/// Dropping a pending timeout cancels it. The one currently firing is parked
/// instead.
fn drop_timer(inner: &Inner, id: TimerId, timeout: Timeout) {
    if inner.firing.get() == Some(id) {
        inner.retired_timers.borrow_mut().push(timeout);
    } else {
        drop(timeout);
    }
}

fn start_timer(inner: &Rc<Inner>, id: TimerId, delay_ms: u32) {
    let weak = Rc::downgrade(inner);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.firing.set(Some(id));
        let actions = match id.kind {
            TimerKind::LongPress => {
                let button = button_rect(&inner.element);
                inner.core.borrow_mut().on_long_press(id, button, viewport())
            }
            TimerKind::DoubleClickSuppression => inner.core.borrow_mut().on_suppression_end(id),
        };
        run(&inner, actions);
        inner.firing.set(None);
    });
    let replaced = inner.timers.borrow_mut().insert(id.kind, (id, timeout));
    if let Some((old, timeout)) = replaced {
        drop_timer(inner, old, timeout);
    }
}

// =============================================================
// Listeners
// =============================================================

fn handler<F>(inner: &Rc<Inner>, f: F) -> Closure<dyn FnMut(Event)>
where
    F: Fn(&Rc<Inner>, Event) -> Vec<Action> + 'static,
{
    let weak: Weak<Inner> = Rc::downgrade(inner);
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(inner) = weak.upgrade() {
            let actions = f(&inner, event);
            run(&inner, actions);
        }
    }) as Box<dyn FnMut(Event)>)
}

fn button_listeners(inner: &Rc<Inner>) -> Result<Vec<Listener>, HostError> {
    let target: &EventTarget = inner.element.as_ref();
    Ok(vec![
        Listener::attach(
            target,
            "mousedown",
            None,
            handler(inner, |inner, event| {
                let Some(point) = mouse_point(&event) else {
                    return Vec::new();
                };
                guard_default(inner, &event, ButtonEvent::MouseDown);
                inner.core.borrow_mut().on_pointer_down(point, js_sys::Date::now())
            }),
        )?,
        Listener::attach(
            target,
            "mouseup",
            None,
            handler(inner, |inner, event| {
                guard_default(inner, &event, ButtonEvent::MouseUp);
                inner.core.borrow_mut().on_pointer_up()
            }),
        )?,
        Listener::attach(
            target,
            "touchstart",
            None,
            handler(inner, |inner, event| {
                let Some(point) = touch_point(&event) else {
                    return Vec::new();
                };
                guard_default(inner, &event, ButtonEvent::TouchStart);
                inner.core.borrow_mut().on_pointer_down(point, js_sys::Date::now())
            }),
        )?,
        Listener::attach(
            target,
            "touchend",
            Some(false),
            handler(inner, |inner, event| {
                guard_default(inner, &event, ButtonEvent::TouchEnd);
                inner.core.borrow_mut().on_pointer_up()
            }),
        )?,
        Listener::attach(
            target,
            "click",
            None,
            handler(inner, |inner, event| {
                guard_default(inner, &event, ButtonEvent::Click);
                Vec::new()
            }),
        )?,
        Listener::attach(
            target,
            "contextmenu",
            None,
            handler(inner, |inner, event| {
                guard_default(inner, &event, ButtonEvent::ContextMenu);
                Vec::new()
            }),
        )?,
    ])
}

fn drag_listeners(inner: &Rc<Inner>) -> Result<Vec<Listener>, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let target: &EventTarget = document.as_ref();
    Ok(vec![
        Listener::attach(
            target,
            "mousemove",
            None,
            handler(inner, |inner, event| {
                let Some(point) = mouse_point(&event) else {
                    return Vec::new();
                };
                event.prevent_default();
                drag_to(inner, point)
            }),
        )?,
        Listener::attach(
            target,
            "mouseup",
            None,
            handler(inner, |inner, _| inner.core.borrow_mut().on_document_pointer_up()),
        )?,
        Listener::attach(
            target,
            "touchmove",
            Some(false),
            handler(inner, |inner, event| {
                let Some(point) = touch_point(&event) else {
                    return Vec::new();
                };
                event.prevent_default();
                drag_to(inner, point)
            }),
        )?,
        Listener::attach(
            target,
            "touchend",
            None,
            handler(inner, |inner, _| inner.core.borrow_mut().on_document_pointer_up()),
        )?,
    ])
}

fn drag_to(inner: &Rc<Inner>, point: Point) -> Vec<Action> {
    let button = element_size(&inner.element);
    inner.core.borrow_mut().on_pointer_move(point, viewport(), button)
}

fn guard_default(inner: &Inner, event: &Event, kind: ButtonEvent) {
    if inner.core.borrow().prevents_default(kind) {
        event.prevent_default();
    }
}

// =============================================================
// Event normalization and geometry
// =============================================================

fn mouse_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// First active touch. Events with no touches (e.g. a cancelled gesture) yield `None`.
fn touch_point(event: &Event) -> Option<Point> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn viewport() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::default();
    };
    let width = match window.inner_width() {
        Ok(v) => v.as_f64().unwrap_or_default(),
        Err(_) => 0.0,
    };
    let height = match window.inner_height() {
        Ok(v) => v.as_f64().unwrap_or_default(),
        Err(_) => 0.0,
    };
    Size::new(width, height)
}

fn button_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn element_size(element: &HtmlElement) -> Size {
    Size::new(f64::from(element.offset_width()), f64::from(element.offset_height()))
}

// =============================================================
// DOM updates
// =============================================================

fn apply_position(element: &HtmlElement, position: &Position) {
    let style = element.style();
    for (property, value) in position.css_pairs() {
        if let Err(err) = style.set_property(property, &value) {
            warn!("fab: could not set {property}: {err:?}");
        }
    }
}

fn apply_hint(element: &HtmlElement, draggable: bool) -> Result<(), HostError> {
    if draggable {
        set_attribute(element, "aria-description", DRAG_HINT)
    } else {
        element
            .remove_attribute("aria-description")
            .map_err(|err| dom_error("removeAttribute", &err))
    }
}

fn set_attribute(element: &HtmlElement, name: &str, value: &str) -> Result<(), HostError> {
    element.set_attribute(name, value).map_err(|err| dom_error("setAttribute", &err))
}

fn dom_error(call: &'static str, err: &JsValue) -> HostError {
    HostError::Dom { call, message: format!("{err:?}") }
}
