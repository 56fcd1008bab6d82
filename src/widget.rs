//! The floating-action-button state machine.
//!
//! [`WidgetCore`] turns normalized pointer input and timer firings into
//! [`Action`]s. It has no browser dependency: time and geometry come in as
//! arguments, and timers and listeners go out as actions for the host to
//! perform. The host feeds callback actions to [`crate::handlers::Handlers`].

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use log::{debug, trace};

use crate::config::GestureConfig;
use crate::error::ConfigError;
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{DragSession, GestureState, PendingPress, TimerId, TimerKind};
use crate::position::Position;

/// Raw DOM events delivered to the button element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
    Click,
    ContextMenu,
}

/// Work produced by an input for the host to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Arm a one-shot timer. The host calls back when it fires.
    StartTimer { id: TimerId, delay_ms: u32 },
    /// Disarm a timer so it never fires.
    CancelTimer(TimerId),
    /// Install document-level move/up listeners.
    AttachDragListeners,
    /// Remove the document-level move/up listeners.
    DetachDragListeners,
    Click,
    DoubleClick,
    LongPress,
    DragEnd,
    PositionChanged(Position),
}

impl Action {
    /// Whether this action maps to an outbound callback rather than host plumbing.
    #[must_use]
    pub fn is_callback(&self) -> bool {
        matches!(
            self,
            Self::Click | Self::DoubleClick | Self::LongPress | Self::DragEnd | Self::PositionChanged(_)
        )
    }
}

/// Gesture recognition and drag positioning for one button.
pub struct WidgetCore {
    pub config: GestureConfig,
    /// The position supplied by the embedding application.
    pub position: Position,
    gesture: GestureState,
    draggable: bool,
    double_click_enabled: bool,
    last_pointer_down_ms: Option<f64>,
    next_timer_seq: u64,
    mounted: bool,
}

impl Default for WidgetCore {
    fn default() -> Self {
        Self::new(GestureConfig::default(), Position::default())
    }
}

impl WidgetCore {
    /// Like [`WidgetCore::new`], but rejects a config that would produce
    /// zero-length timers or out-of-bounds positions.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GestureConfig::validate`].
    pub fn try_new(config: GestureConfig, position: Position) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, position))
    }

    /// A mounted, non-draggable widget with double-click detection off.
    /// The config is taken as is; see [`WidgetCore::try_new`].
    #[must_use]
    pub fn new(config: GestureConfig, position: Position) -> Self {
        Self {
            config,
            position,
            gesture: GestureState::Idle,
            draggable: false,
            double_click_enabled: false,
            last_pointer_down_ms: None,
            next_timer_seq: 0,
            mounted: true,
        }
    }

    // --- Configuration ---

    /// Enable or disable press-and-drag.
    ///
    /// Disabling mid-gesture abandons it: timers are cancelled, drag listeners
    /// are detached, and no handler fires.
    pub fn set_draggable(&mut self, draggable: bool) -> Vec<Action> {
        self.draggable = draggable;
        if draggable || !self.mounted {
            return Vec::new();
        }
        let actions = self.teardown();
        if !actions.is_empty() {
            debug!("fab: drag disabled mid-gesture");
        }
        actions
    }

    /// Double-clicks are only recognized when the host has a handler for them.
    pub fn set_double_click_enabled(&mut self, enabled: bool) {
        self.double_click_enabled = enabled;
    }

    /// Store a new controlled position from the embedding application.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    // --- Queries ---

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the host must cancel the browser's default handling of `event`.
    ///
    /// A touch release always does: otherwise the browser follows a tap with
    /// compatibility mouse events, and the synthesized press lands inside the
    /// double-click window of the touch press.
    #[must_use]
    pub fn prevents_default(&self, event: ButtonEvent) -> bool {
        match event {
            ButtonEvent::MouseDown => self.is_draggable(),
            ButtonEvent::TouchEnd | ButtonEvent::Click | ButtonEvent::ContextMenu => true,
            ButtonEvent::MouseUp | ButtonEvent::TouchStart => false,
        }
    }

    // --- Input events ---

    /// Pointer or touch went down on the button at `timestamp_ms`.
    pub fn on_pointer_down(&mut self, point: Point, timestamp_ms: f64) -> Vec<Action> {
        if !self.mounted || !self.draggable || self.gesture.is_dragging() {
            return Vec::new();
        }

        // A new press always leaves the current state, so its timer goes.
        let mut actions = Vec::new();
        if let Some(timer) = self.gesture.armed_timer() {
            actions.push(Action::CancelTimer(timer));
        }

        let window = f64::from(self.config.double_click_ms);
        let is_double = self.double_click_enabled
            && self.last_pointer_down_ms.is_some_and(|last| timestamp_ms - last < window);
        if is_double {
            let timer = self.next_timer(TimerKind::DoubleClickSuppression);
            self.gesture = GestureState::SuppressedByDoubleClick { timer };
            debug!("fab: double click, suppressing clicks for {}ms", self.config.double_click_ms);
            actions.insert(0, Action::DoubleClick);
            actions.push(Action::StartTimer { id: timer, delay_ms: self.config.double_click_ms });
            return actions;
        }

        self.last_pointer_down_ms = Some(timestamp_ms);
        let timer = self.next_timer(TimerKind::LongPress);
        self.gesture = GestureState::PendingPress(PendingPress { point, timer });
        trace!("fab: press at ({}, {})", point.x, point.y);
        actions.push(Action::StartTimer { id: timer, delay_ms: self.config.long_press_ms });
        actions
    }

    /// The long-press timer `id` fired. `button` is the element's current box
    /// and `viewport` the current window size.
    ///
    /// Ignored unless `id` is the timer of the press still pending.
    pub fn on_long_press(&mut self, id: TimerId, button: Rect, viewport: Size) -> Vec<Action> {
        if !self.mounted {
            return Vec::new();
        }
        let GestureState::PendingPress(press) = self.gesture else {
            debug!("fab: long press timer {} fired with no pending press", id.seq);
            return Vec::new();
        };
        if press.timer != id {
            debug!("fab: stale long press timer {}", id.seq);
            return Vec::new();
        }

        let size = button.size().or_fallback(self.config.fallback_button_px);
        let button = Rect::new(button.x, button.y, size.width, size.height);
        let session = DragSession::begin(press.point, button, viewport);
        self.gesture = GestureState::Dragging(session);
        debug!("fab: long press, dragging from ({}, {})", session.button_x, session.button_y);
        vec![Action::AttachDragListeners, Action::LongPress]
    }

    /// The suppression timer `id` fired; clicks are delivered again.
    pub fn on_suppression_end(&mut self, id: TimerId) -> Vec<Action> {
        if let GestureState::SuppressedByDoubleClick { timer } = self.gesture {
            if timer == id {
                self.gesture = GestureState::Idle;
                debug!("fab: double click suppression cleared");
            }
        }
        Vec::new()
    }

    /// Pointer moved to `point`. Only produces output while dragging.
    pub fn on_pointer_move(&mut self, point: Point, viewport: Size, button: Size) -> Vec<Action> {
        if !self.mounted {
            return Vec::new();
        }
        let GestureState::Dragging(session) = self.gesture else {
            return Vec::new();
        };
        let button = button.or_fallback(self.config.fallback_button_px);
        let position = session.position_at(point, viewport, button, self.config.edge_margin_px);
        trace!("fab: drag to {}", position.css_declarations());
        vec![Action::PositionChanged(position)]
    }

    /// Pointer or touch released on the button.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.mounted {
            return Vec::new();
        }
        match self.gesture {
            GestureState::Idle => vec![Action::Click],
            GestureState::PendingPress(press) => {
                self.gesture = GestureState::Idle;
                vec![Action::CancelTimer(press.timer), Action::Click]
            }
            GestureState::Dragging(_) => self.end_drag(),
            GestureState::SuppressedByDoubleClick { .. } => {
                trace!("fab: click suppressed after double click");
                Vec::new()
            }
        }
    }

    /// Release seen by a document-level listener. Ends a drag; anything else
    /// belongs to the button's own release handler.
    pub fn on_document_pointer_up(&mut self) -> Vec<Action> {
        if !self.mounted || !self.gesture.is_dragging() {
            return Vec::new();
        }
        self.end_drag()
    }

    /// The host element is going away. Cancels every timer and listener; all
    /// later calls are no-ops.
    pub fn unmount(&mut self) -> Vec<Action> {
        if !self.mounted {
            return Vec::new();
        }
        let actions = self.teardown();
        self.mounted = false;
        debug!("fab: unmounted");
        actions
    }

    // --- Internals ---

    fn end_drag(&mut self) -> Vec<Action> {
        self.gesture = GestureState::Idle;
        debug!("fab: drag end");
        vec![Action::DetachDragListeners, Action::DragEnd]
    }

    /// Drop the current gesture without firing any handler.
    fn teardown(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(timer) = self.gesture.armed_timer() {
            actions.push(Action::CancelTimer(timer));
        }
        if self.gesture.is_dragging() {
            actions.push(Action::DetachDragListeners);
        }
        self.gesture = GestureState::Idle;
        actions
    }

    fn next_timer(&mut self, kind: TimerKind) -> TimerId {
        self.next_timer_seq += 1;
        TimerId { kind, seq: self.next_timer_seq }
    }
}
