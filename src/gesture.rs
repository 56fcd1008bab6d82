//! Gesture model: timers, the drag session, and the gesture state machine tag.
//!
//! `GestureState` is the active interaction tracked between pointer-down and
//! pointer-up. Each variant carries exactly the context it needs, so there is
//! no separate "is dragging" flag or nullable session to keep in sync.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::{Point, Rect, Size};
use crate::position::{Horizontal, Position, Vertical};

/// Which of the two widget timers a [`TimerId`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fires when a press has been held long enough to start a drag.
    LongPress,
    /// Fires when the post-double-click suppression window ends.
    DoubleClickSuppression,
}

/// Identity of one armed timer.
///
/// `seq` increases with every timer the widget arms, so a firing that arrives
/// after its timer was superseded can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    pub kind: TimerKind,
    pub seq: u64,
}

/// Horizontal edge the button anchors to while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Vertical edge the button anchors to while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// State captured when a long-press turns into a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x at press time.
    pub x: f64,
    /// Pointer y at press time.
    pub y: f64,
    /// Button box left edge at drag start.
    pub button_x: f64,
    /// Button box top edge at drag start.
    pub button_y: f64,
    /// Chosen from the button center against the viewport midpoint at drag start.
    pub horizontal: HorizontalSide,
    /// Chosen from the button center against the viewport midpoint at drag start.
    pub vertical: VerticalSide,
}

impl DragSession {
    /// Start a session for a press at `pointer` on a button occupying `button`.
    #[must_use]
    pub fn begin(pointer: Point, button: Rect, viewport: Size) -> Self {
        let center = button.center();
        let horizontal = if center.x > viewport.width / 2.0 {
            HorizontalSide::Right
        } else {
            HorizontalSide::Left
        };
        let vertical = if center.y > viewport.height / 2.0 {
            VerticalSide::Bottom
        } else {
            VerticalSide::Top
        };
        Self {
            x: pointer.x,
            y: pointer.y,
            button_x: button.x,
            button_y: button.y,
            horizontal,
            vertical,
        }
    }

    /// Anchored position for the pointer at `pointer`.
    ///
    /// Every distance is at least `margin` and at most
    /// `viewport_dim - button_dim - margin`. When the viewport is too small for
    /// both bounds to hold, the margin wins.
    #[must_use]
    pub fn position_at(&self, pointer: Point, viewport: Size, button: Size, margin: f64) -> Position {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;

        let horizontal = match self.horizontal {
            HorizontalSide::Right => {
                let v = (viewport.width - (self.button_x + dx + button.width)).max(margin);
                Horizontal::Right(bound(v, viewport.width - button.width - margin, margin))
            }
            HorizontalSide::Left => {
                let v = (self.button_x + dx).max(margin);
                Horizontal::Left(bound(v, viewport.width - button.width - margin, margin))
            }
        };
        let vertical = match self.vertical {
            VerticalSide::Bottom => {
                let v = (viewport.height - (self.button_y + dy + button.height)).max(margin);
                Vertical::Bottom(bound(v, viewport.height - button.height - margin, margin))
            }
            VerticalSide::Top => {
                let v = (self.button_y + dy).max(margin);
                Vertical::Top(bound(v, viewport.height - button.height - margin, margin))
            }
        };
        Position::new(horizontal, vertical)
    }
}

/// Cap at `max`, but never below `margin`.
fn bound(value: f64, max: f64, margin: f64) -> f64 {
    value.min(max).max(margin)
}

/// A press that has not yet become a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPress {
    /// Where the pointer went down.
    pub point: Point,
    /// The long-press timer armed for this press.
    pub timer: TimerId,
}

/// The gesture being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; waiting for the long-press timer or an early release.
    PendingPress(PendingPress),
    /// Long-press recognized; pointer moves reposition the button.
    Dragging(DragSession),
    /// A double-click just fired; clicks are swallowed until `timer` fires.
    SuppressedByDoubleClick {
        /// The suppression-window timer.
        timer: TimerId,
    },
}

impl GestureState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The timer this state is waiting on, if any.
    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerId> {
        match self {
            Self::PendingPress(press) => Some(press.timer),
            Self::SuppressedByDoubleClick { timer } => Some(*timer),
            Self::Idle | Self::Dragging(_) => None,
        }
    }
}
