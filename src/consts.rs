//! Shared timing and geometry constants for the widget.

// ── Timing ──────────────────────────────────────────────────────

/// How long a press must be held before it becomes a drag.
pub const LONG_PRESS_MS: u32 = 500;

/// Two presses closer together than this are a double-click. Also the
/// length of the click-suppression window that follows one.
pub const DOUBLE_CLICK_MS: u32 = 300;

// ── Geometry ────────────────────────────────────────────────────

/// Minimum distance in CSS pixels between the button and any viewport edge.
pub const EDGE_MARGIN_PX: f64 = 16.0;

/// Button edge length used when the host cannot report the element size.
pub const FALLBACK_BUTTON_PX: f64 = 56.0;

// ── Accessibility ───────────────────────────────────────────────

/// Screen-reader instruction shown on draggable buttons.
pub const DRAG_HINT: &str = "Long press to move this button. Double click to reset position.";
