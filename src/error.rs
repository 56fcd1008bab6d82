//! Error types for configuration, position parsing, and the browser host.
//!
//! The gesture state machine itself never fails: misuse is ignored and
//! missing geometry falls back to defaults. Errors only arise at the edges,
//! where data comes in from the embedding application or the DOM.

/// Error returned by [`crate::config::GestureConfig::from_json`] and
/// [`crate::config::GestureConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a config.
    #[error("failed to parse gesture config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A timing value was zero.
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    /// A pixel value was negative, zero where it must not be, or not finite.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Which axis of a [`crate::position::Position`] an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Error returned when a host position object is not a valid anchor pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    /// Neither anchor on this axis was provided.
    #[error("missing {0} anchor")]
    MissingAnchor(Axis),
    /// Both anchors on this axis were provided.
    #[error("conflicting {0} anchors")]
    ConflictingAnchors(Axis),
    /// An anchor distance was NaN or infinite.
    #[error("non-finite anchor distance: {0}")]
    NonFinite(f64),
}

/// Error raised while wiring the widget into the DOM.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,
    /// The gesture config failed validation.
    #[error("invalid gesture config: {0}")]
    Config(#[from] ConfigError),
    /// A DOM call rejected with a JavaScript exception.
    #[error("dom call `{call}` failed: {message}")]
    Dom { call: &'static str, message: String },
}
