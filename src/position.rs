//! Viewport-anchored button position.
//!
//! A position pins the button to one horizontal edge and one vertical edge of
//! the viewport. The embedding application owns the value and stores it in
//! the flat shape `{"right": 16, "bottom": 16}`; exactly one of
//! `left`/`right` and one of `top`/`bottom` must be present.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use serde::{Deserialize, Serialize};

use crate::consts::EDGE_MARGIN_PX;
use crate::error::{Axis, PositionError};

/// Distance from the left or right viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    Left(f64),
    Right(f64),
}

impl Horizontal {
    #[must_use]
    pub fn distance(self) -> f64 {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }
}

/// Distance from the top or bottom viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    Top(f64),
    Bottom(f64),
}

impl Vertical {
    #[must_use]
    pub fn distance(self) -> f64 {
        match self {
            Self::Top(v) | Self::Bottom(v) => v,
        }
    }
}

/// Where the button sits: one horizontal anchor plus one vertical anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Default for Position {
    /// Bottom-right corner, one margin in from each edge.
    fn default() -> Self {
        Self {
            horizontal: Horizontal::Right(EDGE_MARGIN_PX),
            vertical: Vertical::Bottom(EDGE_MARGIN_PX),
        }
    }
}

impl Position {
    #[must_use]
    pub fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self { horizontal, vertical }
    }

    #[must_use]
    pub fn left(&self) -> Option<f64> {
        match self.horizontal {
            Horizontal::Left(v) => Some(v),
            Horizontal::Right(_) => None,
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<f64> {
        match self.horizontal {
            Horizontal::Right(v) => Some(v),
            Horizontal::Left(_) => None,
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            Vertical::Top(v) => Some(v),
            Vertical::Bottom(_) => None,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> Option<f64> {
        match self.vertical {
            Vertical::Bottom(v) => Some(v),
            Vertical::Top(_) => None,
        }
    }

    /// CSS `(property, value)` pairs for all four inset properties.
    ///
    /// The unused side of each axis is `auto` so that a switch from
    /// `right` to `left` does not leave a stale inset behind.
    #[must_use]
    pub fn css_pairs(&self) -> [(&'static str, String); 4] {
        let px = |v: Option<f64>| v.map_or_else(|| "auto".to_owned(), |v| format!("{v}px"));
        [
            ("left", px(self.left())),
            ("right", px(self.right())),
            ("top", px(self.top())),
            ("bottom", px(self.bottom())),
        ]
    }

    /// Inline style text for the populated anchors, e.g. `right: 16px; bottom: 16px;`.
    #[must_use]
    pub fn css_declarations(&self) -> String {
        let (h_name, h) = match self.horizontal {
            Horizontal::Left(v) => ("left", v),
            Horizontal::Right(v) => ("right", v),
        };
        let (v_name, v) = match self.vertical {
            Vertical::Top(v) => ("top", v),
            Vertical::Bottom(v) => ("bottom", v),
        };
        format!("{h_name}: {h}px; {v_name}: {v}px;")
    }
}

/// Flat wire shape used by the embedding application.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct RawPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bottom: Option<f64>,
}

fn finite(v: f64) -> Result<f64, PositionError> {
    if v.is_finite() { Ok(v) } else { Err(PositionError::NonFinite(v)) }
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let horizontal = match (raw.left, raw.right) {
            (Some(v), None) => Horizontal::Left(finite(v)?),
            (None, Some(v)) => Horizontal::Right(finite(v)?),
            (None, None) => return Err(PositionError::MissingAnchor(Axis::Horizontal)),
            (Some(_), Some(_)) => return Err(PositionError::ConflictingAnchors(Axis::Horizontal)),
        };
        let vertical = match (raw.top, raw.bottom) {
            (Some(v), None) => Vertical::Top(finite(v)?),
            (None, Some(v)) => Vertical::Bottom(finite(v)?),
            (None, None) => return Err(PositionError::MissingAnchor(Axis::Vertical)),
            (Some(_), Some(_)) => return Err(PositionError::ConflictingAnchors(Axis::Vertical)),
        };
        Ok(Self { horizontal, vertical })
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            left: pos.left(),
            right: pos.right(),
            top: pos.top(),
            bottom: pos.bottom(),
        }
    }
}
