//! Gesture timing and geometry settings.
//!
//! Defaults mirror [`crate::consts`]. Hosts may pass a partial JSON object;
//! any omitted field keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DOUBLE_CLICK_MS, EDGE_MARGIN_PX, FALLBACK_BUTTON_PX, LONG_PRESS_MS};
use crate::error::ConfigError;

/// Timing thresholds and pixel constants used by [`crate::widget::WidgetCore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Hold duration before a press turns into a drag.
    pub long_press_ms: u32,
    /// Double-click detection window and post-double-click suppression window.
    pub double_click_ms: u32,
    /// Minimum gap between the button and each viewport edge.
    pub edge_margin_px: f64,
    /// Button edge length used when the host reports no usable size.
    pub fallback_button_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: LONG_PRESS_MS,
            double_click_ms: DOUBLE_CLICK_MS,
            edge_margin_px: EDGE_MARGIN_PX,
            fallback_button_px: FALLBACK_BUTTON_PX,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a config from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the
    /// [`GestureConfig::validate`] errors for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDuration`] for a zero timing value and
    /// [`ConfigError::OutOfRange`] for a negative or non-finite margin or a
    /// non-positive fallback size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "long_press_ms" });
        }
        if self.double_click_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "double_click_ms" });
        }
        if !self.edge_margin_px.is_finite() || self.edge_margin_px < 0.0 {
            return Err(ConfigError::OutOfRange { field: "edge_margin_px", value: self.edge_margin_px });
        }
        if !self.fallback_button_px.is_finite() || self.fallback_button_px <= 0.0 {
            return Err(ConfigError::OutOfRange { field: "fallback_button_px", value: self.fallback_button_px });
        }
        Ok(())
    }
}
