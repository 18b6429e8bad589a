//! Toggle configuration.
//!
//! Every field has a default matching the page markup the toggle was written
//! for, so an empty JSON object (or no config at all) is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_CONTROL_ID, DEFAULT_FADE_OUT_MS, DEFAULT_MARKER_CLASS, DEFAULT_MOON_ID, DEFAULT_SUN_ID,
};
use crate::error::ToggleError;

/// How icons change on a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Swap `display` synchronously.
    Instant,
    /// Fade out, swap, then fade in on the next frame.
    #[default]
    Animated,
}

/// Element that carries the marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootElement {
    /// `document.body`.
    #[default]
    Body,
    /// `document.documentElement`.
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    pub control_id: String,
    pub moon_id: String,
    pub sun_id: String,
    pub marker_class: String,
    pub root: RootElement,
    pub variant: Variant,
    pub fade_out_ms: u32,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            moon_id: DEFAULT_MOON_ID.to_owned(),
            sun_id: DEFAULT_SUN_ID.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            root: RootElement::Body,
            variant: Variant::Animated,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON config object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON is malformed or a field has the
    /// wrong type or an unknown enum value.
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(u64::from(self.fade_out_ms))
    }
}
