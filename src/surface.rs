//! The page mutations the toggle needs.
//!
//! [`crate::toggle::ToggleCore`] never touches the DOM directly. It drives a
//! `ThemeSurface`, which the browser layer implements over web-sys elements
//! and tests implement over plain fields.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::theme::Icon;

/// CSS `display` values the toggle writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// CSS `opacity` value, clamped to `0..=1`.
#[must_use]
pub fn opacity_css(opacity: f64) -> String {
    let clamped = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    format!("{clamped}")
}

/// Root marker class plus inline styles on the two icons.
pub trait ThemeSurface {
    /// Whether the root currently carries the marker class.
    fn marker_present(&self) -> bool;

    /// Add or remove the marker class on the root.
    fn set_marker(&mut self, present: bool);

    fn set_display(&mut self, icon: Icon, display: Display);

    fn set_opacity(&mut self, icon: Icon, opacity: f64);
}
