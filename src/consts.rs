//! Shared defaults for the theme toggle.

// ── Page contract ───────────────────────────────────────────────

/// Id of the element that toggles the theme when clicked.
pub const DEFAULT_CONTROL_ID: &str = "darkModeToggle";

/// Id of the icon shown while dark mode is active.
pub const DEFAULT_MOON_ID: &str = "iconMoon";

/// Id of the icon shown while light mode is active.
pub const DEFAULT_SUN_ID: &str = "iconSun";

/// Class on the root element whose presence means dark mode.
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";

// ── Timing ──────────────────────────────────────────────────────

/// How long the outgoing icon fades before the display swap.
pub const DEFAULT_FADE_OUT_MS: u32 = 300;

// ── Styles ──────────────────────────────────────────────────────

/// Fully transparent.
pub const OPACITY_HIDDEN: f64 = 0.0;

/// Fully opaque.
pub const OPACITY_VISIBLE: f64 = 1.0;
