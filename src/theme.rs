//! Theme state and the icon that represents it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The page's display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// State implied by the presence of the marker class on the root.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The icon displayed while this state is settled: moon for dark, sun for light.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Light => Icon::Sun,
            Self::Dark => Icon::Moon,
        }
    }
}

/// One of the two icon elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Moon,
    Sun,
}

impl Icon {
    /// The other icon of the pair.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Moon => Self::Sun,
            Self::Sun => Self::Moon,
        }
    }
}
