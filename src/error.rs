//! Error type for resolving and binding the toggle.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while setting up the theme toggle.
///
/// Once a controller is bound, toggling itself cannot fail: style and class
/// writes are best-effort.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// An element the page contract requires is missing.
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },
    /// There is no `window` or `document` to resolve elements from.
    #[error("no document available")]
    NoDocument,
    /// The JSON configuration could not be parsed.
    #[error("invalid toggle config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
}

/// Turn a failed element lookup into [`ToggleError::ElementNotFound`].
///
/// # Errors
///
/// Returns `ElementNotFound` carrying `id` when `found` is `None`.
pub fn require<T>(found: Option<T>, id: &str) -> Result<T, ToggleError> {
    found.ok_or_else(|| ToggleError::ElementNotFound { id: id.to_owned() })
}
