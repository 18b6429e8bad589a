//! Dark mode toggle with a moon/sun icon crossfade.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It binds a
//! click listener to a control element, flips the page between light and dark
//! by toggling a marker class on the root element, and swaps a pair of icon
//! elements either instantly or with a short fade. All theme logic lives in
//! [`toggle::ToggleCore`], which only talks to the page through the
//! [`surface::ThemeSurface`] trait and so runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `ThemeState` and the icon each state shows |
//! | [`transition`] | Crossfade phases, transition ids, wake requests |
//! | [`surface`] | Page mutations the core needs (marker class, icon styles) |
//! | [`scheduler`] | Cancellable deferred tasks (timers, animation frames) |
//! | [`toggle`] | Testable [`toggle::ToggleCore`] state machine |
//! | [`controller`] | [`controller::ThemeToggleController`], core + scheduler |
//! | [`config`] | Element ids, marker class, variant, timing |
//! | [`consts`] | Defaults shared by config and the browser layer |
//! | [`error`] | [`error::ToggleError`] |
//! | `dom` | web-sys surface, scheduler and wasm exports (feature `browser`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod toggle;
pub mod transition;

#[cfg(feature = "browser")]
pub mod dom;

#[cfg(test)]
mod testing;

pub use config::{RootElement, ToggleConfig, Variant};
pub use controller::ThemeToggleController;
pub use error::ToggleError;
pub use theme::{Icon, ThemeState};
