//! The theme toggle state machine.
//!
//! DESIGN
//! ======
//! `ToggleCore` owns the logical [`ThemeState`] and the crossfade [`Phase`].
//! It mutates the page only through a [`ThemeSurface`] and never schedules
//! anything itself: steps that must wait return a [`Wake`], and the host
//! calls [`ToggleCore::resume`] with the wake's id when it fires. The logical
//! state is flipped immediately on activation; the icons catch up as the
//! phase advances.
//!
//! A second activation while a crossfade is in flight supersedes it. The
//! icons snap to the settled look of the current state (the interrupted
//! transition's target) and a fresh transition starts from there with a new
//! id, so wakes from the old transition no longer match and are ignored.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use std::time::Duration;

use crate::config::{ToggleConfig, Variant};
use crate::consts::{OPACITY_HIDDEN, OPACITY_VISIBLE};
use crate::surface::{Display, ThemeSurface};
use crate::theme::ThemeState;
use crate::transition::{Phase, TransitionId, Wake, WakeAt};

pub struct ToggleCore<S> {
    surface: S,
    state: ThemeState,
    phase: Phase,
    variant: Variant,
    fade_out: Duration,
    last_id: TransitionId,
}

impl<S: ThemeSurface> ToggleCore<S> {
    /// Take the initial state from the root marker and settle the icons to match.
    pub fn new(surface: S, config: &ToggleConfig) -> Self {
        let state = ThemeState::from_marker(surface.marker_present());
        let mut core = Self {
            surface,
            state,
            phase: Phase::Idle,
            variant: config.variant,
            fade_out: config.fade_out(),
            last_id: TransitionId::default(),
        };
        core.settle_icons(state);
        log::debug!("theme toggle ready: state={state:?} variant={:?}", core.variant);
        core
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True when no transition is in flight and the icons match the state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase.is_idle()
    }

    // --- Inputs ---

    /// Flip the theme and start updating the icons.
    ///
    /// Returns the wake the host must schedule, if the variant defers work.
    pub fn activate(&mut self) -> Option<Wake> {
        if let (Some(id), Some(target)) = (self.phase.id(), self.phase.target()) {
            log::debug!("superseding transition {}", id.0);
            self.settle_icons(target);
            self.phase = Phase::Idle;
        }

        let next = self.state.toggled();
        self.state = next;
        self.surface.set_marker(next.is_dark());
        log::debug!("theme toggled to {next:?}");

        self.update_icons()
    }

    /// Switch the displayed icon toward the current state.
    ///
    /// The instant variant finishes here. The animated variant fades the
    /// outgoing icon and asks to be resumed after the fade-out delay.
    fn update_icons(&mut self) -> Option<Wake> {
        let new_state = self.state;
        let incoming = new_state.icon();
        let outgoing = incoming.other();

        match self.variant {
            Variant::Instant => {
                self.surface.set_display(outgoing, Display::None);
                self.surface.set_display(incoming, Display::Block);
                None
            }
            Variant::Animated => {
                self.surface.set_opacity(outgoing, OPACITY_HIDDEN);
                let id = self.last_id.next();
                self.last_id = id;
                self.phase = Phase::FadingOut { id, target: new_state };
                Some(Wake { id, at: WakeAt::After(self.fade_out) })
            }
        }
    }

    /// Advance transition `id` by one step.
    ///
    /// Wakes for a transition that has been superseded or already settled
    /// are ignored.
    pub fn resume(&mut self, id: TransitionId) -> Option<Wake> {
        if !self.phase.accepts(id) {
            log::trace!("ignoring stale wake for transition {}", id.0);
            return None;
        }

        let (next, at) = self.phase.advance();
        match next {
            Phase::SwappedHidden { target, .. } => {
                let incoming = target.icon();
                self.surface.set_display(incoming.other(), Display::None);
                self.surface.set_opacity(incoming, OPACITY_HIDDEN);
                self.surface.set_display(incoming, Display::Block);
            }
            Phase::FadingIn { target, .. } => {
                self.surface.set_opacity(target.icon(), OPACITY_VISIBLE);
            }
            Phase::Idle => log::debug!("transition {} settled", id.0),
            Phase::FadingOut { .. } => {}
        }
        self.phase = next;

        at.map(|at| Wake { id, at })
    }

    /// Show only the icon for `state`, fully opaque.
    fn settle_icons(&mut self, state: ThemeState) {
        let visible = state.icon();
        self.surface.set_display(visible.other(), Display::None);
        self.surface.set_opacity(visible, OPACITY_VISIBLE);
        self.surface.set_display(visible, Display::Block);
    }
}
