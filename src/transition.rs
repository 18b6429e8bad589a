//! Crossfade phases and the wake requests that advance them.
//!
//! An animated toggle walks `Idle -> FadingOut -> SwappedHidden -> FadingIn -> Idle`.
//! Each non-idle phase carries the [`TransitionId`] of the toggle that started
//! it. Deferred work is requested as a [`Wake`] tagged with the same id; a wake
//! whose id no longer matches the current phase belongs to a superseded
//! transition and is dropped.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::time::Duration;

use crate::theme::ThemeState;

/// Identifies one toggle's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TransitionId(pub u64);

impl TransitionId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// When the host should resume the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeAt {
    /// After a fixed delay.
    After(Duration),
    /// On the next animation frame.
    NextFrame,
}

/// A request to call back into the core for transition `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake {
    pub id: TransitionId,
    pub at: WakeAt,
}

/// Where the icon crossfade currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Icons match the logical state; nothing is pending.
    #[default]
    Idle,
    /// Outgoing icon is at opacity 0 but still displayed.
    FadingOut { id: TransitionId, target: ThemeState },
    /// Outgoing icon hidden, incoming displayed at opacity 0.
    SwappedHidden { id: TransitionId, target: ThemeState },
    /// Incoming icon set to opacity 1; settles on the next frame.
    FadingIn { id: TransitionId, target: ThemeState },
}

impl Phase {
    /// Id of the in-flight transition, if any.
    #[must_use]
    pub fn id(self) -> Option<TransitionId> {
        match self {
            Self::Idle => None,
            Self::FadingOut { id, .. } | Self::SwappedHidden { id, .. } | Self::FadingIn { id, .. } => Some(id),
        }
    }

    /// State the in-flight transition is heading to, if any.
    #[must_use]
    pub fn target(self) -> Option<ThemeState> {
        match self {
            Self::Idle => None,
            Self::FadingOut { target, .. } | Self::SwappedHidden { target, .. } | Self::FadingIn { target, .. } => {
                Some(target)
            }
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Whether a wake for `id` belongs to this phase's transition.
    #[must_use]
    pub fn accepts(self, id: TransitionId) -> bool {
        self.id() == Some(id)
    }

    /// The phase after this one's wake fires, with the wake it needs next.
    ///
    /// `Idle` has no successor.
    #[must_use]
    pub fn advance(self) -> (Self, Option<WakeAt>) {
        match self {
            Self::Idle => (Self::Idle, None),
            Self::FadingOut { id, target } => (Self::SwappedHidden { id, target }, Some(WakeAt::NextFrame)),
            Self::SwappedHidden { id, target } => (Self::FadingIn { id, target }, Some(WakeAt::NextFrame)),
            Self::FadingIn { .. } => (Self::Idle, None),
        }
    }
}
