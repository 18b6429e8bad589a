//! Deferred task scheduling.
//!
//! The browser has two suspension points the crossfade needs: a fixed-delay
//! timer and "run on the next animation frame". A `Scheduler` hands back a
//! task handle for each; dropping the handle cancels the task if it has not
//! run yet. The controller keeps one handle per in-flight transition, so
//! replacing it is how a new toggle cancels the old one.

use crate::transition::WakeAt;

pub trait Scheduler {
    /// Handle to a scheduled task. Dropping it cancels a task that has not run.
    type Task;

    /// Run `task` once at `at`.
    fn schedule(&self, at: WakeAt, task: Box<dyn FnOnce()>) -> Self::Task;
}
