//! Controller that runs a [`ToggleCore`] on a real event loop.
//!
//! The core only returns [`Wake`] requests; the controller turns each one
//! into a scheduled task and feeds it back through [`ToggleCore::resume`].
//! State is shared between the activation listener and scheduled tasks via
//! `Rc<RefCell<_>>`; tasks hold a `Weak` so a dropped controller lets pending
//! work fall through.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::scheduler::Scheduler;
use crate::surface::ThemeSurface;
use crate::theme::ThemeState;
use crate::toggle::ToggleCore;
use crate::transition::{Phase, Wake};

/// Something the user activates (the toggle button).
pub trait ActivationSource {
    /// Register `handler` to run on every activation for the page lifetime.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the listener could not be attached.
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ToggleError>;
}

struct Driver<S, T> {
    core: ToggleCore<S>,
    /// Handle for the in-flight transition's next step. Replacing it cancels the old step.
    pending: Option<T>,
}

pub struct ThemeToggleController<S, K: Scheduler> {
    driver: Rc<RefCell<Driver<S, K::Task>>>,
    scheduler: K,
}

impl<S, K: Scheduler + Clone> Clone for ThemeToggleController<S, K> {
    fn clone(&self) -> Self {
        Self { driver: Rc::clone(&self.driver), scheduler: self.scheduler.clone() }
    }
}

impl<S, K> ThemeToggleController<S, K>
where
    S: ThemeSurface + 'static,
    K: Scheduler + Clone + 'static,
    K::Task: 'static,
{
    /// Build an unbound controller. Icons are settled to the initial state.
    pub fn new(surface: S, scheduler: K, config: &ToggleConfig) -> Self {
        let core = ToggleCore::new(surface, config);
        Self { driver: Rc::new(RefCell::new(Driver { core, pending: None })), scheduler }
    }

    /// Build a controller and bind it to `control`.
    ///
    /// # Errors
    ///
    /// Propagates the control's binding error.
    pub fn initialize<C: ActivationSource>(
        control: &C,
        surface: S,
        scheduler: K,
        config: &ToggleConfig,
    ) -> Result<Self, ToggleError> {
        let controller = Self::new(surface, scheduler, config);
        controller.bind(control)?;
        Ok(controller)
    }

    /// Attach the activation listener. There is no unbind.
    ///
    /// # Errors
    ///
    /// Propagates the control's binding error.
    pub fn bind<C: ActivationSource>(&self, control: &C) -> Result<(), ToggleError> {
        let handle = self.clone();
        control.on_activate(Box::new(move || handle.on_activate()))
    }

    /// Toggle the theme, cancelling any transition still in flight.
    pub fn on_activate(&self) {
        let wake = {
            let mut driver = self.driver.borrow_mut();
            driver.pending = None;
            driver.core.activate()
        };
        arm(&self.driver, &self.scheduler, wake);
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.driver.borrow().core.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.driver.borrow().core.phase()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.driver.borrow().core.is_settled()
    }
}

/// Schedule `wake`, chaining each step's follow-up wake when it fires.
fn arm<S, K>(driver: &Rc<RefCell<Driver<S, K::Task>>>, scheduler: &K, wake: Option<Wake>)
where
    S: ThemeSurface + 'static,
    K: Scheduler + Clone + 'static,
    K::Task: 'static,
{
    let Some(wake) = wake else {
        return;
    };

    let weak = Rc::downgrade(driver);
    let next_scheduler = scheduler.clone();
    let task = scheduler.schedule(
        wake.at,
        Box::new(move || {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            let next = driver.borrow_mut().core.resume(wake.id);
            arm(&driver, &next_scheduler, next);
        }),
    );
    driver.borrow_mut().pending = Some(task);
}
