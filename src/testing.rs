//! Test doubles: an in-memory page, a virtual-clock scheduler, and a
//! clickable control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::controller::ActivationSource;
use crate::error::ToggleError;
use crate::scheduler::Scheduler;
use crate::surface::{Display, ThemeSurface};
use crate::theme::Icon;
use crate::transition::WakeAt;

// =============================================================
// Surface
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub display: Display,
    pub opacity: f64,
}

#[derive(Debug)]
pub struct Page {
    pub marker: bool,
    pub moon: IconStyle,
    pub sun: IconStyle,
}

impl Page {
    pub fn icon(&self, icon: Icon) -> IconStyle {
        match icon {
            Icon::Moon => self.moon,
            Icon::Sun => self.sun,
        }
    }

    fn icon_mut(&mut self, icon: Icon) -> &mut IconStyle {
        match icon {
            Icon::Moon => &mut self.moon,
            Icon::Sun => &mut self.sun,
        }
    }

    pub fn displayed(&self) -> Vec<Icon> {
        [Icon::Moon, Icon::Sun]
            .into_iter()
            .filter(|icon| self.icon(*icon).display == Display::Block)
            .collect()
    }
}

/// Shared handle to an in-memory page; clones see the same styles.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    page: Rc<RefCell<Page>>,
}

impl RecordingSurface {
    /// Light page as authored: sun shown, moon hidden, no marker.
    pub fn light() -> Self {
        Self::with(false, Display::None, Display::Block)
    }

    /// Page that ships with the marker class already set but light icons.
    pub fn marked_dark() -> Self {
        Self::with(true, Display::None, Display::Block)
    }

    fn with(marker: bool, moon: Display, sun: Display) -> Self {
        Self {
            page: Rc::new(RefCell::new(Page {
                marker,
                moon: IconStyle { display: moon, opacity: 1.0 },
                sun: IconStyle { display: sun, opacity: 1.0 },
            })),
        }
    }

    pub fn marker(&self) -> bool {
        self.page.borrow().marker
    }

    pub fn icon(&self, icon: Icon) -> IconStyle {
        self.page.borrow().icon(icon)
    }

    pub fn displayed(&self) -> Vec<Icon> {
        self.page.borrow().displayed()
    }
}

impl ThemeSurface for RecordingSurface {
    fn marker_present(&self) -> bool {
        self.page.borrow().marker
    }

    fn set_marker(&mut self, present: bool) {
        self.page.borrow_mut().marker = present;
    }

    fn set_display(&mut self, icon: Icon, display: Display) {
        self.page.borrow_mut().icon_mut(icon).display = display;
    }

    fn set_opacity(&mut self, icon: Icon, opacity: f64) {
        self.page.borrow_mut().icon_mut(icon).opacity = opacity;
    }
}

// =============================================================
// Scheduler
// =============================================================

struct Queued {
    due: Option<Duration>,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    seq: u64,
    timers: Vec<Queued>,
    frames: Vec<Queued>,
}

/// Virtual clock. Timers fire from [`ManualScheduler::advance`], frame
/// callbacks from [`ManualScheduler::frame`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Cancels its task when dropped.
pub struct ManualTask {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.iter().filter(|q| !q.cancelled.get()).count()
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.iter().filter(|q| !q.cancelled.get()).count()
    }

    /// Move the clock forward by `by`, firing due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue.timers.retain(|q| !q.cancelled.get());
                let due_idx = queue
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, q)| q.due.is_some_and(|due| due <= target))
                    .min_by_key(|(_, q)| (q.due, q.seq))
                    .map(|(i, _)| i);
                due_idx.map(|i| {
                    let queued = queue.timers.remove(i);
                    if let Some(due) = queued.due {
                        queue.now = due;
                    }
                    queued
                })
            };
            match next {
                Some(queued) => (queued.task)(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }

    /// Run one animation frame: every frame callback queued before this call.
    pub fn frame(&self) {
        let batch = std::mem::take(&mut self.queue.borrow_mut().frames);
        for queued in batch {
            if !queued.cancelled.get() {
                (queued.task)();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn schedule(&self, at: WakeAt, task: Box<dyn FnOnce()>) -> ManualTask {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        queue.seq += 1;
        let seq = queue.seq;
        match at {
            WakeAt::After(delay) => {
                let due = Some(queue.now + delay);
                queue.timers.push(Queued { due, seq, cancelled: Rc::clone(&cancelled), task });
            }
            WakeAt::NextFrame => {
                queue.frames.push(Queued { due: None, seq, cancelled: Rc::clone(&cancelled), task });
            }
        }
        ManualTask { cancelled }
    }
}

// =============================================================
// Control
// =============================================================

/// A control whose listeners run when the test calls [`FakeControl::click`].
#[derive(Clone, Default)]
pub struct FakeControl {
    handlers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
}

impl FakeControl {
    pub fn click(&self) {
        let mut handlers = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in &mut handlers {
            handler();
        }
        let mut current = self.handlers.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ActivationSource for FakeControl {
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ToggleError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}
