//! Browser binding: web-sys surface, timer/frame scheduler, click listener,
//! and the wasm entry points.
//!
//! Everything here needs a real `window`; the logic it drives lives in
//! [`crate::toggle`] and is tested natively.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{RootElement, ToggleConfig};
use crate::controller::{ActivationSource, ThemeToggleController};
use crate::error::{ToggleError, require};
use crate::scheduler::Scheduler;
use crate::surface::{Display, ThemeSurface, opacity_css};
use crate::theme::Icon;
use crate::transition::WakeAt;

fn dom_error(err: JsValue) -> ToggleError {
    ToggleError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// =============================================================
// Surface
// =============================================================

/// The root element and icon pair of the live page.
pub struct DomSurface {
    root: Element,
    moon: HtmlElement,
    sun: HtmlElement,
    marker_class: String,
}

impl DomSurface {
    /// Look up the root and both icons.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` for the first element that is missing.
    pub fn resolve(document: &Document, config: &ToggleConfig) -> Result<Self, ToggleError> {
        let root = match config.root {
            RootElement::Body => require(document.body().map(Element::from), "body")?,
            RootElement::Html => require(document.document_element(), "html")?,
        };
        let moon = icon_element(document, &config.moon_id)?;
        let sun = icon_element(document, &config.sun_id)?;
        Ok(Self { root, moon, sun, marker_class: config.marker_class.clone() })
    }

    fn icon(&self, icon: Icon) -> &HtmlElement {
        match icon {
            Icon::Moon => &self.moon,
            Icon::Sun => &self.sun,
        }
    }

    fn set_style(&self, icon: Icon, property: &str, value: &str) {
        if let Err(err) = self.icon(icon).style().set_property(property, value) {
            log::warn!("failed to set {property} on {icon:?} icon: {err:?}");
        }
    }
}

/// Icons may be `<svg>`; those carry the same inline `style` object as HTML elements.
fn icon_element(document: &Document, id: &str) -> Result<HtmlElement, ToggleError> {
    let element = require(document.get_element_by_id(id), id)?;
    Ok(element.unchecked_into::<HtmlElement>())
}

impl ThemeSurface for DomSurface {
    fn marker_present(&self) -> bool {
        self.root.class_list().contains(&self.marker_class)
    }

    fn set_marker(&mut self, present: bool) {
        let class_list = self.root.class_list();
        let result = if present {
            class_list.add_1(&self.marker_class)
        } else {
            class_list.remove_1(&self.marker_class)
        };
        if let Err(err) = result {
            log::warn!("failed to update .{} on root: {err:?}", self.marker_class);
        }
    }

    fn set_display(&mut self, icon: Icon, display: Display) {
        self.set_style(icon, "display", display.as_css());
    }

    fn set_opacity(&mut self, icon: Icon, opacity: f64) {
        self.set_style(icon, "opacity", &opacity_css(opacity));
    }
}

// =============================================================
// Scheduler
// =============================================================

/// Schedules on `setTimeout` and `requestAnimationFrame`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// A pending timeout or animation frame. Dropping it cancels the callback.
pub enum BrowserTask {
    Timeout(Timeout),
    Frame(AnimationFrame),
}

pub struct AnimationFrame {
    handle: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.handle);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn schedule(&self, at: WakeAt, task: Box<dyn FnOnce()>) -> BrowserTask {
        match at {
            WakeAt::After(delay) => {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                BrowserTask::Timeout(Timeout::new(millis, task))
            }
            WakeAt::NextFrame => request_frame(task),
        }
    }
}

type TaskSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Run the slot's task if nobody has taken it yet.
fn run_slot(slot: &TaskSlot) {
    let task = slot.borrow_mut().take();
    if let Some(task) = task {
        task();
    }
}

fn timeout_now(slot: TaskSlot) -> BrowserTask {
    BrowserTask::Timeout(Timeout::new(0, move || run_slot(&slot)))
}

/// Run `task` on the next animation frame, or on a zero-delay timeout if
/// frames are unavailable. The task never runs synchronously.
fn request_frame(task: Box<dyn FnOnce()>) -> BrowserTask {
    let slot: TaskSlot = Rc::new(RefCell::new(Some(task)));
    let Some(window) = web_sys::window() else {
        return timeout_now(slot);
    };

    let slot_for_cb = Rc::clone(&slot);
    let callback = Closure::once(move |_ts: f64| run_slot(&slot_for_cb));

    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => BrowserTask::Frame(AnimationFrame { handle, _callback: callback }),
        Err(err) => {
            log::warn!("requestAnimationFrame failed, falling back to timeout: {err:?}");
            timeout_now(slot)
        }
    }
}

// =============================================================
// Control
// =============================================================

impl ActivationSource for Element {
    fn on_activate(&self, mut handler: Box<dyn FnMut()>) -> Result<(), ToggleError> {
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        self.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // Bound for the page lifetime.
        listener.forget();
        Ok(())
    }
}

// =============================================================
// Entry points
// =============================================================

pub type DomController = ThemeToggleController<DomSurface, BrowserScheduler>;

/// Resolve the page elements named by `config` and bind the toggle.
///
/// # Errors
///
/// Returns `NoDocument` outside a browser, `ElementNotFound` if any element
/// is missing, or `Dom` if the click listener cannot be attached. Nothing is
/// bound on error.
pub fn mount(config: &ToggleConfig) -> Result<DomController, ToggleError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ToggleError::NoDocument)?;
    let control = require(document.get_element_by_id(&config.control_id), &config.control_id)?;
    let surface = DomSurface::resolve(&document, config)?;
    let controller = ThemeToggleController::initialize(&control, surface, BrowserScheduler, config)?;
    log::info!("theme toggle bound to #{} ({:?})", config.control_id, config.variant);
    Ok(controller)
}

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// JS handle to a mounted toggle.
#[wasm_bindgen]
pub struct ThemeToggle {
    controller: DomController,
}

#[wasm_bindgen]
impl ThemeToggle {
    /// Mount with an optional JSON config; omitted fields use the defaults.
    ///
    /// # Errors
    ///
    /// Throws the [`ToggleError`] message if the config is invalid or the
    /// page is missing an element.
    pub fn mount(config_json: Option<String>) -> Result<ThemeToggle, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => ToggleConfig::from_json(raw),
            None => Ok(ToggleConfig::default()),
        };
        config
            .and_then(|config| mount(&config))
            .map(|controller| Self { controller })
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Toggle as if the control were clicked.
    pub fn toggle(&self) {
        self.controller.on_activate();
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.controller.state().is_dark()
    }
}
