use js_sys::Array;
use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::error::UiError;

fn document() -> Result<Document, UiError> {
    web_sys::window()
        .ok_or(UiError::BrowserUnavailable("window"))?
        .document()
        .ok_or(UiError::BrowserUnavailable("document"))
}

pub fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementMissing(id.to_string()))
}

/// Smooth-scrolls the section with the given id to the top of the viewport.
pub fn scroll_to_section(id: &str) -> Result<(), UiError> {
    let target = element_by_id(id)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Stops the page behind an open modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) -> Result<(), UiError> {
    let body: HtmlElement = document()?
        .body()
        .ok_or_else(|| UiError::ElementMissing("body".to_string()))?;
    let value = if locked { "hidden" } else { "" };
    body.style()
        .set_property("overflow", value)
        .map_err(|_| UiError::BrowserUnavailable("style"))
}

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Blocks that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".feature-item, .category-item, .event-card";
pub const REVEAL_CLASS: &str = "fade-in-up";

/// Adds [`REVEAL_CLASS`] to observed elements once at least a tenth of
/// them is visible. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array)>,
}

impl RevealObserver {
    pub fn new() -> Result<Self, UiError> {
        let on_intersect = Closure::<dyn FnMut(Array)>::new(|entries: Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    if let Err(e) = entry.target().class_list().add_1(REVEAL_CLASS) {
                        debug!("Could not mark element revealed: {:?}", e);
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .map_err(|_| UiError::BrowserUnavailable("IntersectionObserver"))?;

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }

    /// Watches every element currently matching [`REVEAL_SELECTOR`].
    /// Elements already watched are unaffected.
    pub fn observe_page(&self) -> Result<(), UiError> {
        let nodes = document()?
            .query_selector_all(REVEAL_SELECTOR)
            .map_err(|_| UiError::BrowserUnavailable("querySelectorAll"))?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.observer.observe(&element);
            }
        }
        Ok(())
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Logs a UI failure instead of propagating it.
pub fn log_ui_error(context: &str, result: Result<(), UiError>) {
    if let Err(e) = result {
        error!("{}: {}", context, e);
    }
}
