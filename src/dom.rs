//! Thin wrappers over the browser APIs the page relies on. Every
//! subscription type here unregisters itself when dropped.

use std::fmt::Debug;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ResizeObserver, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};
use yew::NodeRef;

use crate::config::HEADER_MARGIN_PX;
use crate::geometry::{scroll_target_top, Rect};

/// Log a failed DOM call. Returns whether it succeeded.
fn report<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not {}: {:?}", action, e);
            false
        }
    }
}

/// A DOM event listener that is removed on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_passive(target, event, false, handler)
    }

    /// Passive listeners promise never to call `preventDefault`, which lets
    /// the browser keep scrolling on the compositor thread.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_passive(target, event, true, handler)
    }

    fn with_passive<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                warn!("Could not listen for '{}': {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        report(&format!("remove '{}' listener", self.event), removed);
    }
}

/// A `ResizeObserver` on one element, disconnected on drop.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    pub fn new<F>(element: &Element, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(handler);
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                warn!("ResizeObserver unavailable: {:?}", e);
                None
            }
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// An `IntersectionObserver` on one element, disconnected on drop.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl IntersectionWatch {
    pub fn new<F>(element: &Element, root_margin: &str, threshold: f64, mut handler: F) -> Option<Self>
    where
        F: FnMut(Vec<IntersectionObserverEntry>) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            handler(entries);
        });
        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn element_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Bounding box of a node that is currently attached to the document.
pub fn rect_of(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>()
        .filter(|element| element.is_connected())
        .map(|element| element_rect(&element))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

fn header_height() -> Option<f64> {
    let header = window()?.document()?.query_selector("header").ok().flatten()?;
    let header = header.dyn_into::<HtmlElement>().ok()?;
    Some(header.offset_height() as f64)
}

/// Smooth-scroll the page so the element with `id` sits just below the
/// sticky header.
pub fn smooth_scroll_to_id(id: &str) {
    let Some(window) = window() else { return };
    let Some(element) = element_by_id(id) else {
        debug!("No #{} on this page, not scrolling", id);
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_target_top(scroll_y, element_rect(&element).top, header_height(), HEADER_MARGIN_PX);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Bring a carousel card to the middle of its strip.
pub fn scroll_into_view_centered(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_inline(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_id_into_view_start(id: &str) {
    let Some(element) = element_by_id(id) else {
        debug!("No #{} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top_instantly() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Hand off to the booking service in a new tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else { return };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        warn!("Could not open {}: {:?}", url, e);
    }
}

/// Publish the header height as `--header-h` for overlays that sit under it.
pub fn publish_header_height(height: i32) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        report(
            "set --header-h",
            root.style().set_property("--header-h", &format!("{}px", height)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::report;

    #[test]
    fn failed_dom_calls_are_reported_not_dropped() {
        assert!(report::<&str>("set --header-h", Ok(())));
        assert!(!report("remove 'scroll' listener", Err("element detached")));
    }
}
