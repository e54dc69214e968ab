//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::error::SetupError;

/// Get the browser window object.
#[inline]
pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

/// Get the window's document.
#[inline]
pub fn document(window: &Window) -> Result<Document, SetupError> {
    window.document().ok_or(SetupError::NoDocument)
}

/// Find an element by id.
pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, SetupError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SetupError::MissingElement(id))
}

/// Find the first element matching a selector.
pub fn query(document: &Document, selector: &'static str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(SetupError::MissingElement(selector))
}

/// Collect every element matching a selector, in document order.
///
/// An invalid selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Collect matching descendants of an element.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

#[inline]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

// =============================================================================
// Geometry
// =============================================================================

/// Current vertical scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn inner_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Viewport width in CSS pixels.
pub fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Top of an element relative to the document (`offsetTop`).
pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
        .unwrap_or(0.0)
}

/// Rendered height of an element (`offsetHeight`).
pub fn offset_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Smoothly scroll the window to a vertical offset.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// =============================================================================
// Capabilities
// =============================================================================

/// Whether the browser exposes `IntersectionObserver`.
pub fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

// =============================================================================
// Events
// =============================================================================

/// Attach an event listener for the lifetime of the page.
///
/// The closure is intentionally leaked using `forget()`; listeners are
/// never removed.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
