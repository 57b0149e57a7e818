//! Thin web-sys helpers shared by the browser controllers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// First element matching `selector`, if any.
pub fn find(document: &Document, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<Element>() {
            out.push(el);
        }
    }
    Ok(out)
}

/// Set or clear a class marker.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
