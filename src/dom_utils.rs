//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Lookups return `Option` and callers skip the dependent step when an element
//! is missing; nothing here panics on an absent node.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::constants::FOCUSABLE_ELEMENTS;

/// Current document, if running inside a window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `getElementById` that tolerates empty ids.
pub fn find_by_id(document: &Document, id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document.get_element_by_id(id)
}

/// Insert `wrapper` where `el` sits and move `el` inside it.
pub fn wrap_outside(el: &Element, wrapper: &Element) -> Result<(), JsValue> {
    let node: &Node = el;
    if let Some(parent) = node.parent_node() {
        parent.insert_before(wrapper, Some(node))?;
    }
    wrapper.append_child(el)?;
    Ok(())
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Nearest inclusive ancestor of `el` carrying `class`.
pub fn closest_with_class(el: &Element, class: &str) -> Option<Element> {
    el.closest(&format!(".{}", class)).ok().flatten()
}

/// Focus an element if it is focusable HTML.  Returns whether focus moved.
pub fn focus(el: &Element) -> bool {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.focus().is_ok(),
        None => false,
    }
}

/// Focus the element with `id`; silently skipped when it does not exist.
pub fn focus_by_id(document: &Document, id: &str) -> bool {
    find_by_id(document, id).map(|el| focus(&el)).unwrap_or(false)
}

/// All focusable descendants of `container`, in document order.
///
/// Computed fresh on every call – the dialog content may change while open.
pub fn focusable_elements(container: &Element) -> Result<Vec<Element>, JsValue> {
    let list = container.query_selector_all(FOCUSABLE_ELEMENTS)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}
