//! Attach – discover triggers, identify and wrap them, and (optionally)
//! register the document-level listeners.
//!
//! Safe to call repeatedly, e.g. after inserting new content: triggers that
//! were already processed carry `data-tooltip-attached` and are skipped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, NodeList};

use crate::config::ControllerConfig;
use crate::constants::{ATTACHED_MARKER_ATTR, WRAPPER_CLASS_SUFFIX};
use crate::debug_log;
use crate::dom_utils::{self, wrap_outside};
use crate::models::TooltipConfig;
use crate::state::{with_state, with_state_mut};
use crate::ui::events;
use crate::utils::generate_trigger_id;

/// Attach every trigger under `root` (the whole document when `None`).
///
/// Returns the number of newly attached triggers.
pub fn attach(document: &Document, root: Option<&Element>, enable_listeners: bool) -> Result<usize, JsValue> {
    let selector = with_state(|s| s.config.trigger_selector());
    let found: NodeList = match root {
        Some(root) => root.query_selector_all(&selector)?,
        None => document.query_selector_all(&selector)?,
    };

    let mut attached = 0;
    for i in 0..found.length() {
        let Some(trigger) = found.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if trigger.has_attribute(ATTACHED_MARKER_ATTR) {
            continue;
        }
        attach_trigger(document, &trigger)?;
        attached += 1;
    }

    if enable_listeners {
        events::register_listeners(document)?;
    }

    debug_log!("tooltip attach: {} new trigger(s)", attached);
    Ok(attached)
}

fn attach_trigger(document: &Document, trigger: &Element) -> Result<(), JsValue> {
    let trigger_id = assign_trigger_id(trigger);
    let tooltip = TooltipConfig::from_element(trigger);
    for warning in tooltip.warnings() {
        web_sys::console::warn_1(&format!("Tooltip trigger #{}: {}", trigger_id, warning).into());
    }

    let wrapper_tag = with_state(|s| s.config.wrapper_tag.clone());
    let wrapper = document.create_element(&wrapper_tag)?;
    wrapper.set_class_name(&format!("{}{}", tooltip.prefix_class, WRAPPER_CLASS_SUFFIX));
    wrap_outside(trigger, &wrapper)?;
    trigger.set_attribute(ATTACHED_MARKER_ATTR, "true")?;

    with_state_mut(|s| s.triggers.insert(trigger_id, tooltip));
    Ok(())
}

/// Give `trigger` a freshly generated id and return it.
pub fn assign_trigger_id(trigger: &Element) -> String {
    let id = with_state_mut(|s| {
        let sequence = s.next_sequence();
        generate_trigger_id(s.config.id_scheme, &s.config.id_prefix, sequence, &mut rand::thread_rng())
    });
    trigger.set_id(&id);
    id
}

/// Module start: apply the inline config and attach once the document is
/// ready (immediately when it already is).
pub fn bootstrap(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return on_ready(document);
    }

    let cb = Closure::once_into_js(move || {
        if let Some(document) = dom_utils::document() {
            if let Err(e) = on_ready(&document) {
                web_sys::console::error_1(&format!("Tooltip bootstrap failed: {:?}", e).into());
            }
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

fn on_ready(document: &Document) -> Result<(), JsValue> {
    match ControllerConfig::from_document(document) {
        Ok(Some(config)) => with_state_mut(|s| s.config = config),
        Ok(None) => {}
        Err(e) => web_sys::console::warn_1(&format!("{}, keeping defaults", e).into()),
    }
    attach(document, None, true).map(|_| ())
}
