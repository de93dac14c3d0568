use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub mod macros;
pub mod command_executors;
pub mod components;
pub mod config;
pub mod constants; // Markup contract: class names, attributes, fixed ids
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod scheduling;
pub mod state;
pub mod ui;
pub mod update;
pub mod utils;

use crate::config::ControllerConfig;
use crate::constants::GLOBAL_ENTRY_NAME;
use crate::state::with_state_mut;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    // Same callable exposed on the global scope for pages that re-run it
    // after inserting content.
    let global_attach = Closure::wrap(Box::new(move |root: JsValue, enable_listeners: JsValue| {
        let root = root.dyn_into::<Element>().ok();
        let enable_listeners = enable_listeners.as_bool();
        if let Err(e) = attach(root, enable_listeners) {
            web_sys::console::error_1(&format!("Tooltip attach failed: {:?}", e).into());
        }
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_ENTRY_NAME), global_attach.as_ref())?;
    global_attach.forget();

    ui::setup::bootstrap(&document)
}

/// Attach tooltip triggers under `root` (whole document when omitted).
///
/// Pass `enable_listeners = false` when re-attaching dynamically inserted
/// content; listeners are registered at most once either way.
#[wasm_bindgen]
pub fn attach(root: Option<Element>, enable_listeners: Option<bool>) -> Result<usize, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    ui::setup::attach(&document, root.as_ref(), enable_listeners.unwrap_or(true))
}

/// Replace the controller configuration.  Unknown or invalid fields are
/// rejected and the current configuration is kept.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config = ControllerConfig::from_js(options).map_err(|e| JsValue::from_str(&e))?;
    with_state_mut(|s| s.config = config);
    Ok(())
}
