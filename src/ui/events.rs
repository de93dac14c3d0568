//! Document-level event handlers.
//!
//! One capturing `click` and one capturing `keydown` listener on `<body>`
//! serve every trigger on the page, including triggers attached later.  The
//! handlers only translate DOM events into `Message`s; all decisions are made
//! in `update`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MouseEvent, Node};

use crate::command_executors::EventContext;
use crate::constants::{CLOSE_BUTTON_JS_CLASS, DIALOG_ID, DIALOG_JS_CLASS};
use crate::dom_utils::{self, closest_with_class, focusable_elements};
use crate::messages::{CloseReason, Message};
use crate::models::TooltipConfig;
use crate::state::{dispatch, dispatch_with, with_state, with_state_mut};
use crate::ui::setup::assign_trigger_id;

/// Register the listeners unless a previous call already did.
pub fn register_listeners(document: &Document) -> Result<(), JsValue> {
    if with_state(|s| s.listeners_attached) {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        on_click(&e);
    }));
    body.add_event_listener_with_callback_and_bool("click", click.as_ref().unchecked_ref(), true)?;
    click.forget();

    let keydown = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        if let Err(err) = on_keydown(&e) {
            web_sys::console::error_1(&format!("Tooltip keydown handler failed: {:?}", err).into());
        }
    }));
    body.add_event_listener_with_callback_and_bool("keydown", keydown.as_ref().unchecked_ref(), true)?;
    keydown.forget();

    with_state_mut(|s| s.listeners_attached = true);
    Ok(())
}

fn on_click(e: &MouseEvent) {
    let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let event: &Event = e.as_ref();
    let ctx = EventContext { event: Some(event), ..EventContext::default() };
    let marker_class = with_state(|s| s.config.marker_class.clone());

    // Click on (or inside) a trigger that is not open yet.
    let trigger = closest_with_class(&target, &marker_class);
    let trigger_id = trigger.as_ref().map(|t| match t.id() {
        id if id.is_empty() => assign_trigger_id(t),
        id => id,
    });
    if let (Some(trigger), Some(trigger_id)) = (&trigger, &trigger_id) {
        if !with_state(|s| s.is_active(trigger_id)) {
            let config = with_state(|s| s.triggers.get(trigger_id).cloned())
                .unwrap_or_else(|| TooltipConfig::from_element(trigger));
            dispatch_with(
                Message::TriggerActivated { trigger_id: trigger_id.clone(), config },
                &ctx,
            );
            return;
        }
    }

    if !with_state(|s| s.is_open()) {
        return;
    }

    // Close button, or anything inside it (label span, image).
    if closest_with_class(&target, CLOSE_BUTTON_JS_CLASS).is_some() {
        dispatch(Message::CloseRequested(CloseReason::CloseButton));
        return;
    }

    if closest_with_class(&target, DIALOG_JS_CLASS).is_none() {
        // Only the clicked element itself counts, not a trigger around it.
        let target_id = target.id();
        let target_was_active = with_state(|s| s.is_active(&target_id));
        dispatch_with(Message::OutsideClick { target_was_active }, &ctx);
    }
}

fn on_keydown(e: &KeyboardEvent) -> Result<(), JsValue> {
    if !with_state(|s| s.is_open()) {
        return Ok(());
    }

    match e.key().as_str() {
        "Escape" | "Esc" => dispatch(Message::CloseRequested(CloseReason::Escape)),
        "Tab" => {
            let Some(document) = dom_utils::document() else {
                return Ok(());
            };
            let Some(dialog) = document.get_element_by_id(DIALOG_ID) else {
                return Ok(());
            };
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return Ok(());
            };

            let focusables = focusable_elements(&dialog)?;
            let position = focusables.iter().position(|f| f.is_same_node(Some(&target)));
            let event: &Event = e.as_ref();
            dispatch_with(
                Message::TabPressed {
                    position,
                    len: focusables.len(),
                    backwards: e.shift_key(),
                },
                &EventContext { event: Some(event), focusables: &focusables },
            );
        }
        _ => {}
    }
    Ok(())
}
