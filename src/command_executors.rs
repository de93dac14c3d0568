use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

use crate::components::dialog::{insert_after, remove_dialog, render_dialog, resolve_body, DialogBody};
use crate::constants::CLOSE_BUTTON_ID;
use crate::debug_log;
use crate::dom_utils::{self, add_class, find_by_id, focus, focus_by_id, remove_class};
use crate::messages::{Command, Message};
use crate::scheduling::next_paint;
use crate::state::{dispatch, with_state};

// Triggers currently carrying the active class, by the id they had when
// marked.  Clearing goes through the stored element so a trigger renamed
// while its dialog is open still loses the class.
thread_local! {
    static MARKED_TRIGGERS: RefCell<Vec<(String, Element)>> = RefCell::new(Vec::new());
}

/// What the event currently being handled exposes to the executors.
#[derive(Default)]
pub struct EventContext<'a> {
    pub event: Option<&'a Event>,
    /// Focusable elements of the open dialog, computed for this keystroke.
    pub focusables: &'a [Element],
}

pub fn execute(cmd: Command, ctx: &EventContext<'_>) {
    if let Err(e) = try_execute(cmd, ctx) {
        web_sys::console::error_1(&format!("Tooltip command failed: {:?}", e).into());
    }
}

fn try_execute(cmd: Command, ctx: &EventContext<'_>) -> Result<(), JsValue> {
    match cmd {
        Command::MarkActive(trigger_id) => {
            let active_class = with_state(|s| s.config.active_class.clone());
            if let Some(trigger) = by_id(&trigger_id) {
                add_class(&trigger, &active_class);
                MARKED_TRIGGERS.with(|marked| marked.borrow_mut().push((trigger_id, trigger)));
            }
        }
        Command::ClearActive(trigger_id) => {
            let active_class = with_state(|s| s.config.active_class.clone());
            let stored = MARKED_TRIGGERS.with(|marked| {
                let mut marked = marked.borrow_mut();
                let index = marked.iter().position(|(id, _)| *id == trigger_id)?;
                Some(marked.swap_remove(index).1)
            });
            if let Some(trigger) = stored.or_else(|| by_id(&trigger_id)) {
                remove_class(&trigger, &active_class);
            }
        }
        Command::ScheduleInsert(generation) => {
            wasm_bindgen_futures::spawn_local(async move {
                next_paint().await;
                dispatch(Message::InsertDue { generation });
            });
        }
        Command::InsertDialog { generation, trigger_id, config, focus_back_id } => {
            let Some(document) = dom_utils::document() else {
                return Ok(());
            };
            let Some(trigger) = find_by_id(&document, &trigger_id) else {
                debug_log!("trigger {} left the page before its tooltip opened", trigger_id);
                dispatch(Message::InsertFailed { generation });
                return Ok(());
            };

            let body = resolve_body(&document, &config);
            let markup = render_dialog(&config, &focus_back_id, &body);
            if let Err(e) = insert_after(&trigger, &markup) {
                // Hand relocated content straight back so nothing is lost.
                if let DialogBody::Relocated { source_id, html } = &body {
                    if let Some(source) = find_by_id(&document, source_id) {
                        source.set_inner_html(html);
                    }
                }
                dispatch(Message::InsertFailed { generation });
                return Err(e);
            }
            dispatch(Message::DialogInserted {
                generation,
                relocated_from: body.source_id().map(str::to_string),
            });
        }
        Command::ScheduleFocus(generation) => {
            wasm_bindgen_futures::spawn_local(async move {
                next_paint().await;
                dispatch(Message::FocusDue { generation });
            });
        }
        Command::FocusIntoDialog { redirect_id } => {
            let Some(document) = dom_utils::document() else {
                return Ok(());
            };
            let redirected = redirect_id
                .as_deref()
                .map(|id| focus_by_id(&document, id))
                .unwrap_or(false);
            if !redirected {
                focus_by_id(&document, CLOSE_BUTTON_ID);
            }
        }
        Command::RemoveDialog { restore_to } => {
            let Some(document) = dom_utils::document() else {
                return Ok(());
            };
            let content = remove_dialog(&document)?;
            if let (Some(source_id), Some(html)) = (restore_to, content) {
                if let Some(source) = find_by_id(&document, &source_id) {
                    source.set_inner_html(&html);
                }
            }
        }
        Command::FocusElement(id) => {
            if let Some(document) = dom_utils::document() {
                focus_by_id(&document, &id);
            }
        }
        Command::FocusFocusable(index) => {
            if let Some(el) = ctx.focusables.get(index) {
                focus(el);
            }
        }
        Command::PreventDefault => {
            if let Some(event) = ctx.event {
                event.prevent_default();
            }
        }
    }
    Ok(())
}

fn by_id(id: &str) -> Option<Element> {
    dom_utils::document().and_then(|d| find_by_id(&d, id))
}
