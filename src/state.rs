use std::cell::RefCell;
use std::collections::HashMap;

use crate::command_executors::{execute, EventContext};
use crate::config::ControllerConfig;
use crate::messages::Message;
use crate::models::TooltipConfig;
use crate::update::update;

/// The single open (or opening) dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialog {
    pub generation: u64,
    pub trigger_id: String,
    pub config: TooltipConfig,
    /// Id focused again when the dialog closes.
    pub focus_back_id: String,
    /// False while the deferred insertion is still pending.
    pub inserted: bool,
    /// Content element whose markup now lives inside the dialog.
    pub relocated_from: Option<String>,
}

#[derive(Debug, Default)]
pub struct TooltipState {
    pub config: ControllerConfig,
    /// At most one dialog exists at any time.
    pub open: Option<OpenDialog>,
    /// Bumped on every open; deferred steps of older opens are dropped.
    pub generation: u64,
    pub listeners_attached: bool,
    /// Last number handed out by the sequential id scheme.
    pub sequence: u32,
    /// Trigger configs parsed at attach time, keyed by trigger id.
    pub triggers: HashMap<String, TooltipConfig>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Whether `trigger_id` belongs to the open dialog.
    pub fn is_active(&self, trigger_id: &str) -> bool {
        self.open.as_ref().is_some_and(|o| o.trigger_id == trigger_id)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open dialog whose markup is in the page.
    pub fn inserted(&self) -> Option<&OpenDialog> {
        self.open.as_ref().filter(|o| o.inserted)
    }

    pub fn next_sequence(&mut self) -> u32 {
        self.sequence += 1;
        self.sequence
    }
}

// All tooltip state lives on the UI thread.
thread_local! {
    pub static TOOLTIP_STATE: RefCell<TooltipState> = RefCell::new(TooltipState::new());
}

/// Run `msg` through the state machine, then execute the resulting commands.
///
/// The state borrow is released before any command runs, so executors may
/// dispatch follow-up messages.
pub fn dispatch(msg: Message) {
    dispatch_with(msg, &EventContext::default());
}

pub fn dispatch_with(msg: Message, ctx: &EventContext<'_>) {
    crate::debug_log!("tooltip: {:?}", msg);
    let commands = TOOLTIP_STATE.with(|state| update(&mut state.borrow_mut(), msg));
    for cmd in commands {
        execute(cmd, ctx);
    }
}

/// Read a value out of the state without holding the borrow.
pub fn with_state<R>(f: impl FnOnce(&TooltipState) -> R) -> R {
    TOOLTIP_STATE.with(|state| f(&state.borrow()))
}

pub fn with_state_mut<R>(f: impl FnOnce(&mut TooltipState) -> R) -> R {
    TOOLTIP_STATE.with(|state| f(&mut state.borrow_mut()))
}
