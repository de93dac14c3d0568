// src/messages.rs
//
// Inputs to the tooltip state machine (`Message`) and the side effects it asks
// the executors to perform (`Command`).
//
use crate::models::TooltipConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A trigger that is not currently active was clicked.
    TriggerActivated {
        trigger_id: String,
        config: TooltipConfig,
    },
    /// First deferred step of an open: the dialog may now be inserted.
    InsertDue { generation: u64 },
    /// The executor inserted the dialog markup.
    DialogInserted {
        generation: u64,
        relocated_from: Option<String>,
    },
    /// The trigger vanished before the dialog could be inserted.
    InsertFailed { generation: u64 },
    /// Second deferred step: focus may move into the dialog.
    FocusDue { generation: u64 },
    CloseRequested(CloseReason),
    /// Click outside the dialog while one is open.
    OutsideClick { target_was_active: bool },
    /// Tab / Shift+Tab inside the open dialog.  `position` is the index of
    /// the event target among the dialog's focusable elements.
    TabPressed {
        position: Option<usize>,
        len: usize,
        backwards: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    OutsideClick,
    Escape,
    /// Another trigger was opened.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add the active class to the trigger with this id.
    MarkActive(String),
    ClearActive(String),
    /// Wait for the next paint, then send `InsertDue`.
    ScheduleInsert(u64),
    /// Resolve the body, render the markup and insert it after the trigger.
    InsertDialog {
        generation: u64,
        trigger_id: String,
        config: TooltipConfig,
        focus_back_id: String,
    },
    /// Wait for the next paint, then send `FocusDue`.
    ScheduleFocus(u64),
    /// Focus the redirect target if it resolves, else the close button.
    FocusIntoDialog { redirect_id: Option<String> },
    /// Remove the dialog; hand relocated content back to `restore_to`.
    RemoveDialog { restore_to: Option<String> },
    /// Focus the element with this id, if it exists.
    FocusElement(String),
    /// Focus the n-th focusable element of the event being handled.
    FocusFocusable(usize),
    /// Suppress the default action of the event being handled.
    PreventDefault,
}
