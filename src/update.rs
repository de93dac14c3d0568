// src/update.rs
//
// The tooltip state machine.  `update` only touches `TooltipState` and returns
// the DOM work as `Command`s; `command_executors` carries them out.
//
use crate::messages::{Command, Message};
use crate::state::{OpenDialog, TooltipState};

pub fn update(state: &mut TooltipState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::TriggerActivated { trigger_id, config } => {
            if state.is_active(&trigger_id) {
                return commands;
            }
            if let Some(previous) = state.open.take() {
                close_commands(previous, &mut commands);
            }

            state.generation += 1;
            let generation = state.generation;
            state.open = Some(OpenDialog {
                generation,
                trigger_id: trigger_id.clone(),
                config,
                focus_back_id: trigger_id.clone(),
                inserted: false,
                relocated_from: None,
            });

            commands.push(Command::ScheduleInsert(generation));
            commands.push(Command::MarkActive(trigger_id));
            commands.push(Command::PreventDefault);
        }

        Message::InsertDue { generation } => {
            if let Some(open) = current(state, generation) {
                if !open.inserted {
                    commands.push(Command::InsertDialog {
                        generation,
                        trigger_id: open.trigger_id.clone(),
                        config: open.config.clone(),
                        focus_back_id: open.focus_back_id.clone(),
                    });
                }
            }
        }

        Message::DialogInserted { generation, relocated_from } => {
            match state.open.as_mut().filter(|o| o.generation == generation) {
                Some(open) => {
                    open.inserted = true;
                    open.relocated_from = relocated_from;
                    commands.push(Command::ScheduleFocus(generation));
                }
                // Closed while the markup was being inserted: take it out again.
                None => commands.push(Command::RemoveDialog { restore_to: relocated_from }),
            }
        }

        Message::InsertFailed { generation } => {
            if current(state, generation).is_some() {
                if let Some(open) = state.open.take() {
                    commands.push(Command::ClearActive(open.trigger_id));
                }
            }
        }

        Message::FocusDue { generation } => {
            if let Some(open) = current(state, generation).filter(|o| o.inserted) {
                commands.push(Command::FocusIntoDialog {
                    redirect_id: open.config.focus_redirect_id.clone(),
                });
            }
        }

        Message::CloseRequested(_reason) => {
            if let Some(open) = state.open.take() {
                close_commands(open, &mut commands);
            }
        }

        Message::OutsideClick { target_was_active } => {
            if let Some(open) = state.open.take() {
                close_commands(open, &mut commands);
                if target_was_active {
                    commands.push(Command::PreventDefault);
                }
            }
        }

        Message::TabPressed { position, len, backwards } => {
            if state.inserted().is_some() {
                if let Some(target) = position.and_then(|p| focus_wrap_target(p, len, backwards)) {
                    commands.push(Command::FocusFocusable(target));
                    commands.push(Command::PreventDefault);
                }
            }
        }
    }

    commands
}

fn current(state: &TooltipState, generation: u64) -> Option<&OpenDialog> {
    state.open.as_ref().filter(|o| o.generation == generation)
}

/// Remove the dialog, give back relocated content, return focus and clear
/// the trigger's active marker – in that order.
fn close_commands(open: OpenDialog, commands: &mut Vec<Command>) {
    if open.inserted {
        commands.push(Command::RemoveDialog { restore_to: open.relocated_from });
        commands.push(Command::FocusElement(open.focus_back_id));
    }
    commands.push(Command::ClearActive(open.trigger_id));
}

/// Where Tab / Shift+Tab must wrap to, given the index of the focused
/// element among `len` focusable elements.
///
/// Only the edges wrap: Shift+Tab on the first goes to the last, Tab on the
/// last goes to the first.  Everything else is left to the browser.
pub fn focus_wrap_target(position: usize, len: usize, backwards: bool) -> Option<usize> {
    if position >= len {
        return None;
    }
    match (backwards, position) {
        (true, 0) => Some(len - 1),
        (false, p) if p == len - 1 => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CloseReason;
    use crate::models::TooltipConfig;
    use proptest::prelude::*;

    fn activate(state: &mut TooltipState, id: &str, config: TooltipConfig) -> Vec<Command> {
        update(
            state,
            Message::TriggerActivated { trigger_id: id.to_string(), config },
        )
    }

    /// Drive an open all the way to "inserted".
    fn open_inserted(state: &mut TooltipState, id: &str, relocated_from: Option<&str>) -> u64 {
        activate(state, id, TooltipConfig::default());
        let generation = state.generation;
        update(state, Message::InsertDue { generation });
        update(
            state,
            Message::DialogInserted {
                generation,
                relocated_from: relocated_from.map(str::to_string),
            },
        );
        generation
    }

    #[test]
    fn activation_marks_trigger_and_defers_insertion() {
        let mut state = TooltipState::new();
        let cmds = activate(&mut state, "t1", TooltipConfig::default());

        assert_eq!(
            cmds,
            vec![
                Command::ScheduleInsert(1),
                Command::MarkActive("t1".into()),
                Command::PreventDefault,
            ]
        );
        assert!(state.is_active("t1"));
        assert!(state.inserted().is_none(), "nothing inserted before the deferred step");
    }

    #[test]
    fn insertion_then_focus_follow_in_order() {
        let mut state = TooltipState::new();
        let mut config = TooltipConfig::default();
        config.focus_redirect_id = Some("field".into());
        activate(&mut state, "t1", config.clone());

        let cmds = update(&mut state, Message::InsertDue { generation: 1 });
        assert_eq!(
            cmds,
            vec![Command::InsertDialog {
                generation: 1,
                trigger_id: "t1".into(),
                config,
                focus_back_id: "t1".into(),
            }]
        );

        let cmds = update(&mut state, Message::DialogInserted { generation: 1, relocated_from: None });
        assert_eq!(cmds, vec![Command::ScheduleFocus(1)]);

        let cmds = update(&mut state, Message::FocusDue { generation: 1 });
        assert_eq!(cmds, vec![Command::FocusIntoDialog { redirect_id: Some("field".into()) }]);
    }

    #[test]
    fn opening_second_trigger_closes_first_before_inserting() {
        let mut state = TooltipState::new();
        open_inserted(&mut state, "t1", Some("help"));

        let cmds = activate(&mut state, "t2", TooltipConfig::default());
        assert_eq!(
            cmds,
            vec![
                Command::RemoveDialog { restore_to: Some("help".into()) },
                Command::FocusElement("t1".into()),
                Command::ClearActive("t1".into()),
                Command::ScheduleInsert(2),
                Command::MarkActive("t2".into()),
                Command::PreventDefault,
            ]
        );
        assert!(state.is_active("t2"));
        assert!(!state.is_active("t1"));
    }

    #[test]
    fn stale_deferred_steps_are_dropped() {
        let mut state = TooltipState::new();
        activate(&mut state, "t1", TooltipConfig::default());
        activate(&mut state, "t2", TooltipConfig::default());

        assert!(update(&mut state, Message::InsertDue { generation: 1 }).is_empty());
        assert!(update(&mut state, Message::FocusDue { generation: 1 }).is_empty());
        assert_eq!(update(&mut state, Message::InsertDue { generation: 2 }).len(), 1);
    }

    #[test]
    fn closing_before_insertion_cancels_it() {
        let mut state = TooltipState::new();
        activate(&mut state, "t1", TooltipConfig::default());

        let cmds = update(&mut state, Message::CloseRequested(CloseReason::Escape));
        assert_eq!(cmds, vec![Command::ClearActive("t1".into())]);
        assert!(update(&mut state, Message::InsertDue { generation: 1 }).is_empty());
    }

    #[test]
    fn insertion_racing_a_close_is_undone() {
        let mut state = TooltipState::new();
        activate(&mut state, "t1", TooltipConfig::default());
        update(&mut state, Message::CloseRequested(CloseReason::CloseButton));

        let cmds = update(
            &mut state,
            Message::DialogInserted { generation: 1, relocated_from: Some("help".into()) },
        );
        assert_eq!(cmds, vec![Command::RemoveDialog { restore_to: Some("help".into()) }]);
    }

    #[test]
    fn escape_closes_and_clears_marker() {
        let mut state = TooltipState::new();
        open_inserted(&mut state, "t1", None);

        let cmds = update(&mut state, Message::CloseRequested(CloseReason::Escape));
        assert_eq!(
            cmds,
            vec![
                Command::RemoveDialog { restore_to: None },
                Command::FocusElement("t1".into()),
                Command::ClearActive("t1".into()),
            ]
        );
        assert!(!state.is_open());
        assert!(update(&mut state, Message::CloseRequested(CloseReason::Escape)).is_empty());
    }

    #[test]
    fn outside_click_suppresses_default_only_on_active_trigger() {
        let mut state = TooltipState::new();
        open_inserted(&mut state, "t1", None);
        let cmds = update(&mut state, Message::OutsideClick { target_was_active: false });
        assert!(!cmds.contains(&Command::PreventDefault));
        assert!(!state.is_open());

        open_inserted(&mut state, "t1", None);
        let cmds = update(&mut state, Message::OutsideClick { target_was_active: true });
        assert_eq!(cmds.last(), Some(&Command::PreventDefault));

        assert!(update(&mut state, Message::OutsideClick { target_was_active: true }).is_empty());
    }

    #[test]
    fn failed_insertion_releases_the_trigger() {
        let mut state = TooltipState::new();
        activate(&mut state, "t1", TooltipConfig::default());
        let cmds = update(&mut state, Message::InsertFailed { generation: 1 });
        assert_eq!(cmds, vec![Command::ClearActive("t1".into())]);
        assert!(!state.is_open());
    }

    #[test]
    fn tab_wraps_only_at_the_edges() {
        let mut state = TooltipState::new();
        let tab = |state: &mut TooltipState, position, backwards| {
            update(state, Message::TabPressed { position: Some(position), len: 3, backwards })
        };

        // No dialog inserted yet: nothing to trap.
        activate(&mut state, "t1", TooltipConfig::default());
        assert!(tab(&mut state, 2, false).is_empty());

        update(&mut state, Message::InsertDue { generation: 1 });
        update(&mut state, Message::DialogInserted { generation: 1, relocated_from: None });

        assert_eq!(tab(&mut state, 2, false), vec![Command::FocusFocusable(0), Command::PreventDefault]);
        assert_eq!(tab(&mut state, 0, true), vec![Command::FocusFocusable(2), Command::PreventDefault]);
        assert!(tab(&mut state, 1, false).is_empty());
        assert!(tab(&mut state, 1, true).is_empty());
        assert!(tab(&mut state, 0, false).is_empty());
        assert!(tab(&mut state, 2, true).is_empty());

        let outside = update(&mut state, Message::TabPressed { position: None, len: 3, backwards: false });
        assert!(outside.is_empty());
    }

    proptest! {
        #[test]
        fn wrap_target_stays_in_bounds(len in 0usize..50, position in 0usize..60, backwards in any::<bool>()) {
            match focus_wrap_target(position, len, backwards) {
                Some(target) => {
                    prop_assert!(target < len);
                    if backwards {
                        prop_assert_eq!(position, 0);
                        prop_assert_eq!(target, len - 1);
                    } else {
                        prop_assert_eq!(position, len - 1);
                        prop_assert_eq!(target, 0);
                    }
                }
                None => prop_assert!(
                    position >= len || (backwards && position != 0) || (!backwards && position != len - 1)
                ),
            }
        }

        #[test]
        fn at_most_one_dialog_is_ever_open(ids in proptest::collection::vec(0u8..4, 1..20)) {
            let mut state = TooltipState::new();
            for id in ids {
                let trigger = format!("t{}", id);
                let was_active = state.is_active(&trigger);
                let cmds = activate(&mut state, &trigger, TooltipConfig::default());
                if was_active {
                    prop_assert!(cmds.is_empty());
                } else {
                    let marks = cmds.iter().filter(|c| matches!(c, Command::MarkActive(_))).count();
                    prop_assert_eq!(marks, 1);
                }
                prop_assert!(state.is_active(&trigger));
            }
        }
    }
}
