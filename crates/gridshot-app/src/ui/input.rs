use eframe::egui::{InputState, Key};
use gridshot_core::Digit;

use crate::action::{
    Action, ActionRequestQueue, ModalKind, MoveDirection, UiAction, WorkflowAction,
};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, false), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false, false), action)
    }

    const fn digit(key: Key, digit: Digit) -> Self {
        Self::new(
            Trigger::new(key, false, false),
            Action::Workflow(WorkflowAction::InputDigit(digit)),
        )
    }
}

const SHORTCUTS: [Shortcut; 18] = [
    Shortcut::command(
        Key::N,
        Action::Ui(UiAction::OpenModal(ModalKind::RestartConfirm)),
    ),
    Shortcut::plain(Key::Enter, Action::Workflow(WorkflowAction::Submit)),
    Shortcut::plain(
        Key::ArrowUp,
        Action::Ui(UiAction::MoveSelection(MoveDirection::Up)),
    ),
    Shortcut::plain(
        Key::ArrowDown,
        Action::Ui(UiAction::MoveSelection(MoveDirection::Down)),
    ),
    Shortcut::plain(
        Key::ArrowLeft,
        Action::Ui(UiAction::MoveSelection(MoveDirection::Left)),
    ),
    Shortcut::plain(
        Key::ArrowRight,
        Action::Ui(UiAction::MoveSelection(MoveDirection::Right)),
    ),
    Shortcut::plain(Key::Escape, Action::Ui(UiAction::ClearSelection)),
    Shortcut::plain(Key::Delete, Action::Workflow(WorkflowAction::ClearCell)),
    Shortcut::plain(Key::Backspace, Action::Workflow(WorkflowAction::ClearCell)),
    Shortcut::digit(Key::Num1, Digit::D1),
    Shortcut::digit(Key::Num2, Digit::D2),
    Shortcut::digit(Key::Num3, Digit::D3),
    Shortcut::digit(Key::Num4, Digit::D4),
    Shortcut::digit(Key::Num5, Digit::D5),
    Shortcut::digit(Key::Num6, Digit::D6),
    Shortcut::digit(Key::Num7, Digit::D7),
    Shortcut::digit(Key::Num8, Digit::D8),
    Shortcut::digit(Key::Num9, Digit::D9),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
