use crate::ui::controller::CounterController;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Leave the counter screen.
    Quit,
}

pub fn handle_key(controller: &CounterController, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputAction::Quit,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            controller.tap_increment();
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => controller.tap_decrement(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('0') => controller.tap_reset(),
        KeyCode::Char('f') | KeyCode::Char('F') => {
            // Completion arrives through the store subscription
            let _ = controller.handle_on_appear();
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
