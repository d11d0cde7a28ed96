//! Key mapping from terminal events to simulation actions.

use crate::types::SimAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Camera pan distance per key press, in grid cells.
pub const PAN_STEP: i32 = 8;

/// Camera pan distance per key press with Shift held.
pub const PAN_STEP_FAST: i32 = 64;

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SimAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(SimAction::ToggleRun),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(SimAction::StepOnce),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SimAction::Reset),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Randomize),
        _ => None,
    }
}

/// Map keyboard input to a camera pan, in grid cells.
pub fn pan_delta(key: KeyEvent) -> Option<(i32, i32)> {
    let (dx, dy) = match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => (-1, 0),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => (1, 0),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => (0, 1),
        _ => return None,
    };
    let fast = key.modifiers.contains(KeyModifiers::SHIFT)
        || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());
    let step = if fast { PAN_STEP_FAST } else { PAN_STEP };
    Some((dx * step, dy * step))
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
