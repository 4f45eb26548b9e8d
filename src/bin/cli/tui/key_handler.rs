use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('f') | KeyCode::Char(' ') => state.flip(),
        KeyCode::Char('a') | KeyCode::Char('1') => state.again(),
        KeyCode::Char('g') | KeyCode::Char('2') | KeyCode::Enter => state.got_it(),
        KeyCode::Char('s') => state.shuffle(),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }
}
