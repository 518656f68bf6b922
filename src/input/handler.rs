use crate::app::{AppState, UiMode};
use crate::domain::Filter;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Entry => handle_entry_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode (list focused)
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),

        // Toggle completion
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // Edit selected task inline
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit(),

        // Delete selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(),

        // Focus the entry field
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_entry(),

        // Filter selection
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Tab => app.cycle_filter(),

        // Clear completed tasks
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear_completed(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the entry field is focused
fn handle_entry_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Submit: add the task and keep the field focused
        KeyCode::Enter => app.submit_entry(),

        // Back to the list without adding
        KeyCode::Esc => app.cancel_entry(),

        KeyCode::Backspace => app.entry_backspace(),

        KeyCode::Char(c) => app.entry_add_char(c),

        _ => {}
    }
    false
}

/// Handle keys while the inline editor is open. Leaving the editor always
/// commits; Esc is the terminal stand-in for focus loss.
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.commit_edit(),

        KeyCode::Backspace => app.edit_backspace(),

        KeyCode::Char(c) => app.edit_add_char(c),

        _ => {}
    }
    false
}
