pub mod entry_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod status_bar;
pub mod styles;

use crate::app::AppState;
use entry_bar::render_entry_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use status_bar::render_status_bar;

/// Main render function - draws the entire UI from the current state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_entry_bar(f, app, layout.entry_area);
    render_list_pane(f, app, layout.list_area);
    render_status_bar(f, app, layout.status_area);
    render_keybindings(f, layout.keybindings_area);
}
