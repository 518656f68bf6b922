use crate::app::{AppState, UiMode};
use crate::ui::styles::{border_style, default_style, edit_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the text-entry bar for new tasks
pub fn render_entry_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![
        Span::raw("> "),
        Span::styled(app.entry_buffer.clone(), default_style()),
    ];

    if app.ui_mode == UiMode::Entry {
        spans.push(Span::styled("█", edit_style()));
    }

    let title = if app.ui_mode == UiMode::Entry {
        " New Task (Enter to add, Esc to leave) "
    } else {
        " New Task (press a) "
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
