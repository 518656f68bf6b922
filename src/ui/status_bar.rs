use crate::app::AppState;
use crate::domain::{counter_text, Filter};
use crate::ui::styles::{active_filter_style, default_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar: incomplete-item counter on the left, filter tabs
/// on the right. Exactly one tab renders as active.
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(counter_text(app.list.tasks()), default_style()),
        Span::raw("    "),
    ];

    for filter in Filter::all() {
        let style = if *filter == app.filter {
            active_filter_style()
        } else {
            hint_style()
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
