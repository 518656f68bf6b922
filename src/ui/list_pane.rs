use crate::app::{AppState, UiMode};
use crate::domain::{display_list, DisplayList, Task};
use crate::ui::styles::{
    border_style, completed_style, default_style, edit_style, placeholder_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a single line for a task row.
/// Format: [x] Buy milk  (label struck through when completed; replaced by
/// the inline editor while that row is being edited)
fn create_task_line(task: &Task, editing: Option<&str>) -> Line<'static> {
    let mut spans = Vec::new();

    let glyph = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(glyph.to_string()));

    match editing {
        Some(buffer) => {
            spans.push(Span::styled(buffer.to_string(), edit_style()));
            spans.push(Span::styled("█".to_string(), edit_style()));
        }
        None => {
            let style = if task.completed {
                completed_style()
            } else {
                default_style()
            };
            spans.push(Span::styled(task.text.clone(), style));
        }
    }

    Line::from(spans)
}

/// Render the task list pane for the active filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = match display_list(app.list.tasks(), app.filter) {
        DisplayList::Empty(message) => {
            // Placeholder line; carries no selection and no controls
            vec![ListItem::new(Line::from(Span::styled(
                message.to_string(),
                placeholder_style(),
            )))]
        }
        DisplayList::Rows(ids) => {
            let mut items = Vec::new();
            for (idx, id) in ids.iter().enumerate() {
                let task = match app.list.get(*id) {
                    Some(task) => task,
                    None => continue,
                };
                let editing = if app.editing_id == Some(task.id) {
                    Some(app.edit_buffer.as_str())
                } else {
                    None
                };
                let line = create_task_line(task, editing);
                let style = if idx == app.selected_index && app.ui_mode == UiMode::Normal {
                    selected_style()
                } else {
                    default_style()
                };
                items.push(ListItem::new(line).style(style));
            }
            items
        }
    };

    let title = format!(" Tasks ({}) ", app.filter.label());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
