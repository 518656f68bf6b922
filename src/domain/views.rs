use super::filter::{visible, Filter};
use super::task::Task;

/// What the list pane shows for the current (tasks, filter) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayList {
    /// No visible task under the active filter; one non-selectable
    /// placeholder line
    Empty(&'static str),
    /// Visible task ids in display order
    Rows(Vec<i64>),
}

/// Project (tasks, filter) into the rendered list
pub fn display_list(tasks: &[Task], filter: Filter) -> DisplayList {
    let rows = visible(tasks, filter);
    if rows.is_empty() {
        DisplayList::Empty(filter.empty_message())
    } else {
        DisplayList::Rows(rows.iter().map(|t| t.id).collect())
    }
}

/// Counter text from the full unfiltered list: count of incomplete tasks,
/// with singular/plural wording.
pub fn counter_text(tasks: &[Task]) -> String {
    let active = tasks.iter().filter(|t| !t.completed).count();
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", active)
    }
}
