use super::task::Task;

/// Active view filter for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Display label for the filter tab
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Placeholder text shown when the filtered view has no tasks
    pub fn empty_message(&self) -> &'static str {
        match self {
            Filter::All => "No tasks yet!",
            Filter::Active => "No active tasks!",
            Filter::Completed => "No completed tasks!",
        }
    }

    /// Next filter in tab order (wraps around)
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Get all filters as a list (tab order)
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Active, Filter::Completed]
    }
}

/// Visible subset of tasks under a filter, relative order preserved.
/// Pure; never mutates the list.
pub fn visible<'a>(tasks: &'a [Task], filter: Filter) -> Vec<&'a Task> {
    match filter {
        Filter::All => tasks.iter().collect(),
        Filter::Active => tasks.iter().filter(|t| !t.completed).collect(),
        Filter::Completed => tasks.iter().filter(|t| t.completed).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tasks() -> Vec<Task> {
        let mut tasks = vec![
            Task::new(1, "One".to_string()),
            Task::new(2, "Two".to_string()),
            Task::new(3, "Three".to_string()),
        ];
        tasks[1].completed = true;
        tasks
    }

    #[test]
    fn test_visible_all() {
        let tasks = create_test_tasks();
        let rows = visible(&tasks, Filter::All);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[2].id, 3);
    }

    #[test]
    fn test_visible_active_preserves_order() {
        let tasks = create_test_tasks();
        let rows = visible(&tasks, Filter::Active);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 3);
    }

    #[test]
    fn test_visible_completed() {
        let tasks = create_test_tasks();
        let rows = visible(&tasks, Filter::Completed);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(Filter::All.empty_message(), "No tasks yet!");
        assert_eq!(Filter::Active.empty_message(), "No active tasks!");
        assert_eq!(Filter::Completed.empty_message(), "No completed tasks!");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }
}
