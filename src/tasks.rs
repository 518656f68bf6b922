use crate::domain::{next_id, Task};
use crate::store::{decode_tasks, encode_tasks, FileStore, TASKS_KEY};

/// The task-list state machine. Owns the ordered task collection and its
/// store; every mutating operation writes the full list back before
/// returning, so the persisted slot always matches memory.
pub struct TaskList {
    tasks: Vec<Task>,
    store: FileStore,
}

impl TaskList {
    /// Load the persisted list from the store. Absent or unparsable data
    /// yields an empty list; this never errors upward.
    pub fn load(store: FileStore) -> Self {
        let tasks = match store.get(TASKS_KEY) {
            Ok(Some(raw)) => decode_tasks(&raw).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Warning: could not read task data: {}", e);
                Vec::new()
            }
        };
        Self { tasks, store }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a new incomplete task at the end of the list. Empty or
    /// whitespace-only text is silently ignored.
    pub fn add(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let id = next_id(&self.tasks);
        self.tasks.push(Task::new(id, text.to_string()));
        self.persist();
    }

    /// Flip the completed flag of the matching task. Missing id is a no-op.
    pub fn toggle(&mut self, id: i64) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.completed = !task.completed,
            None => return,
        }
        self.persist();
    }

    /// Replace the text of the matching task. Empty text, unchanged text,
    /// and missing ids are all no-ops with no persist side effect.
    pub fn edit(&mut self, id: i64, new_text: &str) {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.text != new_text => task.text = new_text.to_string(),
            _ => return,
        }
        self.persist();
    }

    /// Remove the matching task if present. Persists unconditionally;
    /// deleting a missing id is idempotent.
    pub fn delete(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
        self.persist();
    }

    /// Remove every completed task
    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
        self.persist();
    }

    /// Write the whole list to the store. Failures are reported on stderr
    /// and swallowed; the in-memory list stays authoritative for the
    /// session.
    fn persist(&self) {
        let raw = match encode_tasks(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Warning: could not serialize tasks: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(TASKS_KEY, &raw) {
            eprintln!("Warning: could not save tasks: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{counter_text, display_list, visible, DisplayList, Filter};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_list() -> (TaskList, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let list = TaskList::load(FileStore::new(temp_dir.path()));
        (list, temp_dir)
    }

    fn reload(temp_dir: &TempDir) -> TaskList {
        TaskList::load(FileStore::new(temp_dir.path()))
    }

    #[test]
    fn test_load_absent_store_is_empty() {
        let (list, _dir) = create_test_list();
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_load_corrupt_store_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.set(TASKS_KEY, "{ this is not a task list").unwrap();

        let list = TaskList::load(store);
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_add_persists_immediately() {
        let (mut list, dir) = create_test_list();
        list.add("Buy milk");

        assert_eq!(list.tasks().len(), 1);
        assert_eq!(reload(&dir).tasks(), list.tasks());
    }

    #[test]
    fn test_add_trims_text() {
        let (mut list, _dir) = create_test_list();
        list.add("  Buy milk  ");
        assert_eq!(list.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_add_empty_is_noop() {
        let (mut list, dir) = create_test_list();
        list.add("");
        list.add("   ");

        assert!(list.tasks().is_empty());
        assert!(reload(&dir).tasks().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag_and_order() {
        let (mut list, _dir) = create_test_list();
        list.add("One");
        list.add("Two");
        let id = list.tasks()[0].id;
        let before: Vec<Task> = list.tasks().to_vec();

        list.toggle(id);
        assert!(list.tasks()[0].completed);

        list.toggle(id);
        assert_eq!(list.tasks(), &before[..]);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let (mut list, _dir) = create_test_list();
        list.add("One");
        let before: Vec<Task> = list.tasks().to_vec();

        list.toggle(999);
        assert_eq!(list.tasks(), &before[..]);
    }

    #[test]
    fn test_edit_replaces_text() {
        let (mut list, dir) = create_test_list();
        list.add("Buy milk");
        let id = list.tasks()[0].id;

        list.edit(id, "Buy oat milk");
        assert_eq!(list.tasks()[0].text, "Buy oat milk");
        assert_eq!(reload(&dir).tasks()[0].text, "Buy oat milk");
    }

    #[test]
    fn test_edit_keeps_completed_flag() {
        let (mut list, _dir) = create_test_list();
        list.add("Buy milk");
        let id = list.tasks()[0].id;
        list.toggle(id);

        list.edit(id, "Buy oat milk");
        assert!(list.tasks()[0].completed);
    }

    #[test]
    fn test_edit_noops_do_not_persist() {
        let (mut list, dir) = create_test_list();
        list.add("Buy milk");
        let id = list.tasks()[0].id;

        // Plant a sentinel in the store; a spurious persist would
        // overwrite it.
        let store = FileStore::new(dir.path());
        store.set(TASKS_KEY, "sentinel").unwrap();

        list.edit(id, "");
        list.edit(id, "   ");
        list.edit(id, "Buy milk");
        list.edit(id, "  Buy milk  ");
        list.edit(999, "Other");

        assert_eq!(
            store.get(TASKS_KEY).unwrap(),
            Some("sentinel".to_string())
        );
        assert_eq!(list.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_delete_removes_without_compacting_order() {
        let (mut list, dir) = create_test_list();
        list.add("One");
        list.add("Two");
        list.add("Three");
        let middle = list.tasks()[1].id;

        list.delete(middle);
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Three"]);
        assert_eq!(reload(&dir).tasks(), list.tasks());
    }

    #[test]
    fn test_delete_missing_id_persists_unchanged_list() {
        let (mut list, dir) = create_test_list();
        list.add("One");

        list.delete(999);
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(reload(&dir).tasks(), list.tasks());
    }

    #[test]
    fn test_clear_completed() {
        let (mut list, dir) = create_test_list();
        list.add("One");
        list.add("Two");
        list.add("Three");
        let second = list.tasks()[1].id;
        list.toggle(second);

        list.clear_completed();
        assert!(list.tasks().iter().all(|t| !t.completed));
        assert_eq!(list.tasks().len(), 2);
        assert_eq!(reload(&dir).tasks(), list.tasks());
    }

    #[test]
    fn test_store_matches_memory_after_every_mutation() {
        let (mut list, dir) = create_test_list();

        list.add("One");
        assert_eq!(reload(&dir).tasks(), list.tasks());

        list.add("Two");
        assert_eq!(reload(&dir).tasks(), list.tasks());

        let first = list.tasks()[0].id;
        list.toggle(first);
        assert_eq!(reload(&dir).tasks(), list.tasks());

        list.edit(first, "One edited");
        assert_eq!(reload(&dir).tasks(), list.tasks());

        list.delete(first);
        assert_eq!(reload(&dir).tasks(), list.tasks());

        list.clear_completed();
        assert_eq!(reload(&dir).tasks(), list.tasks());
    }

    #[test]
    fn test_buy_milk_scenario() {
        let (mut list, _dir) = create_test_list();

        list.add("Buy milk");
        assert_eq!(list.tasks().len(), 1);
        assert!(!list.tasks()[0].completed);
        assert_eq!(counter_text(list.tasks()), "1 item left");

        let id = list.tasks()[0].id;
        list.toggle(id);
        assert_eq!(counter_text(list.tasks()), "0 items left");
        assert_eq!(
            display_list(list.tasks(), Filter::Active),
            DisplayList::Empty("No active tasks!")
        );

        list.edit(id, "Buy oat milk");
        assert_eq!(list.tasks()[0].text, "Buy oat milk");
        assert!(list.tasks()[0].completed);

        list.delete(id);
        assert!(list.tasks().is_empty());
        assert_eq!(
            display_list(list.tasks(), Filter::All),
            DisplayList::Empty("No tasks yet!")
        );
        assert!(visible(list.tasks(), Filter::All).is_empty());
    }
}
