use crate::domain::Filter;
use crate::tasks::TaskList;

/// Which part of the screen owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// List focused; keys act on the selected row
    Normal,
    /// Entry field focused
    Entry,
    /// Inline editor open over one row
    Editing,
}

/// Main application state: the task list, the active filter, the selection,
/// and the entry/edit buffers. Single owner of all mutable state; the
/// renderer only reads it.
pub struct AppState {
    pub list: TaskList,
    pub filter: Filter,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub entry_buffer: String,
    pub edit_buffer: String,
    pub editing_id: Option<i64>,
}

impl AppState {
    pub fn new(list: TaskList) -> Self {
        Self {
            list,
            filter: Filter::All,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            entry_buffer: String::new(),
            edit_buffer: String::new(),
            editing_id: None,
        }
    }

    /// Ids of the rows visible under the active filter, in display order
    pub fn visible_ids(&self) -> Vec<i64> {
        crate::domain::visible(self.list.tasks(), self.filter)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    /// Id of the selected row; `None` when the filtered view is empty
    /// (the placeholder line is not selectable)
    pub fn selected_id(&self) -> Option<i64> {
        self.visible_ids().get(self.selected_index).copied()
    }

    /// Clamp the selection to the visible row count. Called after every
    /// mutation or filter switch, since either can shrink the view.
    fn clamp_selection(&mut self) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_ids().len() {
            self.selected_index += 1;
        }
    }

    /// Focus the entry field. Any text typed earlier stays in the buffer.
    pub fn start_entry(&mut self) {
        self.ui_mode = UiMode::Entry;
    }

    pub fn entry_add_char(&mut self, c: char) {
        self.entry_buffer.push(c);
    }

    pub fn entry_backspace(&mut self) {
        self.entry_buffer.pop();
    }

    /// Submit the entry field: add the task, clear the field, and keep it
    /// focused for the next one.
    pub fn submit_entry(&mut self) {
        let text = std::mem::take(&mut self.entry_buffer);
        self.list.add(&text);
        self.clamp_selection();
    }

    /// Return focus to the list without adding
    pub fn cancel_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Flip the completed flag of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.toggle(id);
            self.clamp_selection();
        }
    }

    /// Open the inline editor over the selected row, pre-filled with its
    /// current text
    pub fn start_edit(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(task) = self.list.get(id) {
                self.edit_buffer = task.text.clone();
                self.editing_id = Some(id);
                self.ui_mode = UiMode::Editing;
            }
        }
    }

    pub fn edit_add_char(&mut self, c: char) {
        self.edit_buffer.push(c);
    }

    pub fn edit_backspace(&mut self) {
        self.edit_buffer.pop();
    }

    /// Leave the editor, committing the buffer. There is no
    /// cancel-without-commit path; the unchanged-text check in the task
    /// list keeps an untouched buffer free of persist side effects.
    pub fn commit_edit(&mut self) {
        if let Some(id) = self.editing_id.take() {
            let text = std::mem::take(&mut self.edit_buffer);
            self.list.edit(id, &text);
        }
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.delete(id);
            self.clamp_selection();
        }
    }

    /// Switch the active filter
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_selection();
    }

    /// Cycle to the next filter tab
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Remove every completed task
    pub fn clear_completed(&mut self) {
        self.list.clear_completed();
        self.clamp_selection();
    }
}
