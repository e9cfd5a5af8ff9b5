//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the app root and reached through the controller; nothing
//! here is global.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ValidationError;
use crate::models::{Filter, Task, TaskId, TaskUpdate};
use crate::tasks;

/// Fields of the edit dialog's form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditForm {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl EditForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.is_completed,
        }
    }

    /// Trimmed update payload, or why the form can't be submitted
    pub fn to_update(&self) -> Result<TaskUpdate, ValidationError> {
        let id = self.id.ok_or(ValidationError::NoTaskSelected)?;
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(TaskUpdate {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            is_completed: self.completed,
        })
    }
}

/// Client state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Cached task list, in server order
    pub tasks: Vec<Task>,
    pub filter: Filter,
    /// Task shown in the edit dialog (None = closed)
    pub editing_id: Option<TaskId>,
    pub edit_form: EditForm,
    /// Task awaiting delete confirmation (None = closed)
    pub deleting_id: Option<TaskId>,
    pub online: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All,
            editing_id: None,
            edit_form: EditForm::default(),
            deleting_id: None,
            online: true,
        }
    }

    /// Open the edit dialog for `id`. Stays closed if the task isn't cached.
    pub fn open_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = tasks::find_task(&self.tasks, id) else {
            return false;
        };
        self.edit_form = EditForm::from_task(task);
        self.editing_id = Some(id);
        true
    }

    pub fn close_edit(&mut self) {
        self.editing_id = None;
        self.edit_form = EditForm::default();
    }

    /// Close the edit dialog only if it is still showing `id`
    pub fn close_edit_for(&mut self, id: TaskId) -> bool {
        if self.editing_id != Some(id) {
            return false;
        }
        self.close_edit();
        true
    }

    pub fn open_delete(&mut self, id: TaskId) {
        self.deleting_id = Some(id);
    }

    pub fn close_delete(&mut self) {
        self.deleting_id = None;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole task list (initial load, reload)
pub fn store_set_tasks(store: &AppStore, loaded: Vec<Task>) {
    *store.tasks().write() = loaded;
}

pub fn store_append_task(store: &AppStore, task: Task) {
    tasks::append_task(&mut store.tasks().write(), task);
}

pub fn store_merge_update(store: &AppStore, update: &TaskUpdate) {
    tasks::merge_update(&mut store.tasks().write(), update);
}

pub fn store_replace_task(store: &AppStore, task: Task) {
    tasks::replace_task(&mut store.tasks().write(), task);
}

pub fn store_remove_task(store: &AppStore, id: TaskId) {
    tasks::remove_task(&mut store.tasks().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_tasks() -> AppState {
        let mut state = AppState::new();
        state.tasks = vec![
            Task::new(1, "First", "with text", false),
            Task::new(2, "Second", "", true),
        ];
        state
    }

    #[test]
    fn test_new_state_is_empty_and_closed() {
        let state = AppState::default();
        assert!(state.tasks.is_empty());
        assert_eq!(state.filter, Filter::All);
        assert_eq!(state.editing_id, None);
        assert_eq!(state.deleting_id, None);
        assert!(state.online);
    }

    #[test]
    fn test_open_edit_populates_form() {
        let mut state = state_with_tasks();
        assert!(state.open_edit(2));
        assert_eq!(state.editing_id, Some(2));
        assert_eq!(
            state.edit_form,
            EditForm {
                id: Some(2),
                title: "Second".to_string(),
                description: String::new(),
                completed: true,
            }
        );
    }

    #[test]
    fn test_open_edit_unknown_id_stays_closed() {
        let mut state = state_with_tasks();
        assert!(!state.open_edit(9));
        assert_eq!(state.editing_id, None);
        assert_eq!(state.edit_form, EditForm::default());
    }

    #[test]
    fn test_close_edit_resets_form() {
        let mut state = state_with_tasks();
        state.open_edit(1);
        state.edit_form.title = "half typed".to_string();
        state.close_edit();
        assert_eq!(state.editing_id, None);
        assert_eq!(state.edit_form, EditForm::default());
    }

    #[test]
    fn test_close_edit_for_leaves_other_task_open() {
        let mut state = state_with_tasks();
        state.open_edit(2);
        assert!(!state.close_edit_for(1));
        assert_eq!(state.editing_id, Some(2));
        assert_eq!(state.edit_form.id, Some(2));

        assert!(state.close_edit_for(2));
        assert_eq!(state.editing_id, None);
    }

    #[test]
    fn test_delete_dialog_is_independent_of_edit() {
        let mut state = state_with_tasks();
        state.open_edit(1);
        state.open_delete(2);
        assert_eq!(state.editing_id, Some(1));
        assert_eq!(state.deleting_id, Some(2));

        state.close_delete();
        assert_eq!(state.deleting_id, None);
        assert_eq!(state.editing_id, Some(1));
    }

    #[test]
    fn test_edit_form_to_update_trims() {
        let form = EditForm {
            id: Some(5),
            title: "  Title  ".to_string(),
            description: "  desc \n".to_string(),
            completed: true,
        };
        let update = form.to_update().unwrap();
        assert_eq!(
            update,
            TaskUpdate {
                id: 5,
                title: "Title".to_string(),
                description: "desc".to_string(),
                is_completed: true,
            }
        );
    }

    #[test]
    fn test_edit_form_rejects_blank_title() {
        let form = EditForm {
            id: Some(5),
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_update(), Err(ValidationError::EmptyTitle));
        assert_eq!(EditForm::default().to_update(), Err(ValidationError::NoTaskSelected));
    }
}
