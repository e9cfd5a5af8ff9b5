//! Task List Utilities
//!
//! Pure operations over the locally cached task list.

use crate::models::{Filter, Task, TaskId, TaskStats, TaskUpdate};

/// Tasks matching `filter`, in list order
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}

pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Append a newly created task. A record whose id is already cached
/// replaces the cached one so ids stay unique.
pub fn append_task(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

/// Merge the edited fields into the cached record, keeping everything else
pub fn merge_update(tasks: &mut [Task], update: &TaskUpdate) -> bool {
    let Some(task) = tasks.iter_mut().find(|t| t.id == update.id) else {
        return false;
    };
    task.title = update.title.clone();
    task.description = update.description.clone();
    task.is_completed = update.is_completed;
    true
}

/// Replace the cached record wholesale
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    tasks
        .iter_mut()
        .find(|t| t.id == updated.id)
        .map(|t| *t = updated)
        .is_some()
}

pub fn remove_task(tasks: &mut Vec<Task>, id: TaskId) {
    tasks.retain(|t| t.id != id);
}

/// Copy of `task` with the completion flag flipped
pub fn toggled(task: &Task) -> Task {
    Task {
        is_completed: !task.is_completed,
        ..task.clone()
    }
}
