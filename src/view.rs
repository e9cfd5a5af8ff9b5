//! View Descriptions
//!
//! Pure state -> view mapping. Components only lay these out.

use crate::models::{Filter, Task, TaskId, TaskStats};
use crate::tasks::{filter_tasks, task_stats};

pub const EMPTY_DESCRIPTION: &str = "Sin descripción";

/// One rendered task card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub status_label: &'static str,
    pub toggle_label: &'static str,
}

impl TaskCard {
    pub fn from_task(task: &Task) -> Self {
        let description = if task.description.is_empty() {
            EMPTY_DESCRIPTION.to_string()
        } else {
            task.description.clone()
        };
        Self {
            id: task.id,
            title: task.title.clone(),
            description,
            completed: task.is_completed,
            status_label: if task.is_completed { "COMPLETADA" } else { "PENDIENTE" },
            toggle_label: if task.is_completed { "REABRIR" } else { "COMPLETAR" },
        }
    }

    pub fn class(&self) -> &'static str {
        if self.completed { "todo-item completed" } else { "todo-item" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing matches the filter: show the placeholder
    Empty,
    Cards(Vec<TaskCard>),
}

pub fn render_list(tasks: &[Task], filter: Filter) -> ListView {
    let cards: Vec<TaskCard> = filter_tasks(tasks, filter).iter().map(TaskCard::from_task).collect();
    if cards.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(cards)
    }
}

/// Counts always come from the full list, not the filtered one
pub fn render_stats(tasks: &[Task]) -> TaskStats {
    task_stats(tasks)
}

pub fn filter_button_class(button: Filter, current: Filter) -> &'static str {
    if button == current { "filter-btn active" } else { "filter-btn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_single_pending_task() {
        let tasks = vec![Task::new(1, "A", "", false)];
        let stats = render_stats(&tasks);
        assert_eq!((stats.total, stats.pending, stats.completed), (1, 1, 0));

        let ListView::Cards(cards) = render_list(&tasks, Filter::All) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "A");
        assert_eq!(cards[0].description, EMPTY_DESCRIPTION);
        assert_eq!(cards[0].status_label, "PENDIENTE");
        assert_eq!(cards[0].toggle_label, "COMPLETAR");
    }

    #[test]
    fn test_empty_filter_result_shows_placeholder() {
        let tasks = vec![Task::new(1, "A", "", false)];
        assert_eq!(render_list(&tasks, Filter::Completed), ListView::Empty);
        assert_eq!(render_list(&[], Filter::All), ListView::Empty);
    }

    #[test]
    fn test_completed_card_labels() {
        let card = TaskCard::from_task(&Task::new(2, "Done", "notes", true));
        assert_eq!(card.description, "notes");
        assert_eq!(card.status_label, "COMPLETADA");
        assert_eq!(card.toggle_label, "REABRIR");
        assert_eq!(card.class(), "todo-item completed");
    }

    #[test]
    fn test_stats_ignore_filter() {
        let tasks = vec![
            Task::new(1, "a", "", true),
            Task::new(2, "b", "", false),
            Task::new(3, "c", "", true),
        ];
        let stats = render_stats(&tasks);
        assert_eq!(stats.pending, stats.total - stats.completed);
        assert_eq!(stats.completed, 2);
        let ListView::Cards(pending) = render_list(&tasks, Filter::Pending) else {
            panic!("expected cards");
        };
        assert_eq!(pending.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_title_is_kept_verbatim() {
        // Escaping is the renderer's job
        let card = TaskCard::from_task(&Task::new(4, "<b>bold</b>", "", false));
        assert_eq!(card.title, "<b>bold</b>");
    }

    #[test]
    fn test_filter_button_class() {
        assert_eq!(filter_button_class(Filter::Pending, Filter::Pending), "filter-btn active");
        assert_eq!(filter_button_class(Filter::All, Filter::Pending), "filter-btn");
    }
}
