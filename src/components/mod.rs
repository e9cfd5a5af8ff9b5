//! UI Components
//!
//! Leptos components for the todo page. Each one pulls the controller
//! from context.

mod new_task_form;
mod filter_bar;
mod stats_bar;
mod task_list;
mod task_item;
mod edit_dialog;
mod delete_dialog;
mod toasts;
mod loading_overlay;

pub use new_task_form::{NewTaskForm, NEW_TITLE_ID};
pub use filter_bar::FilterBar;
pub use stats_bar::StatsBar;
pub use task_list::TaskList;
pub use task_item::TaskItem;
pub use edit_dialog::EditDialog;
pub use delete_dialog::DeleteDialog;
pub use toasts::Toasts;
pub use loading_overlay::LoadingOverlay;
