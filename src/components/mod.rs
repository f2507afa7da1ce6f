//! UI Components
//!
//! Leptos components for the task list page.

mod dialogs;
mod new_task_form;
mod task_list;
mod task_row;
mod task_summary;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use task_summary::TaskSummaryBar;
