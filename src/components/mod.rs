//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod status_banner;
mod task_item;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use status_banner::StatusBanner;
pub use task_item::TaskItem;
pub use task_list::TaskList;
