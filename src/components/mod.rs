//! UI Components
//!
//! Leptos components for the task board.

mod task_form;
mod priority_select;
mod search_bar;
mod filter_buttons;
mod task_list;
mod category_panel;
mod stats_panel;
mod edit_task_modal;
mod notification_toast;

pub use task_form::TaskForm;
pub use priority_select::PrioritySelect;
pub use search_bar::SearchBar;
pub use filter_buttons::FilterButtons;
pub use task_list::TaskList;
pub use category_panel::CategoryPanel;
pub use stats_panel::StatsPanel;
pub use edit_task_modal::EditTaskModal;
pub use notification_toast::NotificationToast;
