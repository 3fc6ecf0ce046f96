//! Filter Engine
//!
//! Derives the visible task subset from the loaded list and the view state.

use crate::models::Task;

/// Completion filter selected by the filter buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Filter::All => "All Tasks",
            Filter::Pending => "Pending Tasks",
            Filter::Completed => "Completed Tasks",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Case-insensitive substring match over title, description and category.
/// `search` is expected to be lowercase already.
pub fn matches_search(task: &Task, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(search)
        || task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(search))
        || task.category.to_lowercase().contains(search)
}

/// Tasks passing both the completion filter and the search, in input order
pub fn visible_tasks(tasks: &[Task], filter: Filter, search: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task) && matches_search(task, search))
        .cloned()
        .collect()
}
