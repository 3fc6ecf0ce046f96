//! Command Handlers
//!
//! Turn user intents into service calls. Every mutation that succeeds ends
//! with a full refresh instead of patching the store locally; every failure
//! is logged, reported as a notification, and leaves the store untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, NotificationKind};
use crate::models::{NewTask, TaskUpdate};
use crate::filter::Filter;
use crate::store::{
    store_clear_search, store_set_categories, store_set_filter, store_set_search, store_set_stats,
    store_set_tasks, AppStateStoreFields,
};

const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Intent carried by a task card control (`data-action` + `data-id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Toggle(u32),
    Edit(u32),
    Delete(u32),
}

impl TaskAction {
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse::<u32>().ok()?;
        match action {
            "toggle" => Some(TaskAction::Toggle(id)),
            "edit" => Some(TaskAction::Edit(id)),
            "delete" => Some(TaskAction::Delete(id)),
            _ => None,
        }
    }
}

/// Route a card control to its handler
pub fn dispatch(ctx: AppContext, action: TaskAction) {
    tracing::debug!(?action, "task action");
    match action {
        TaskAction::Toggle(id) => spawn_local(toggle_task(ctx, id)),
        TaskAction::Delete(id) => {
            if confirm_delete() {
                spawn_local(delete_task(ctx, id));
            }
        }
        TaskAction::Edit(id) => {
            let task = ctx.store.tasks().read_untracked().iter().find(|t| t.id == id).cloned();
            match task {
                Some(task) => ctx.open_editor(task),
                None => tracing::warn!(id, "edit requested for unknown task"),
            }
        }
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

// ========================
// View State
// ========================

/// Typing in the search box
pub fn search(ctx: AppContext, text: String) {
    store_set_search(&ctx.store, &text);
    ctx.set_search_input(text);
}

pub fn clear_search(ctx: AppContext) {
    store_clear_search(&ctx.store);
    ctx.set_search_input(String::new());
}

/// Clicking a category searches for its label
pub fn select_category(ctx: AppContext, category: String) {
    tracing::debug!(%category, "category selected");
    search(ctx, category);
}

pub fn select_filter(ctx: AppContext, filter: Filter) {
    store_set_filter(&ctx.store, filter);
}

// ========================
// Refresh
// ========================

/// Re-fetch tasks, categories and stats. The three loads are independent
/// and each writes its own store field.
pub fn refresh(ctx: AppContext) {
    spawn_local(load_tasks(ctx));
    spawn_local(load_categories(ctx));
    spawn_local(load_stats(ctx));
}

async fn load_tasks(ctx: AppContext) {
    match commands::list_tasks(&ctx.config()).await {
        Ok(tasks) => {
            tracing::debug!(count = tasks.len(), "loaded tasks");
            store_set_tasks(&ctx.store, tasks);
        }
        Err(err) => {
            tracing::error!(error = %err, "loading tasks failed");
            ctx.notify(NotificationKind::Error, "Error loading tasks");
        }
    }
}

async fn load_categories(ctx: AppContext) {
    match commands::list_categories(&ctx.config()).await {
        Ok(categories) => store_set_categories(&ctx.store, categories),
        Err(err) => tracing::error!(error = %err, "loading categories failed"),
    }
}

async fn load_stats(ctx: AppContext) {
    match commands::get_stats(&ctx.config()).await {
        Ok(stats) => store_set_stats(&ctx.store, stats),
        Err(err) => tracing::error!(error = %err, "loading stats failed"),
    }
}

// ========================
// Mutations
// ========================

/// Returns whether the task was created, so the form knows to reset
pub async fn create_task(ctx: AppContext, task: NewTask) -> bool {
    match commands::create_task(&ctx.config(), &task).await {
        Ok(_) => {
            tracing::info!(title = %task.title, "task created");
            ctx.notify(NotificationKind::Success, "Task created successfully!");
            refresh(ctx);
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "creating task failed");
            ctx.notify(NotificationKind::Error, err.user_message("Error creating task"));
            false
        }
    }
}

pub async fn update_task(ctx: AppContext, id: u32, update: TaskUpdate) {
    match commands::update_task(&ctx.config(), id, &update).await {
        Ok(_) => {
            tracing::info!(id, "task updated");
            ctx.notify(NotificationKind::Success, "Task updated successfully!");
            ctx.close_editor();
            refresh(ctx);
        }
        Err(err) => {
            tracing::error!(id, error = %err, "updating task failed");
            ctx.notify(NotificationKind::Error, err.user_message("Error updating task"));
        }
    }
}

pub async fn toggle_task(ctx: AppContext, id: u32) {
    match commands::toggle_task(&ctx.config(), id).await {
        Ok(_) => {
            tracing::debug!(id, "task toggled");
            refresh(ctx);
        }
        Err(err) => {
            tracing::error!(id, error = %err, "toggling task failed");
            ctx.notify(NotificationKind::Error, err.user_message("Error updating task"));
        }
    }
}

pub async fn delete_task(ctx: AppContext, id: u32) {
    match commands::delete_task(&ctx.config(), id).await {
        Ok(()) => {
            tracing::info!(id, "task deleted");
            ctx.notify(NotificationKind::Success, "Task deleted successfully!");
            refresh(ctx);
        }
        Err(err) => {
            tracing::error!(id, error = %err, "deleting task failed");
            ctx.notify(NotificationKind::Error, err.user_message("Error deleting task"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(TaskAction::parse("toggle", "3"), Some(TaskAction::Toggle(3)));
        assert_eq!(TaskAction::parse("edit", "14"), Some(TaskAction::Edit(14)));
        assert_eq!(TaskAction::parse("delete", " 7 "), Some(TaskAction::Delete(7)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(TaskAction::parse("archive", "3"), None);
        assert_eq!(TaskAction::parse("toggle", "abc"), None);
        assert_eq!(TaskAction::parse("delete", "-1"), None);
        assert_eq!(TaskAction::parse("edit", ""), None);
    }
}
