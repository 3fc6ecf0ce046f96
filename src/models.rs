//! Frontend Models
//!
//! Data structures matching the task service's JSON contract.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

fn default_priority() -> i32 {
    3
}

/// Display priority. Anything other than 1 or 2 is treated as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_level(level: i32) -> Self {
        match level {
            1 => Priority::High,
            2 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Priority::High => "high-priority",
            Priority::Medium => "medium-priority",
            Priority::Low => "low-priority",
        }
    }
}

/// Priority options for the form selects: (value, label)
pub const PRIORITY_OPTIONS: &[(i32, &str)] = &[(1, "High"), (2, "Medium"), (3, "Low")];

/// Aggregate counts computed by the service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    #[serde(default)]
    pub completion_rate: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// `{success, message?}` envelope returned by mutating endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{detail}` body the service sends with error statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body for `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: i32,
}

/// Body for `PUT /tasks/{id}` (full replacement of the editable fields)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: i32,
    pub completed: bool,
}

impl TaskUpdate {
    /// Pre-fill an update from a cached task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            category: task.category.clone(),
            priority: task.priority,
            completed: task.completed,
        }
    }
}
