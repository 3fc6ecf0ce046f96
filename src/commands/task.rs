//! Task Commands
//!
//! Frontend bindings for `/tasks/` endpoints.

use gloo_net::http::Request;

use super::{ensure_ok, get_json, read_mutation};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{MutationResponse, NewTask, Task, TaskUpdate};

fn task_url(config: &ClientConfig, id: u32) -> String {
    config.url(&format!("/tasks/{}", id))
}

pub async fn list_tasks(config: &ClientConfig) -> Result<Vec<Task>, ApiError> {
    get_json(&config.url("/tasks/")).await
}

pub async fn create_task(config: &ClientConfig, task: &NewTask) -> Result<MutationResponse, ApiError> {
    let response = Request::post(&config.url("/tasks/")).json(task)?.send().await?;
    read_mutation(response).await
}

pub async fn update_task(config: &ClientConfig, id: u32, update: &TaskUpdate) -> Result<MutationResponse, ApiError> {
    let response = Request::put(&task_url(config, id)).json(update)?.send().await?;
    read_mutation(response).await
}

pub async fn toggle_task(config: &ClientConfig, id: u32) -> Result<MutationResponse, ApiError> {
    let url = format!("{}/toggle", task_url(config, id));
    let response = Request::patch(&url).send().await?;
    read_mutation(response).await
}

/// Only the status matters here; the body is ignored
pub async fn delete_task(config: &ClientConfig, id: u32) -> Result<(), ApiError> {
    let response = Request::delete(&task_url(config, id)).send().await?;
    ensure_ok(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_url() {
        let config = ClientConfig::default();
        assert_eq!(task_url(&config, 12), "/api/tasks/12");
    }
}
