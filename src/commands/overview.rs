//! Category and Stats Commands

use super::get_json;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{CategoriesResponse, Stats};

pub async fn list_categories(config: &ClientConfig) -> Result<Vec<String>, ApiError> {
    let response: CategoriesResponse = get_json(&config.url("/categories/")).await?;
    Ok(response.categories)
}

pub async fn get_stats(config: &ClientConfig) -> Result<Stats, ApiError> {
    get_json(&config.url("/stats/")).await
}
