//! Task Service Command Wrappers
//!
//! Frontend bindings to the REST endpoints, organized by domain.

mod task;
mod overview;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{ErrorDetail, MutationResponse};

// Re-export all public items
pub use task::*;
pub use overview::*;

// ========================
// Response Helpers
// ========================

/// GET a JSON document
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    let response = ensure_ok(response).await?;
    Ok(response.json::<T>().await?)
}

/// Map non-2xx responses to `ApiError::Status`, keeping the `{detail}` text
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response.json::<ErrorDetail>().await.ok().map(|d| d.detail);
    Err(ApiError::Status { status, detail })
}

/// Read the `{success, message?}` envelope of a mutating call
async fn read_mutation(response: Response) -> Result<MutationResponse, ApiError> {
    let response = ensure_ok(response).await?;
    let result = response.json::<MutationResponse>().await?;
    check_mutation(result)
}

fn check_mutation(result: MutationResponse) -> Result<MutationResponse, ApiError> {
    if result.success {
        Ok(result)
    } else {
        Err(ApiError::Rejected(result.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mutation_success() {
        let result: MutationResponse =
            serde_json::from_str(r#"{"success":true,"message":"Task created successfully"}"#).unwrap();
        assert!(check_mutation(result).is_ok());
    }

    #[test]
    fn test_check_mutation_rejected_keeps_message() {
        let result: MutationResponse =
            serde_json::from_str(r#"{"success":false,"message":"Task not found"}"#).unwrap();
        assert_eq!(
            check_mutation(result).unwrap_err(),
            ApiError::Rejected(Some("Task not found".to_string()))
        );
    }

    #[test]
    fn test_check_mutation_rejected_without_message() {
        let result: MutationResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(check_mutation(result).unwrap_err(), ApiError::Rejected(None));
    }
}
