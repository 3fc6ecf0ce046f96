//! API Errors
//!
//! Failures of a single request to the task service.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch rejected (offline, CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status
    #[error("HTTP {status}{}", suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// Service answered `{success: false}`
    #[error("rejected by service{}", suffix(.0))]
    Rejected(Option<String>),

    /// Body did not match the expected JSON shape
    #[error("decode error: {0}")]
    Decode(String),
}

fn suffix(text: &Option<String>) -> String {
    text.as_deref().map(|t| format!(": {t}")).unwrap_or_default()
}

impl ApiError {
    /// Text shown in the notification. Service-provided messages win over
    /// the generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) if !message.is_empty() => message.clone(),
            ApiError::Status { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_service_message() {
        let err = ApiError::Rejected(Some("Task not found".into()));
        assert_eq!(err.user_message("Error updating task"), "Task not found");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Rejected(None).user_message("Error creating task"), "Error creating task");
        assert_eq!(ApiError::Rejected(Some(String::new())).user_message("x"), "x");
        assert_eq!(ApiError::Network("offline".into()).user_message("Error loading tasks"), "Error loading tasks");
        assert_eq!(ApiError::Decode("eof".into()).user_message("x"), "x");
    }

    #[test]
    fn test_user_message_uses_status_detail() {
        let err = ApiError::Status { status: 404, detail: Some("Task not found".into()) };
        assert_eq!(err.user_message("Error deleting task"), "Task not found");
        let bare = ApiError::Status { status: 500, detail: None };
        assert_eq!(bare.user_message("Error deleting task"), "Error deleting task");
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status { status: 404, detail: None }.to_string(), "HTTP 404");
        assert_eq!(
            ApiError::Status { status: 404, detail: Some("Task not found".into()) }.to_string(),
            "HTTP 404: Task not found"
        );
        assert_eq!(ApiError::Rejected(Some("nope".into())).to_string(), "rejected by service: nope");
        assert_eq!(ApiError::Rejected(None).to_string(), "rejected by service");
    }
}
