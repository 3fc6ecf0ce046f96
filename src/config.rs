//! Client Configuration
//!
//! Read once at startup from `<meta>` tags in index.html so the same build
//! can be served behind different API prefixes.

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_NOTIFICATION_MS: u32 = 5000;

const API_BASE_META: &str = "taskboard-api-base";
const NOTIFICATION_MS_META: &str = "taskboard-notification-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every service path, without trailing slash
    pub api_base: String,
    /// How long a notification stays before it expires
    pub notification_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl ClientConfig {
    /// Build from raw meta values; blank or malformed values fall back to defaults
    pub fn from_values(api_base: Option<String>, notification_ms: Option<String>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or(defaults.api_base);
        let notification_timeout_ms = notification_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.notification_timeout_ms);
        Self { api_base, notification_timeout_ms }
    }

    /// Load from the current document
    pub fn from_document() -> Self {
        Self::from_values(read_meta(API_BASE_META), read_meta(NOTIFICATION_MS_META))
    }

    /// Join a service path (e.g. `/tasks/`) onto the base
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_values(None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.url("/tasks/"), "/api/tasks/");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::from_values(Some("https://todo.example.com/api/".into()), None);
        assert_eq!(config.url("/stats/"), "https://todo.example.com/api/stats/");
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = ClientConfig::from_values(Some("  ".into()), Some("soon".into()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.notification_timeout_ms, DEFAULT_NOTIFICATION_MS);

        let zero = ClientConfig::from_values(None, Some("0".into()));
        assert_eq!(zero.notification_timeout_ms, DEFAULT_NOTIFICATION_MS);
    }

    #[test]
    fn test_custom_timeout() {
        let config = ClientConfig::from_values(None, Some("2500".into()));
        assert_eq!(config.notification_timeout_ms, 2500);
    }
}
