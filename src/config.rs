//! Application Configuration
//!
//! Values are baked in at build time from the environment trunk runs in:
//! `PIXEL_TODO_API_URL`, `PIXEL_TODO_TOAST_MS` and `PIXEL_TODO_LOG`.

use log::LevelFilter;
use url::Url;

use crate::models::TaskId;

pub const DEFAULT_API_URL: &str = "https://todoapitest.juansegaliz.com/todos";
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection endpoint, without trailing slash
    pub api_url: String,
    /// How long a toast stays on screen
    pub toast_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            toast_ms: DEFAULT_TOAST_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PIXEL_TODO_API_URL"),
            option_env!("PIXEL_TODO_TOAST_MS"),
            option_env!("PIXEL_TODO_LOG"),
        )
    }

    /// Build from raw values, keeping the default for anything missing or invalid
    pub fn from_values(api_url: Option<&str>, toast_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = api_url {
            match validate_api_url(raw) {
                Ok(url) => config.api_url = url,
                Err(msg) => log::warn!("[CONFIG] Ignoring PIXEL_TODO_API_URL: {}", msg),
            }
        }
        if let Some(ms) = toast_ms.and_then(|v| v.trim().parse::<u32>().ok()) {
            if ms > 0 {
                config.toast_ms = ms;
            }
        }
        if let Some(level) = log_level.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn collection_url(&self) -> &str {
        &self.api_url
    }

    pub fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.api_url, id)
    }
}

fn validate_api_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("{}: {}", raw, e))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("URL must use http or https scheme, got: {}", url.scheme()));
    }
    if url.host().is_none() {
        return Err("URL must have a host".to_string());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.collection_url(), DEFAULT_API_URL);
        assert_eq!(config.toast_ms, 3000);
    }

    #[test]
    fn test_task_url() {
        let config = AppConfig::default();
        assert_eq!(config.task_url(12), "https://todoapitest.juansegaliz.com/todos/12");
    }

    #[test]
    fn test_custom_url_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("http://localhost:8080/api/todos/"), None, None);
        assert_eq!(config.api_url, "http://localhost:8080/api/todos");
        assert_eq!(config.task_url(1), "http://localhost:8080/api/todos/1");
    }

    #[test]
    fn test_invalid_url_falls_back() {
        let config = AppConfig::from_values(Some("not-a-url"), None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = AppConfig::from_values(Some("ftp://example.com/todos"), None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_toast_and_log_level() {
        let config = AppConfig::from_values(None, Some("5000"), Some("debug"));
        assert_eq!(config.toast_ms, 5000);
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::from_values(None, Some("0"), Some("loud"));
        assert_eq!(config.toast_ms, DEFAULT_TOAST_MS);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
