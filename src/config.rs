//! Application Configuration
//!
//! Where the task store lives and how chatty the console log is.
//! Build-time values come from `TASK_API_URL` / `TASK_LOG_LEVEL`; a
//! `<meta name="task-api-url">` tag in the host page wins over both.

use std::str::FromStr;

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::TaskId;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/tasks";

const API_URL_META: &str = "meta[name=\"task-api-url\"]";

/// Characters escaped when an id becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    api_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, LevelFilter::Info)
    }
}

impl AppConfig {
    pub fn new(api_url: &str, log_level: LevelFilter) -> Self {
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Build-time configuration only
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TASK_API_URL"), option_env!("TASK_LOG_LEVEL"))
    }

    /// Build-time configuration, then the host page's meta override
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(url) = meta_api_url() {
            config = Self::new(&url, config.log_level);
        }
        config
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url.filter(|s| !s.trim().is_empty()).unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|s| LevelFilter::from_str(s).ok())
            .unwrap_or(LevelFilter::Info);
        Self::new(api_url, log_level)
    }

    pub fn collection_url(&self) -> &str {
        &self.api_url
    }

    pub fn item_url(&self, id: &TaskId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.api_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_URL_META).ok()??;
    meta.get_attribute("content").filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.collection_url(), "http://localhost:3000/tasks");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::from_values(Some("https://api.example.com/v1/tasks/"), Some("debug"));
        assert_eq!(config.collection_url(), "https://api.example.com/v1/tasks");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_or_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.collection_url(), DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_item_url() {
        let config = AppConfig::default();
        assert_eq!(config.item_url(&TaskId::Number(7)), "http://localhost:3000/tasks/7");
        assert_eq!(config.item_url(&TaskId::from("a/b c")), "http://localhost:3000/tasks/a%2Fb%20c");
    }
}
