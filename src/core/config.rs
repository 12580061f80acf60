//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Filter used when `LOG_FILTER` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directives
    /// Example: info,openhospital_login=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("LOG_FILTER").ok(),
        }
    }

    /// Check if a log filter is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Configured filter, or [`DEFAULT_LOG_FILTER`] when unset or blank
    pub fn log_filter_or_default(&self) -> &str {
        match self.log_filter.as_deref() {
            Some(filter) if !filter.trim().is_empty() => filter,
            _ => DEFAULT_LOG_FILTER,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
