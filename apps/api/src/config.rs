use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SEARCH_API_URL: &str = "https://arda.torre.co/entities/_search";
pub const DEFAULT_PROFILE_API_URL: &str = "https://torre.ai/api/genome/bios";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numeric values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extra CORS origin on top of the built-in allow-list. Empty means none.
    pub frontend_url: String,
    pub search_api_url: String,
    pub profile_api_url: String,
    /// `None` leaves outbound calls without a deadline.
    pub upstream_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream_timeout = match optional_env("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            None => None,
        };

        Ok(Config {
            frontend_url: optional_env("FRONTEND_URL").unwrap_or_default(),
            search_api_url: optional_env("SEARCH_API_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_API_URL.to_string()),
            profile_api_url: optional_env("PROFILE_API_URL")
                .unwrap_or_else(|| DEFAULT_PROFILE_API_URL.to_string()),
            upstream_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frontend_url: String::new(),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            profile_api_url: DEFAULT_PROFILE_API_URL.to_string(),
            upstream_timeout: None,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
