//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the reverse proxy that serves the `/api/...` paths
    pub api_base_url: String,
    /// Where the session keys are persisted; in-memory when unset
    pub session_file: Option<PathBuf>,
    /// Per-request timeout for the HTTP client
    pub http_timeout: Duration,

    // --- Optional credentials for unattended sign-in ---
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("DEALSCOUT_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "DEALSCOUT_API_URL",
                reason: format!("expected an http(s) URL, got {:?}", api_base_url),
            });
        }

        let http_timeout = match env::var("DEALSCOUT_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid {
                    name: "DEALSCOUT_HTTP_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            session_file: env::var("DEALSCOUT_SESSION_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            http_timeout: Duration::from_secs(http_timeout),
            email: non_empty_var("DEALSCOUT_EMAIL"),
            password: non_empty_var("DEALSCOUT_PASSWORD"),
        })
    }

    /// Config pointing at a given API origin, for tests only.
    pub fn test_default(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_file: None,
            http_timeout: Duration::from_secs(5),
            email: None,
            password: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DEALSCOUT_API_URL", "http://127.0.0.1:9000/");
        env::set_var("DEALSCOUT_HTTP_TIMEOUT_SECS", "7");
        env::remove_var("DEALSCOUT_SESSION_FILE");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.http_timeout, Duration::from_secs(7));
        assert!(config.session_file.is_none());

        env::remove_var("DEALSCOUT_API_URL");
        env::remove_var("DEALSCOUT_HTTP_TIMEOUT_SECS");
    }

    #[test]
    fn test_test_default_strips_trailing_slash() {
        let config = Config::test_default("http://localhost:1234/");
        assert_eq!(config.api_base_url, "http://localhost:1234");
    }
}
