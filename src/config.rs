//! Client configuration loaded from environment variables.
//!
//! Only the API base URL is required; presentation defaults (avatar,
//! post-login home route) fall back to the values the console ships with.

use std::env;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the console backend API (no trailing slash)
    pub api_base_url: String,
    /// Avatar shown for profiles that carry none of their own
    pub default_avatar: String,
    /// Route users land on after a successful login
    pub default_home_path: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            default_avatar: "/static/images/avatar-default.svg".to_string(),
            default_home_path: "/analytics".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("CONSOLE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("CONSOLE_API_URL"))?,
            default_avatar: env::var("CONSOLE_DEFAULT_AVATAR")
                .unwrap_or_else(|_| "/static/images/avatar-default.svg".to_string()),
            default_home_path: env::var("CONSOLE_DEFAULT_HOME")
                .unwrap_or_else(|_| "/analytics".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("CONSOLE_API_URL", "http://localhost:9000/");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.default_home_path, "/analytics");
    }
}
