use serde::{Deserialize, Serialize};

/// Default GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API (no trailing `/users/...` path)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// User-Agent header sent with every request (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional personal access token, sent as a bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("github-activity/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("timeout_secs = 3").unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.user_agent.starts_with("github-activity/"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_token_omitted_when_unset() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!content.contains("token"));
        assert!(content.contains("api_url"));
    }
}
