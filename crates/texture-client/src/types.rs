//! Client configuration.

use texture_types::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Configuration for the Messages client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (without `/v1/messages`).
    pub base_url: String,
    /// Sent as `x-api-key`.
    pub api_key: String,
    /// Model identifier for both pipeline stages.
    pub model: String,
    /// Token budget per request.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Sent as `anthropic-version`.
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: 120,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `ANTHROPIC_API_KEY`, `ANTHROPIC_BASE_URL` and
    /// `TEXTURE_SEARCH_MODEL` when set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = env_value("ANTHROPIC_API_KEY") {
            config.api_key = key;
        }
        if let Some(url) = env_value("ANTHROPIC_BASE_URL") {
            config.base_url = url;
        }
        if let Some(model) = env_value("TEXTURE_SEARCH_MODEL") {
            config.model = model;
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::missing("api_key"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::missing("model"));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::invalid("max_tokens", "must be greater than zero"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid("base_url", e.to_string()))?;
        Ok(())
    }

    pub(crate) fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ClientConfig {
        ClientConfig { api_key: "sk-test".to_string(), ..Default::default() }
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.messages_url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_validate_requires_api_key() {
        assert_eq!(ClientConfig::default().validate(), Err(ConfigError::missing("api_key")));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig { max_tokens: 0, ..valid() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { ref field, .. }) if field == "max_tokens"));

        let config = ClientConfig { base_url: "not a url".to_string(), ..valid() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { ref field, .. }) if field == "base_url"));
    }

    #[test]
    fn test_messages_url_strips_trailing_slash() {
        let config = ClientConfig { base_url: "http://127.0.0.1:9000/".to_string(), ..valid() };
        assert_eq!(config.messages_url(), "http://127.0.0.1:9000/v1/messages");
    }
}
