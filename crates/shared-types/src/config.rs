use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";

/// Connection settings for the REST backend.
///
/// Every field has a default so that a missing or partial `config.toml`
/// still produces a usable client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Send the session cookie with every request.
    #[serde(default = "default_true")]
    pub with_credentials: bool,
    /// Request timeout. Browsers manage their own, so wasm builds ignore it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            with_credentials: true,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Trim the base URL and make sure it ends with `/` so relative
    /// endpoint paths join underneath it.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim();
        self.base_url = if trimmed.is_empty() {
            default_base_url()
        } else if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        self
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(raw)?;
        config.api = config.api.normalized();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000/");
        assert!(config.api.with_credentials);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://onboard.example.com/backend"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://onboard.example.com/backend/");
        assert!(config.api.with_credentials);
    }

    #[test]
    fn full_toml_is_read() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "http://127.0.0.1:9000/"
            with_credentials = false
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api,
            ApiConfig {
                base_url: "http://127.0.0.1:9000/".into(),
                with_credentials: false,
                timeout_secs: 5,
            }
        );
    }

    #[test]
    fn blank_base_url_falls_back() {
        assert_eq!(ApiConfig::with_base_url("  ").base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("[api\nbase_url = 1").is_err());
    }
}
