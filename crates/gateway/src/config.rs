use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Base URL baked in at build time, if the build set one.
const BUILD_API_ENDPOINT: Option<&str> = option_env!("API_ENDPOINT");

/// Resolve the API configuration once and return it.
///
/// Order: the build-time `API_ENDPOINT`, then (native builds only) the
/// runtime `API_ENDPOINT` from the environment or `.env`, then
/// `config.toml`, then the built-in default.
pub fn load() -> &'static ApiConfig {
    CONFIG.get_or_init(|| {
        let config = resolve(BUILD_API_ENDPOINT, runtime_endpoint(), config_file());
        tracing::info!(base_url = %config.base_url, "API configuration resolved");
        config
    })
}

/// Pick the effective configuration from the available sources.
pub fn resolve(
    build_endpoint: Option<&str>,
    runtime_endpoint: Option<String>,
    config_file: Option<String>,
) -> ApiConfig {
    let from_file = config_file.and_then(|raw| match AppConfig::from_toml(&raw) {
        Ok(config) => Some(config.api),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config file, ignoring it");
            None
        }
    });

    let endpoint = build_endpoint
        .map(str::to_string)
        .filter(|url| !url.trim().is_empty())
        .or(runtime_endpoint.filter(|url| !url.trim().is_empty()));

    match (endpoint, from_file) {
        (Some(url), Some(file)) => ApiConfig {
            base_url: url,
            ..file
        }
        .normalized(),
        (Some(url), None) => ApiConfig::with_base_url(url),
        (None, Some(file)) => file,
        (None, None) => ApiConfig::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_endpoint() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("API_ENDPOINT").ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_endpoint() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn config_file() -> Option<String> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!(error = %e, "{CONFIG_PATH} not found, using defaults");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn config_file() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FILE: &str = r#"
        [api]
        base_url = "http://files.example.com"
        with_credentials = false
        timeout_secs = 10
    "#;

    #[test]
    fn nothing_configured_uses_default() {
        assert_eq!(resolve(None, None, None), ApiConfig::default());
    }

    #[test]
    fn build_endpoint_wins() {
        let config = resolve(
            Some("https://build.example.com"),
            Some("https://runtime.example.com".into()),
            Some(FILE.into()),
        );
        assert_eq!(config.base_url, "https://build.example.com/");
        assert!(!config.with_credentials);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn runtime_endpoint_beats_file() {
        let config = resolve(None, Some("https://runtime.example.com/".into()), Some(FILE.into()));
        assert_eq!(config.base_url, "https://runtime.example.com/");
    }

    #[test]
    fn file_used_when_no_endpoint() {
        let config = resolve(None, None, Some(FILE.into()));
        assert_eq!(config.base_url, "http://files.example.com/");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn broken_file_is_ignored() {
        assert_eq!(resolve(None, None, Some("[api".into())), ApiConfig::default());
    }

    #[test]
    fn blank_endpoint_is_ignored() {
        assert_eq!(resolve(None, Some("  ".into()), None), ApiConfig::default());
    }

    #[test]
    fn blank_build_endpoint_falls_through_to_runtime() {
        let config = resolve(Some(""), Some("https://runtime.example.com".into()), Some(FILE.into()));
        assert_eq!(config.base_url, "https://runtime.example.com/");
        assert_eq!(config.timeout_secs, 10);
    }
}
