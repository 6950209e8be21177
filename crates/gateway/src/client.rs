use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, AppError};

/// Configured HTTP client rooted at the backend base URL.
///
/// Cheap to clone; clones share the connection pool and, on native
/// builds, the cookie jar that carries the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let config = config.normalized();
        let base = Url::parse(&config.base_url).map_err(|e| {
            AppError::internal(format!("Invalid API base URL '{}': {e}", config.base_url))
        })?;
        let http = build_http(&config)?;
        Ok(Self { http, base, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve an endpoint path (such as `api/forms/`) under the base URL.
    pub fn url(&self, path: &str) -> Result<Url, AppError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::internal(format!("Invalid endpoint path '{path}': {e}")))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let builder = self.http.request(method, self.url(path)?);
        #[cfg(target_arch = "wasm32")]
        let builder = if self.config.with_credentials {
            builder.fetch_credentials_include()
        } else {
            builder
        };
        Ok(builder)
    }

    /// Send a request. Only transport failures are errors here.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response, AppError> {
        request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request did not reach the backend");
            AppError::network("Could not reach the server. Check your connection and try again.")
        })
    }

    /// Send a request and turn any non-2xx answer into an [`AppError`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = self.execute(request).await?;
        error_for_status(response).await
    }
}

/// Two clients are interchangeable when they were built from the same settings.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ApiConfig) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .cookie_store(config.with_credentials)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ApiConfig) -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::new())
}

pub(crate) async fn error_for_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %url, "backend returned an error");
    Err(AppError::from_response(status.as_u16(), &body))
}

/// Fail unless the backend answered with exactly `expected`.
pub(crate) fn expect_status(response: &Response, expected: StatusCode) -> Result<(), AppError> {
    let status = response.status();
    if status == expected {
        Ok(())
    } else {
        tracing::warn!(
            expected = expected.as_u16(),
            status = status.as_u16(),
            "unexpected success status"
        );
        Err(AppError::internal(format!(
            "Expected status {expected}, got {status}"
        )))
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "unreadable response body");
        AppError::internal(format!("Unexpected response from the server: {e}"))
    })
}
