use crate::config::Config;
use crate::models::{error::AppError, property::Property, stats::StatRecord};
use serde::de::DeserializeOwned;

// ENDPOINTS
const ROOM_STATS_PATH: &str = "properties/stats/per-room";
const PROPERTIES_PATH: &str = "properties/";

// API CONFIGURATION
/// Configuration for the property statistics API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the per-room statistics endpoint.
    pub fn room_stats_url(&self) -> String {
        self.join(ROOM_STATS_PATH)
    }

    /// Full URL of the listings endpoint.
    pub fn properties_url(&self) -> String {
        self.join(PROPERTIES_PATH)
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// STATS CLIENT
/// HTTP client for the property statistics API.
pub struct StatsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StatsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches per-room property counts and average prices.
    pub async fn fetch_room_stats(&self) -> Result<Vec<StatRecord>, AppError> {
        self.fetch_json(&self.config.room_stats_url()).await
    }

    /// Fetches the latest listings.
    pub async fn fetch_properties(&self) -> Result<Vec<Property>, AppError> {
        self.fetch_json(&self.config.properties_url()).await
    }

    /// Issues a single GET and decodes the body as JSON. No retries.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse response: {e}")))
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        429 => AppError::RateLimited,
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches any JSON document from a fully-qualified URL with a default client.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    StatsClient::new()?.fetch_json(url).await
}
