//! API base URL configuration
//!
//! One setting: the base URL of the REST server. The resource prefix
//! `/api/v1` is fixed.

use url::Url;

use crate::api::Endpoint;
use crate::error::ConfigError;

/// Used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path prefix shared by every resource.
pub const API_PREFIX: &str = "/api/v1";

/// Environment variable selecting the base URL.
pub const BASE_URL_ENV: &str = "TRYOUT_API_URL";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Validated base URL without a trailing slash.
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse or is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed =
            Url::parse(trimmed).map_err(|e| ConfigError::invalid_base_url(trimmed, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                base_url: trimmed.trim_end_matches('/').to_string(),
            }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Build from an optional raw value; missing or blank means the default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a non-blank value is not a valid http(s) URL.
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| Ok(Self::default()), Self::new)
    }

    /// Read `TRYOUT_API_URL` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint, query string included.
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint.path_and_query())
    }
}
