//! # API Configuration
//!
//! Explicit configuration for the remote service boundary.
//!
//! One `ApiConfig` is constructed when the portal session starts and
//! passed down to the client; there are no ambient singletons and no
//! environment reads inside the engine.

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Configuration for the loyalty service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Creates a config from an absolute base URL.
    ///
    /// The base is normalized to end with `/` so endpoint paths join
    /// predictably.
    ///
    /// ## Example
    /// ```rust
    /// use lealta_api::ApiConfig;
    ///
    /// let config = ApiConfig::new("https://api.lealta.example/v1").unwrap();
    /// assert_eq!(config.base_url().as_str(), "https://api.lealta.example/v1/");
    /// ```
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut base = base_url.trim().to_string();
        if base.is_empty() {
            return Err(ApiError::InvalidBaseUrl("base URL is empty".to_string()));
        }
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url = Url::parse(&base)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        Ok(ApiConfig { base_url })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base.
    pub(crate) fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}
