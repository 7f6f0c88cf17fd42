//! Configuration types for the iconik client.

use crate::errors::{IconikError, IconikErrorKind};
use crate::pagination::PaginationConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Default iconik API base URL.
pub const DEFAULT_BASE_URL: &str = "https://app.iconik.io";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-iconik/0.1.0";

/// Retry configuration for the transport.
///
/// The policy applies to every verb, POST/PUT/DELETE included; iconik
/// operations are idempotent or duplicate-tolerant. Set `enabled: false`
/// for callers that cannot accept duplicated writes.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum attempts, including the first.
    pub max_attempts: u32,
    /// Base delay before the first retry.
    pub retry_delay: Duration,
    /// Backoff multiplier applied per attempt.
    pub retry_backoff: f64,
    /// Enable retries.
    pub enabled: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            retry_backoff: 2.0,
            enabled: true,
        }
    }
}

impl RetryConfig {
    /// Calculates the backoff delay for a 1-indexed attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let millis = self.retry_delay.as_millis() as f64
            * self.retry_backoff.powi(attempt.saturating_sub(1) as i32);
        Duration::from_millis(millis as u64)
    }
}

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// iconik client configuration.
#[derive(Debug, Clone)]
pub struct IconikConfig {
    /// API base URL (scheme + host).
    pub base_url: String,
    /// Application identifier, sent as the `App-ID` header.
    pub app_id: String,
    /// Bearer token, sent as the `Auth-Token` header.
    pub auth_token: Option<SecretString>,
    /// Request timeout. Applies per attempt; a retry gets a fresh budget.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Retry configuration.
    pub retry: RetryConfig,
    /// Pagination configuration, used by the `*_paginated` methods.
    pub pagination: PaginationConfig,
    /// Connection pool configuration.
    pub pool: PoolConfig,
}

impl Default for IconikConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: String::new(),
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryConfig::default(),
            pagination: PaginationConfig::default(),
            pool: PoolConfig::default(),
        }
    }
}

impl IconikConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> IconikConfigBuilder {
        IconikConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), IconikError> {
        if self.base_url.is_empty() {
            return Err(IconikError::new(
                IconikErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            IconikError::new(
                IconikErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            )
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(IconikError::new(
                IconikErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        if self.app_id.is_empty() {
            return Err(IconikError::new(
                IconikErrorKind::MissingAuth,
                "App-ID is required",
            ));
        }
        if uuid::Uuid::parse_str(&self.app_id).is_err() {
            return Err(IconikError::new(
                IconikErrorKind::InvalidConfiguration,
                "App-ID must be a UUID string",
            ));
        }

        if self.auth_token.is_none() {
            return Err(IconikError::new(
                IconikErrorKind::MissingAuth,
                "Auth-Token is required",
            ));
        }

        Ok(())
    }
}

/// Builder for IconikConfig.
#[derive(Debug, Default)]
pub struct IconikConfigBuilder {
    base_url: Option<String>,
    app_id: Option<String>,
    auth_token: Option<SecretString>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: Option<RetryConfig>,
    pagination: Option<PaginationConfig>,
    pool: Option<PoolConfig>,
}

impl IconikConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL, e.g. for a staging environment.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the application identifier.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Sets the authentication token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(SecretString::new(token.into()));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    /// Disables retries.
    pub fn no_retry(mut self) -> Self {
        self.retry = Some(RetryConfig {
            enabled: false,
            ..Default::default()
        });
        self
    }

    /// Sets the pagination configuration.
    pub fn pagination(mut self, config: PaginationConfig) -> Self {
        self.pagination = Some(config);
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<IconikConfig, IconikError> {
        let config = IconikConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            app_id: self.app_id.unwrap_or_default(),
            auth_token: self.auth_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            retry: self.retry.unwrap_or_default(),
            pagination: self.pagination.unwrap_or_default(),
            pool: self.pool.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d";

    #[test]
    fn test_default_config() {
        let config = IconikConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = IconikConfig::builder()
            .base_url("https://staging.iconik.io")
            .app_id(APP_ID)
            .auth_token("tok_secret")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://staging.iconik.io");
        assert_eq!(config.app_id, APP_ID);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_auth() {
        let result = IconikConfig::builder().app_id(APP_ID).build();
        assert!(result.is_err());

        let result = IconikConfig::builder().auth_token("tok").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = IconikConfig::builder()
            .base_url("not-a-url")
            .app_id(APP_ID)
            .auth_token("tok")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_app_id() {
        let result = IconikConfig::builder()
            .app_id("not-a-uuid")
            .auth_token("tok")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_backoff_is_exponential() {
        let retry = RetryConfig {
            retry_delay: Duration::from_millis(100),
            retry_backoff: 2.0,
            ..Default::default()
        };
        assert_eq!(retry.backoff(1), Duration::from_millis(100));
        assert_eq!(retry.backoff(2), Duration::from_millis(200));
        assert_eq!(retry.backoff(3), Duration::from_millis(400));
    }
}
