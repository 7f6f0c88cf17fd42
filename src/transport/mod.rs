//! HTTP transport for the iconik API.
//!
//! Owns the `reqwest` session (one connection pool per client), applies the
//! constant header set, builds URLs from base + server prefix + path tail,
//! and executes requests under the retry policy.
//!
//! Retry applies to connect/timeout failures and 5xx responses, with
//! exponential backoff (`retry_delay * retry_backoff^(attempt-1)`). The
//! policy is verb-agnostic: POST/PUT/DELETE are retried exactly like GET.
//! iconik write operations are idempotent or duplicate-tolerant, which is
//! what makes this safe; disable retries via `RetryConfig` otherwise.
//! When every attempt ends in a 5xx the last response is returned for the
//! caller to inspect; when every attempt ends in a network error there is
//! nothing to surface and the error is returned instead.

use crate::auth::Credentials;
use crate::config::IconikConfig;
use crate::envelope::RawResponse;
use crate::errors::{IconikError, IconikResult};
use crate::observability::Metrics;
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// One field of a multipart/form-data upload.
#[derive(Debug, Clone)]
pub struct MultipartField {
    /// Form field name.
    pub name: String,
    /// File name, when the field carries a file.
    pub file_name: Option<String>,
    /// MIME type of the part.
    pub content_type: String,
    /// Part payload.
    pub data: Bytes,
}

impl MultipartField {
    /// Creates a file part.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: content_type.into(),
            data,
        }
    }
}

/// Request payload variants.
#[derive(Debug, Clone)]
pub enum Payload {
    /// No body.
    None,
    /// JSON body, already serialized under the method's dump policy.
    Json(serde_json::Value),
    /// URL-encoded form body.
    Form(Vec<(String, String)>),
    /// Raw bytes with an explicit content type.
    Raw {
        /// Body bytes.
        bytes: Bytes,
        /// Content-Type header value.
        content_type: String,
    },
    /// Multipart form data (logo/photo uploads).
    Multipart(Vec<MultipartField>),
}

/// Per-call request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Query parameters; only provided, non-null values belong here.
    pub query: Vec<(String, String)>,
    /// Request payload.
    pub payload: Payload,
    /// Extra headers merged over the defaults for this call only.
    pub headers: Option<HeaderMap>,
    /// Per-call timeout override, for callers tightening their budget.
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            query: Vec::new(),
            payload: Payload::None,
            headers: None,
            timeout: None,
        }
    }
}

impl RequestOptions {
    /// Options with only query parameters.
    pub fn query(query: Vec<(String, String)>) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    /// Options with only a JSON payload.
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            payload: Payload::Json(value),
            ..Default::default()
        }
    }
}

/// HTTP transport owning the session.
pub struct Transport {
    http: Client,
    base_url: String,
    timeout: Duration,
    retry: crate::config::RetryConfig,
    metrics: Arc<Metrics>,
}

impl Transport {
    /// Creates a transport from the client configuration.
    pub fn new(config: &IconikConfig, metrics: Arc<Metrics>) -> IconikResult<Self> {
        let credentials = Credentials::new(
            config.app_id.clone(),
            config
                .auth_token
                .clone()
                .ok_or_else(|| IconikError::configuration("Auth-Token is required"))?,
        );
        let default_headers = credentials.default_headers(&config.user_agent)?;

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                IconikError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            retry: config.retry.clone(),
            metrics,
        })
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a request under the retry policy and returns the raw
    /// response. Never fails for non-2xx statuses.
    pub async fn send(
        &self,
        method: Method,
        prefix: &str,
        path: &str,
        options: RequestOptions,
    ) -> IconikResult<RawResponse> {
        let url = self.build_url(prefix, path);
        let max_attempts = if self.retry.enabled {
            self.retry.max_attempts.max(1)
        } else {
            1
        };

        self.metrics.record_request();
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.dispatch(method.clone(), &url, &options).await {
                Ok(raw) => {
                    if raw.is_server_error() && attempt < max_attempts {
                        self.backoff_sleep(&method, &url, attempt, raw.status).await;
                        continue;
                    }
                    if raw.ok() {
                        self.metrics.record_success();
                    } else {
                        self.metrics.record_failure();
                    }
                    return Ok(raw);
                }
                Err(e) => {
                    if e.is_retryable() && attempt < max_attempts {
                        self.backoff_sleep(&method, &url, attempt, 0).await;
                        continue;
                    }
                    self.metrics.record_failure();
                    return Err(e);
                }
            }
        }
    }

    async fn backoff_sleep(&self, method: &Method, url: &str, attempt: u32, status: u16) {
        let delay = self.retry.backoff(attempt);
        self.metrics.record_retry();
        tracing::debug!(
            method = %method,
            url = %url,
            attempt = attempt,
            status = status,
            delay_ms = delay.as_millis() as u64,
            "Retrying iconik request"
        );
        sleep(delay).await;
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> IconikResult<RawResponse> {
        let mut request = self
            .http
            .request(method, url)
            .timeout(options.timeout.unwrap_or(self.timeout));

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }

        if let Some(ref headers) = options.headers {
            request = request.headers(headers.clone());
        }

        request = match &options.payload {
            Payload::None => request,
            Payload::Json(value) => request.json(value),
            Payload::Form(pairs) => request.form(pairs),
            Payload::Raw {
                bytes,
                content_type,
            } => request
                .header(CONTENT_TYPE, content_type.as_str())
                .body(bytes.clone()),
            Payload::Multipart(fields) => {
                let mut form = reqwest::multipart::Form::new();
                for field in fields {
                    let mut part = reqwest::multipart::Part::bytes(field.data.to_vec())
                        .mime_str(&field.content_type)
                        .map_err(|e| {
                            IconikError::invalid_parameter(format!(
                                "Invalid multipart content type: {}",
                                e
                            ))
                        })?;
                    if let Some(ref file_name) = field.file_name {
                        part = part.file_name(file_name.clone());
                    }
                    form = form.part(field.name.clone(), part);
                }
                request.multipart(form)
            }
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                IconikError::timeout(format!("Request timed out: {}", e)).with_cause(e)
            } else {
                IconikError::connection(format!("Request failed: {}", e)).with_cause(e)
            }
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| {
            IconikError::connection(format!("Failed to read response body: {}", e)).with_cause(e)
        })?;

        Ok(RawResponse::new(status, headers, body))
    }

    fn build_url(&self, prefix: &str, path: &str) -> String {
        let prefix = prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", self.base_url, path)
        } else {
            format!("{}/{}/{}", self.base_url, prefix, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconikConfig;

    fn transport() -> Transport {
        let config = IconikConfig::builder()
            .app_id("8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d")
            .auth_token("tok")
            .build()
            .unwrap();
        Transport::new(&config, Arc::new(Metrics::new())).unwrap()
    }

    #[test]
    fn test_build_url() {
        let transport = transport();
        assert_eq!(
            transport.build_url("API/assets/v1/", "assets/abc/"),
            "https://app.iconik.io/API/assets/v1/assets/abc/"
        );
        assert_eq!(
            transport.build_url("API/search/v1", "/search/"),
            "https://app.iconik.io/API/search/v1/search/"
        );
        assert_eq!(
            transport.build_url("", "health/"),
            "https://app.iconik.io/health/"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = IconikConfig::builder()
            .base_url("https://staging.iconik.io/")
            .app_id("8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d")
            .auth_token("tok")
            .build()
            .unwrap();
        let transport = Transport::new(&config, Arc::new(Metrics::new())).unwrap();
        assert_eq!(
            transport.build_url("API/files/v1/", "storages/"),
            "https://staging.iconik.io/API/files/v1/storages/"
        );
    }

    #[test]
    fn test_multipart_field_file() {
        let field = MultipartField::file("logo", "logo.png", "image/png", Bytes::from_static(b"x"));
        assert_eq!(field.name, "logo");
        assert_eq!(field.file_name.as_deref(), Some("logo.png"));
        assert_eq!(field.content_type, "image/png");
    }
}
