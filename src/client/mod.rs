//! iconik API client implementation.

use crate::body::{Body, DumpPolicy};
use crate::config::{IconikConfig, IconikConfigBuilder, RetryConfig};
use crate::envelope::{ApiResponse, RawResponse};
use crate::errors::IconikResult;
use crate::observability::Metrics;
use crate::pagination::PaginationConfig;
use crate::services::*;
use crate::transport::{MultipartField, Payload, RequestOptions, Transport};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// iconik API client.
///
/// Holds one transport (one HTTP session) and exposes an accessor per
/// resource group. Safe to share across threads; configuration is captured
/// at construction and never mutated.
pub struct IconikClient {
    /// HTTP transport.
    transport: Transport,
    /// Configuration.
    config: IconikConfig,
    /// Request counters.
    metrics: Arc<Metrics>,
}

impl IconikClient {
    /// Creates a new iconik client.
    pub fn new(config: IconikConfig) -> IconikResult<Self> {
        config.validate()?;
        let metrics = Arc::new(Metrics::new());
        let transport = Transport::new(&config, metrics.clone())?;
        Ok(Self {
            transport,
            config,
            metrics,
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> IconikClientBuilder {
        IconikClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Gets the configuration.
    pub fn config(&self) -> &IconikConfig {
        &self.config
    }

    /// Gets the request counters.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // Service accessors

    /// Gets the assets service.
    pub fn assets(&self) -> AssetsService {
        AssetsService::new(self)
    }

    /// Gets the collections service.
    pub fn collections(&self) -> CollectionsService {
        CollectionsService::new(self)
    }

    /// Gets the files service.
    pub fn files(&self) -> FilesService {
        FilesService::new(self)
    }

    /// Gets the metadata service.
    pub fn metadata(&self) -> MetadataService {
        MetadataService::new(self)
    }

    /// Gets the search service.
    pub fn search(&self) -> SearchService {
        SearchService::new(self)
    }

    /// Gets the jobs service.
    pub fn jobs(&self) -> JobsService {
        JobsService::new(self)
    }

    /// Gets the transcode service.
    pub fn transcode(&self) -> TranscodeService {
        TranscodeService::new(self)
    }

    /// Gets the ACLs service.
    pub fn acls(&self) -> AclsService {
        AclsService::new(self)
    }

    /// Gets the auth service.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self)
    }

    /// Gets the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self)
    }

    /// Gets the settings service.
    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self)
    }

    /// Gets the notifications service.
    pub fn notifications(&self) -> NotificationsService {
        NotificationsService::new(self)
    }

    /// Gets the stats service.
    pub fn stats(&self) -> StatsService {
        StatsService::new(self)
    }

    /// Gets the automations service.
    pub fn automations(&self) -> AutomationsService {
        AutomationsService::new(self)
    }

    /// Gets the users-notifications service.
    pub fn users_notifications(&self) -> UsersNotificationsService {
        UsersNotificationsService::new(self)
    }

    // Binding helpers. Every endpoint method reduces to one of these;
    // the dump-policy rules live here so call sites cannot get them wrong.

    /// GET with query parameters, decoding into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        prefix: &str,
        path: &str,
        query: Vec<(String, String)>,
    ) -> IconikResult<ApiResponse<T>> {
        let raw = self
            .transport
            .send(Method::GET, prefix, path, RequestOptions::query(query))
            .await?;
        ApiResponse::decode(raw)
    }

    /// POST with a typed-or-raw body, decoding into `T`.
    pub(crate) async fn post<T, B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
    ) -> IconikResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Default,
    {
        self.post_with_query(prefix, path, body, Vec::new()).await
    }

    /// POST with a body and query parameters, decoding into `T`.
    pub(crate) async fn post_with_query<T, B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
        query: Vec<(String, String)>,
    ) -> IconikResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Default,
    {
        let options = RequestOptions {
            query,
            payload: Payload::Json(body.serialize(DumpPolicy::create())?),
            ..Default::default()
        };
        let raw = self.transport.send(Method::POST, prefix, path, options).await?;
        ApiResponse::decode(raw)
    }

    /// PUT with a typed-or-raw body, decoding into `T`.
    pub(crate) async fn put<T, B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
    ) -> IconikResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Default,
    {
        let options = RequestOptions::json(body.serialize(DumpPolicy::create())?);
        let raw = self.transport.send(Method::PUT, prefix, path, options).await?;
        ApiResponse::decode(raw)
    }

    /// PATCH with a typed-or-raw body, decoding into `T`. Typed bodies
    /// serialize under the patch policy so unassigned fields never reach
    /// the wire.
    pub(crate) async fn patch<T, B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
    ) -> IconikResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Default,
    {
        let options = RequestOptions::json(body.serialize(DumpPolicy::patch())?);
        let raw = self.transport.send(Method::PATCH, prefix, path, options).await?;
        ApiResponse::decode(raw)
    }

    /// POST with no declared response DTO.
    pub(crate) async fn post_empty<B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
    ) -> IconikResult<ApiResponse<()>>
    where
        B: Serialize + Default,
    {
        let options = RequestOptions::json(body.serialize(DumpPolicy::create())?);
        let raw = self.transport.send(Method::POST, prefix, path, options).await?;
        Ok(ApiResponse::empty(raw))
    }

    /// DELETE with no body and no declared response DTO.
    pub(crate) async fn delete(&self, prefix: &str, path: &str) -> IconikResult<ApiResponse<()>> {
        let raw = self
            .transport
            .send(Method::DELETE, prefix, path, RequestOptions::default())
            .await?;
        Ok(ApiResponse::empty(raw))
    }

    /// DELETE with a body (bulk operations); serialized like POST.
    pub(crate) async fn delete_with_body<B>(
        &self,
        prefix: &str,
        path: &str,
        body: &Body<B>,
    ) -> IconikResult<ApiResponse<()>>
    where
        B: Serialize + Default,
    {
        let options = RequestOptions::json(body.serialize(DumpPolicy::create())?);
        let raw = self
            .transport
            .send(Method::DELETE, prefix, path, options)
            .await?;
        Ok(ApiResponse::empty(raw))
    }

    /// POST raw bytes with an explicit content type, decoding into `T`.
    /// Bypasses the dump step entirely.
    pub(crate) async fn post_raw<T: DeserializeOwned>(
        &self,
        prefix: &str,
        path: &str,
        bytes: bytes::Bytes,
        content_type: &str,
    ) -> IconikResult<ApiResponse<T>> {
        let options = RequestOptions {
            payload: Payload::Raw {
                bytes,
                content_type: content_type.to_string(),
            },
            ..Default::default()
        };
        let raw = self.transport.send(Method::POST, prefix, path, options).await?;
        ApiResponse::decode(raw)
    }

    /// POST multipart form data (binary uploads), decoding into `T`.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        prefix: &str,
        path: &str,
        fields: Vec<MultipartField>,
    ) -> IconikResult<ApiResponse<T>> {
        let options = RequestOptions {
            payload: Payload::Multipart(fields),
            ..Default::default()
        };
        let raw = self.transport.send(Method::POST, prefix, path, options).await?;
        ApiResponse::decode(raw)
    }

    /// Executes a request and returns the raw response without decoding.
    pub async fn raw_request(
        &self,
        method: Method,
        prefix: &str,
        path: &str,
        options: RequestOptions,
    ) -> IconikResult<RawResponse> {
        self.transport.send(method, prefix, path, options).await
    }
}

/// Builder for IconikClient.
pub struct IconikClientBuilder {
    config_builder: IconikConfigBuilder,
}

impl IconikClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: IconikConfig::builder(),
        }
    }

    /// Sets the base URL (e.g. a staging environment).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the application identifier.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.app_id(app_id);
        self
    }

    /// Sets the authentication token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.auth_token(token);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.config_builder = self.config_builder.retry(config);
        self
    }

    /// Disables retries.
    pub fn no_retry(mut self) -> Self {
        self.config_builder = self.config_builder.no_retry();
        self
    }

    /// Sets the pagination configuration.
    pub fn pagination(mut self, config: PaginationConfig) -> Self {
        self.config_builder = self.config_builder.pagination(config);
        self
    }

    /// Builds the client.
    pub fn build(self) -> IconikResult<IconikClient> {
        let config = self.config_builder.build()?;
        IconikClient::new(config)
    }
}

impl Default for IconikClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d";

    #[test]
    fn test_client_builder() {
        let result = IconikClient::builder()
            .app_id(APP_ID)
            .auth_token("tok_xxxx")
            .build();

        assert!(result.is_ok());
        assert_eq!(result.unwrap().base_url(), "https://app.iconik.io");
    }

    #[test]
    fn test_client_builder_requires_auth() {
        assert!(IconikClient::builder().app_id(APP_ID).build().is_err());
    }

    #[test]
    fn test_client_base_url_override() {
        let client = IconikClient::builder()
            .base_url("https://staging.iconik.io")
            .app_id(APP_ID)
            .auth_token("tok_xxxx")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://staging.iconik.io");
    }
}
