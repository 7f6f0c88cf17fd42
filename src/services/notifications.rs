//! Notification and webhook operations.

use super::ListParams;
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{Notification, Webhook, WebhookStatus};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/notifications/v1";

/// Service for notification operations.
pub struct NotificationsService<'a> {
    client: &'a IconikClient,
}

impl<'a> NotificationsService<'a> {
    /// Creates a new notifications service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Lists one page of the calling user's notifications.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Notification>>> {
        self.client
            .get(SERVER_PREFIX, "notifications/", params.to_query())
            .await
    }

    /// Lists one page of registered webhooks.
    pub async fn webhooks(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Webhook>>> {
        self.client
            .get(SERVER_PREFIX, "webhooks/", params.to_query())
            .await
    }

    /// Gets a webhook.
    pub async fn get_webhook(&self, webhook_id: &str) -> IconikResult<ApiResponse<Webhook>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("webhooks/{}/", webhook_id),
                Vec::new(),
            )
            .await
    }

    /// Registers a webhook.
    pub async fn create_webhook(
        &self,
        body: impl Into<Body<WebhookCreate>>,
    ) -> IconikResult<ApiResponse<Webhook>> {
        self.client
            .post(SERVER_PREFIX, "webhooks/", &body.into())
            .await
    }

    /// Partially updates a webhook.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        body: impl Into<Body<WebhookUpdate>>,
    ) -> IconikResult<ApiResponse<Webhook>> {
        self.client
            .patch(
                SERVER_PREFIX,
                &format!("webhooks/{}/", webhook_id),
                &body.into(),
            )
            .await
    }

    /// Deletes a webhook.
    pub async fn delete_webhook(&self, webhook_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("webhooks/{}/", webhook_id))
            .await
    }
}

/// Request to register a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookCreate {
    /// Delivery URL.
    pub url: String,
    /// Event type to subscribe to, e.g. `assets.create`.
    pub event_type: String,
    /// Object type filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

/// Partial update of a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookUpdate {
    /// Delivery URL.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub url: Field<String>,
    /// Event type subscription.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub event_type: Field<String>,
    /// Delivery status.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<WebhookStatus>,
}
