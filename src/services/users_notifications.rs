//! Per-user notification settings and subscriptions.

use super::ListParams;
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{NotificationSettings, Subscription};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/users-notifications/v1";

/// Service for per-user notification operations.
pub struct UsersNotificationsService<'a> {
    client: &'a IconikClient,
}

impl<'a> UsersNotificationsService<'a> {
    /// Creates a new users-notifications service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets a user's notification delivery settings.
    pub async fn settings(
        &self,
        user_id: &str,
    ) -> IconikResult<ApiResponse<NotificationSettings>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("users/{}/settings/", user_id),
                Vec::new(),
            )
            .await
    }

    /// Partially updates a user's notification delivery settings.
    pub async fn update_settings(
        &self,
        user_id: &str,
        body: impl Into<Body<NotificationSettingsUpdate>>,
    ) -> IconikResult<ApiResponse<NotificationSettings>> {
        self.client
            .patch(
                SERVER_PREFIX,
                &format!("users/{}/settings/", user_id),
                &body.into(),
            )
            .await
    }

    /// Lists one page of a user's subscriptions.
    pub async fn subscriptions(
        &self,
        user_id: &str,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Subscription>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("users/{}/subscriptions/", user_id),
                params.to_query(),
            )
            .await
    }

    /// Subscribes a user to events on an object.
    pub async fn create_subscription(
        &self,
        user_id: &str,
        body: impl Into<Body<SubscriptionCreate>>,
    ) -> IconikResult<ApiResponse<Subscription>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("users/{}/subscriptions/", user_id),
                &body.into(),
            )
            .await
    }

    /// Deletes a subscription.
    pub async fn delete_subscription(
        &self,
        user_id: &str,
        subscription_id: &str,
    ) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(
                SERVER_PREFIX,
                &format!("users/{}/subscriptions/{}/", user_id, subscription_id),
            )
            .await
    }
}

/// Partial update of notification delivery settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationSettingsUpdate {
    /// Deliver by email.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email_enabled: Field<bool>,
    /// Deliver in-app.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub in_app_enabled: Field<bool>,
    /// Suppressed event types.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub muted_event_types: Field<Vec<String>>,
}

/// Request to subscribe to events on an object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionCreate {
    /// Watched object identifier.
    pub object_id: String,
    /// Watched object type.
    pub object_type: String,
    /// Event type to subscribe to; all events when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}
