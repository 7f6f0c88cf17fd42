//! Notification and webhook domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A delivered in-app notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier.
    pub id: String,
    /// Event that produced the notification, e.g. `assets.create`.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Identifier of the object the event concerns.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Type of the object the event concerns.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub is_read: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Status of a webhook endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookStatus {
    /// Deliveries enabled.
    Enabled,
    /// Deliveries suspended.
    Disabled,
    /// Disabled after repeated delivery failures.
    Failed,
}

/// A registered webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook identifier.
    pub id: String,
    /// Delivery URL.
    pub url: String,
    /// Event type the webhook subscribes to.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Object type filter.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Delivery status.
    #[serde(default)]
    pub status: Option<WebhookStatus>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Per-user notification delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Identifier of the owning user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Deliver by email.
    #[serde(default)]
    pub email_enabled: bool,
    /// Deliver in-app.
    #[serde(default)]
    pub in_app_enabled: bool,
    /// Suppressed event types.
    #[serde(default)]
    pub muted_event_types: Vec<String>,
}

/// A user's subscription to events on one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription identifier.
    pub id: String,
    /// Subscribing user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Watched object identifier.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Watched object type.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Event type subscribed to.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
