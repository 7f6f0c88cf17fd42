//! Collection domain types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStatus {
    /// Visible and usable.
    Active,
    /// Soft-deleted.
    Deleted,
    /// Hidden from listings.
    Hidden,
}

/// Custom ordering mode for collection contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomOrderStatus {
    /// Custom ordering enabled.
    Enabled,
    /// Custom ordering disabled.
    Disabled,
    /// Ordering is being recomputed.
    Reordering,
}

/// A collection of assets and sub-collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Lifecycle status. The upstream schema assigns `""` here despite the
    /// enum typing; absent means unknown.
    #[serde(default)]
    pub status: Option<CollectionStatus>,
    /// Custom ordering mode; same upstream `""` default, fixed to absent.
    #[serde(default)]
    pub custom_order_status: Option<CustomOrderStatus>,
    /// Parent collection identifier.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Identifier in an external system.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    /// Identifier of the creating user.
    #[serde(default)]
    pub created_by_user: Option<String>,
    /// Whether this is a root collection.
    #[serde(default)]
    pub is_root: bool,
}

impl PageItem for Collection {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}

/// One entry in a collection's contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Identifier of the contained object.
    pub object_id: String,
    /// Type of the contained object (`assets` or `collections`).
    pub object_type: String,
    /// Creation timestamp of the membership.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Position under custom ordering.
    #[serde(default)]
    pub position: Option<u64>,
}

impl PageItem for CollectionItem {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}
