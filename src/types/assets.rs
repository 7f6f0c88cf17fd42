//! Asset domain types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// Visible and usable.
    Active,
    /// Soft-deleted, recoverable from the delete queue.
    Deleted,
    /// Hidden from listings.
    Hidden,
}

/// Kind of asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// A regular media asset.
    Asset,
    /// A sequence of assets.
    Sequence,
    /// A placeholder awaiting media.
    Placeholder,
    /// A link to an external asset.
    Link,
}

/// A media asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Asset identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<AssetStatus>,
    /// Asset kind.
    #[serde(default, rename = "type")]
    pub asset_type: Option<AssetType>,
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
    /// Identifiers of collections containing this asset.
    #[serde(default)]
    pub in_collections: Vec<String>,
    /// Whether the asset is archived.
    #[serde(default)]
    pub is_archived: bool,
    /// Whether the asset is online.
    #[serde(default)]
    pub is_online: bool,
}

impl PageItem for Asset {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}

/// Kind of a timed segment on an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentType {
    /// A plain marker.
    Marker,
    /// A comment anchored to a time range.
    Comment,
    /// A speech-to-text fragment.
    Transcription,
    /// A detected scene.
    Scene,
}

/// A timed segment on an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier.
    pub id: String,
    /// Owning asset identifier.
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Segment kind.
    #[serde(default)]
    pub segment_type: Option<SegmentType>,
    /// Segment text (comment body, transcript fragment).
    #[serde(default)]
    pub segment_text: Option<String>,
    /// Marker color. The published schema misspells this field with a
    /// stray non-ASCII character; the service accepts the ASCII name.
    #[serde(default)]
    pub segment_color: Option<String>,
    /// Start offset in milliseconds.
    #[serde(default)]
    pub time_start_milliseconds: Option<u64>,
    /// End offset in milliseconds.
    #[serde(default)]
    pub time_end_milliseconds: Option<u64>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Identifier of the creating user.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A stored version of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetVersion {
    /// Version identifier.
    pub id: String,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Identifier of the creating user.
    #[serde(default)]
    pub created_by_user: Option<String>,
    /// Whether this is the latest version.
    #[serde(default)]
    pub is_latest: bool,
    /// Version status.
    #[serde(default)]
    pub status: Option<String>,
}
