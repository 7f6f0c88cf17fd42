//! File, format, file-set, storage, and proxy domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Online status of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    /// Registered, awaiting upload.
    Open,
    /// Fully uploaded and verified.
    Closed,
    /// Upload failed.
    Failed,
    /// Marked for deletion.
    Deleted,
    /// Present in archive storage only.
    Archived,
    /// Missing from its storage.
    Missing,
}

/// A physical file belonging to an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File identifier.
    pub id: String,
    /// Owning asset identifier.
    #[serde(default)]
    pub asset_id: Option<String>,
    /// File name.
    #[serde(default)]
    pub name: Option<String>,
    /// Original file name at ingest.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Directory path on the storage.
    #[serde(default)]
    pub directory_path: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Online status.
    #[serde(default)]
    pub status: Option<FileStatus>,
    /// Identifier of the storage holding this file.
    #[serde(default)]
    pub storage_id: Option<String>,
    /// Identifier of the file set this file belongs to.
    #[serde(default)]
    pub file_set_id: Option<String>,
    /// Identifier of the format this file realizes.
    #[serde(default)]
    pub format_id: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A group of files that together realize one format on one storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSet {
    /// File set identifier.
    pub id: String,
    /// File set name.
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier of the format realized.
    #[serde(default)]
    pub format_id: Option<String>,
    /// Identifier of the storage.
    #[serde(default)]
    pub storage_id: Option<String>,
    /// Base directory of the member files.
    #[serde(default)]
    pub base_dir: Option<String>,
    /// Component file identifiers.
    #[serde(default)]
    pub component_ids: Vec<String>,
    /// Whether the file set is archived.
    #[serde(default)]
    pub is_archive: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A logical encoding of an asset (original, proxy, keyframes...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    /// Format identifier.
    pub id: String,
    /// Format name, e.g. `ORIGINAL` or `PPRO_PROXY`.
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier of the creating user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Whether the format is archived.
    #[serde(default)]
    pub archive_status: Option<String>,
    /// Per-format metadata.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Purpose a storage serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoragePurpose {
    /// Holds original files.
    Files,
    /// Holds proxies.
    Proxies,
    /// Holds keyframes.
    Keyframes,
    /// Archive tier.
    Archive,
    /// Export destination.
    Export,
}

/// A configured storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    /// Storage identifier.
    pub id: String,
    /// Storage name.
    pub name: String,
    /// Storage method, e.g. `S3`, `GCS`, `FILE`.
    #[serde(default)]
    pub method: Option<String>,
    /// Purpose of the storage.
    #[serde(default)]
    pub purpose: Option<StoragePurpose>,
    /// Storage status.
    #[serde(default)]
    pub status: Option<String>,
    /// Default storage for its purpose.
    #[serde(default)]
    pub is_default: bool,
}

/// A proxy rendition of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proxy {
    /// Proxy identifier.
    pub id: String,
    /// Owning asset identifier.
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Proxy name.
    #[serde(default)]
    pub name: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Resolution, e.g. `1280x720`.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Identifier of the storage holding the proxy.
    #[serde(default)]
    pub storage_id: Option<String>,
    /// Proxy status.
    #[serde(default)]
    pub status: Option<String>,
}

/// A keyframe image of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyframe {
    /// Keyframe identifier.
    pub id: String,
    /// Owning asset identifier.
    #[serde(default)]
    pub asset_id: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Resolution, e.g. `320x180`.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Whether this is the asset's poster frame.
    #[serde(default)]
    pub is_poster: bool,
    /// Identifier of the storage holding the keyframe.
    #[serde(default)]
    pub storage_id: Option<String>,
}

/// A time-limited download URL for a proxy or file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadUrl {
    /// The signed URL.
    pub url: String,
    /// Expiry timestamp of the URL.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_deserializes_from_minimal_body() {
        let file: File = serde_json::from_value(json!({"id": "f1"})).unwrap();
        assert_eq!(file.id, "f1");
        assert!(file.status.is_none());
    }

    #[test]
    fn test_file_status_wire_names() {
        let file: File =
            serde_json::from_value(json!({"id": "f1", "status": "CLOSED"})).unwrap();
        assert_eq!(file.status, Some(FileStatus::Closed));
    }
}
