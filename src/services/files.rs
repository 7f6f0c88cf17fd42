//! File, format, file-set, storage, and proxy operations.

use super::ListParams;
use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{DownloadUrl, File, FileSet, FileStatus, Format, Proxy, Storage};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/files/v1";

/// Service for file operations.
pub struct FilesService<'a> {
    client: &'a IconikClient,
}

impl<'a> FilesService<'a> {
    /// Creates a new files service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Lists one page of an asset's files.
    pub async fn asset_files(
        &self,
        asset_id: &str,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<File>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/files/", asset_id),
                params.to_query(),
            )
            .await
    }

    /// Gets one file of an asset.
    pub async fn get_file(
        &self,
        asset_id: &str,
        file_id: &str,
    ) -> IconikResult<ApiResponse<File>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/files/{}/", asset_id, file_id),
                Vec::new(),
            )
            .await
    }

    /// Registers a file on an asset.
    pub async fn create_file(
        &self,
        asset_id: &str,
        body: impl Into<Body<FileCreate>>,
    ) -> IconikResult<ApiResponse<File>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("assets/{}/files/", asset_id),
                &body.into(),
            )
            .await
    }

    /// Deletes a file from an asset.
    pub async fn delete_file(
        &self,
        asset_id: &str,
        file_id: &str,
    ) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(
                SERVER_PREFIX,
                &format!("assets/{}/files/{}/", asset_id, file_id),
            )
            .await
    }

    // Formats

    /// Lists an asset's formats.
    pub async fn asset_formats(
        &self,
        asset_id: &str,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Format>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/formats/", asset_id),
                Vec::new(),
            )
            .await
    }

    /// Creates a format on an asset.
    pub async fn create_format(
        &self,
        asset_id: &str,
        body: impl Into<Body<FormatCreate>>,
    ) -> IconikResult<ApiResponse<Format>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("assets/{}/formats/", asset_id),
                &body.into(),
            )
            .await
    }

    // File sets

    /// Lists an asset's file sets.
    pub async fn asset_file_sets(
        &self,
        asset_id: &str,
    ) -> IconikResult<ApiResponse<PaginatedResponse<FileSet>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/file_sets/", asset_id),
                Vec::new(),
            )
            .await
    }

    /// Creates a file set on an asset.
    pub async fn create_file_set(
        &self,
        asset_id: &str,
        body: impl Into<Body<FileSetCreate>>,
    ) -> IconikResult<ApiResponse<FileSet>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("assets/{}/file_sets/", asset_id),
                &body.into(),
            )
            .await
    }

    /// Deletes a file set from an asset.
    pub async fn delete_file_set(
        &self,
        asset_id: &str,
        file_set_id: &str,
    ) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(
                SERVER_PREFIX,
                &format!("assets/{}/file_sets/{}/", asset_id, file_set_id),
            )
            .await
    }

    // Storages

    /// Lists storages.
    pub async fn storages(&self) -> IconikResult<ApiResponse<PaginatedResponse<Storage>>> {
        self.client.get(SERVER_PREFIX, "storages/", Vec::new()).await
    }

    /// Gets a storage.
    pub async fn get_storage(&self, storage_id: &str) -> IconikResult<ApiResponse<Storage>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("storages/{}/", storage_id),
                Vec::new(),
            )
            .await
    }

    // Proxies

    /// Lists an asset's proxies.
    pub async fn proxies(
        &self,
        asset_id: &str,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Proxy>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/proxies/", asset_id),
                Vec::new(),
            )
            .await
    }

    /// Gets a time-limited download URL for a proxy.
    pub async fn proxy_download_url(
        &self,
        asset_id: &str,
        proxy_id: &str,
    ) -> IconikResult<ApiResponse<DownloadUrl>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/proxies/{}/download_url/", asset_id, proxy_id),
                Vec::new(),
            )
            .await
    }
}

/// Request to register a file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileCreate {
    /// File name.
    pub name: String,
    /// Original file name at ingest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Directory path on the storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    /// Storage to register the file on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<String>,
    /// File set the file belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_set_id: Option<String>,
    /// Format the file realizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
}

/// Request to create a format.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatCreate {
    /// Format name, e.g. `ORIGINAL`.
    pub name: String,
    /// Per-format metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Request to create a file set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileSetCreate {
    /// File set name.
    pub name: String,
    /// Format realized by the set.
    pub format_id: String,
    /// Storage holding the member files.
    pub storage_id: String,
    /// Base directory of the member files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    /// Component file identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_ids: Vec<String>,
}
