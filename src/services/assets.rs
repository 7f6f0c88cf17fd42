//! Asset operations.

use super::{page_query, ListParams};
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::types::{Asset, AssetStatus, AssetType, AssetVersion, Keyframe, Segment, SegmentType};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/assets/v1";

/// Service for asset operations.
pub struct AssetsService<'a> {
    client: &'a IconikClient,
}

impl<'a> AssetsService<'a> {
    /// Creates a new assets service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets an asset.
    pub async fn get(&self, asset_id: &str) -> IconikResult<ApiResponse<Asset>> {
        self.client
            .get(SERVER_PREFIX, &format!("assets/{}/", asset_id), Vec::new())
            .await
    }

    /// Lists one page of assets.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Asset>>> {
        self.client
            .get(SERVER_PREFIX, "assets/", params.to_query())
            .await
    }

    /// Lists every asset, driving the pagination engine to completion.
    pub async fn list_all(&self) -> IconikResult<PaginatedResponse<Asset>> {
        let client = self.client;
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| async move {
                client
                    .get::<PaginatedResponse<Asset>>(SERVER_PREFIX, "assets/", page_query(&query))
                    .await?
                    .into_data()
            })
            .await
    }

    /// Creates an asset.
    pub async fn create(
        &self,
        body: impl Into<Body<AssetCreate>>,
    ) -> IconikResult<ApiResponse<Asset>> {
        self.client.post(SERVER_PREFIX, "assets/", &body.into()).await
    }

    /// Replaces an asset.
    pub async fn replace(
        &self,
        asset_id: &str,
        body: impl Into<Body<AssetCreate>>,
    ) -> IconikResult<ApiResponse<Asset>> {
        self.client
            .put(SERVER_PREFIX, &format!("assets/{}/", asset_id), &body.into())
            .await
    }

    /// Partially updates an asset. Only assigned fields reach the wire.
    pub async fn update(
        &self,
        asset_id: &str,
        body: impl Into<Body<AssetUpdate>>,
    ) -> IconikResult<ApiResponse<Asset>> {
        self.client
            .patch(SERVER_PREFIX, &format!("assets/{}/", asset_id), &body.into())
            .await
    }

    /// Deletes an asset (moves it to the delete queue).
    pub async fn delete(&self, asset_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("assets/{}/", asset_id))
            .await
    }

    /// Restores assets from the delete queue.
    pub async fn restore(&self, asset_ids: &[String]) -> IconikResult<ApiResponse<()>> {
        let body = Body::Typed(RestoreAssetsRequest {
            object_ids: asset_ids.to_vec(),
        });
        self.client
            .post_empty(SERVER_PREFIX, "delete_queue/assets/restore/", &body)
            .await
    }

    /// Uploads a custom keyframe image for an asset, as raw bytes with an
    /// explicit content type.
    pub async fn upload_keyframe(
        &self,
        asset_id: &str,
        content_type: &str,
        data: bytes::Bytes,
    ) -> IconikResult<ApiResponse<Keyframe>> {
        self.client
            .post_raw(
                SERVER_PREFIX,
                &format!("assets/{}/keyframes/", asset_id),
                data,
                content_type,
            )
            .await
    }

    // Segments

    /// Lists one page of an asset's segments.
    pub async fn list_segments(
        &self,
        asset_id: &str,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Segment>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/segments/", asset_id),
                params.to_query(),
            )
            .await
    }

    /// Creates a segment on an asset.
    pub async fn create_segment(
        &self,
        asset_id: &str,
        body: impl Into<Body<SegmentCreate>>,
    ) -> IconikResult<ApiResponse<Segment>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("assets/{}/segments/", asset_id),
                &body.into(),
            )
            .await
    }

    /// Partially updates a segment.
    pub async fn update_segment(
        &self,
        asset_id: &str,
        segment_id: &str,
        body: impl Into<Body<SegmentUpdate>>,
    ) -> IconikResult<ApiResponse<Segment>> {
        self.client
            .patch(
                SERVER_PREFIX,
                &format!("assets/{}/segments/{}/", asset_id, segment_id),
                &body.into(),
            )
            .await
    }

    // Versions

    /// Lists one page of an asset's versions.
    pub async fn list_versions(
        &self,
        asset_id: &str,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<AssetVersion>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/versions/", asset_id),
                params.to_query(),
            )
            .await
    }

    /// Promotes a version to be the asset's latest.
    pub async fn promote_version(
        &self,
        asset_id: &str,
        version_id: &str,
    ) -> IconikResult<ApiResponse<()>> {
        let body: Body<()> = Body::Raw(serde_json::Map::new());
        self.client
            .post_empty(
                SERVER_PREFIX,
                &format!("assets/{}/versions/{}/promote/", asset_id, version_id),
                &body,
            )
            .await
    }
}

/// Request to create or replace an asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetCreate {
    /// Display title.
    pub title: String,
    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Asset kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    /// Collection to create the asset into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Initial lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
}

/// Partial update of an asset. Unassigned fields are not sent, so a PATCH
/// cannot reset server state to defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetUpdate {
    /// Display title.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_id: Field<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AssetStatus>,
    /// Archive flag.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub is_archived: Field<bool>,
}

/// Request to create a segment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentCreate {
    /// Segment kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_type: Option<SegmentType>,
    /// Segment text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_text: Option<String>,
    /// Marker color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_color: Option<String>,
    /// Start offset in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start_milliseconds: Option<u64>,
    /// End offset in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end_milliseconds: Option<u64>,
}

/// Partial update of a segment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SegmentUpdate {
    /// Segment text.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub segment_text: Field<String>,
    /// Marker color.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub segment_color: Field<String>,
    /// Start offset in milliseconds.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub time_start_milliseconds: Field<u64>,
    /// End offset in milliseconds.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub time_end_milliseconds: Field<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct RestoreAssetsRequest {
    object_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::DumpPolicy;
    use serde_json::json;

    #[test]
    fn test_asset_update_patch_dump_is_sparse() {
        let update = AssetUpdate {
            title: Field::Set("New title".to_string()),
            ..Default::default()
        };
        let value = Body::Typed(update).serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, json!({"title": "New title"}));
    }

    #[test]
    fn test_asset_create_dump_drops_defaults() {
        let create = AssetCreate {
            title: "Clip".to_string(),
            ..Default::default()
        };
        let value = Body::Typed(create).serialize(DumpPolicy::create()).unwrap();
        assert_eq!(value, json!({"title": "Clip"}));
    }
}
