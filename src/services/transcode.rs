//! Transcode operations.

use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::types::{MediaInfo, TranscodeJob, TranscodePriority};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/transcode/v1";

/// Service for transcode operations.
pub struct TranscodeService<'a> {
    client: &'a IconikClient,
}

impl<'a> TranscodeService<'a> {
    /// Creates a new transcode service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Queues a transcode of an asset.
    pub async fn queue(
        &self,
        asset_id: &str,
        body: impl Into<Body<TranscodeRequest>>,
    ) -> IconikResult<ApiResponse<TranscodeJob>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("assets/{}/transcode/", asset_id),
                &body.into(),
            )
            .await
    }

    /// Gets a transcode job.
    pub async fn get(&self, transcode_job_id: &str) -> IconikResult<ApiResponse<TranscodeJob>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("transcode/{}/", transcode_job_id),
                Vec::new(),
            )
            .await
    }

    /// Cancels a queued or running transcode.
    pub async fn cancel(&self, transcode_job_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("transcode/{}/", transcode_job_id))
            .await
    }

    /// Runs a media analysis pass on an asset.
    pub async fn analyze(&self, asset_id: &str) -> IconikResult<ApiResponse<MediaInfo>> {
        let body: Body<()> = Body::Raw(serde_json::Map::new());
        self.client
            .post(
                SERVER_PREFIX,
                &format!("analyze/assets/{}/", asset_id),
                &body,
            )
            .await
    }

    /// Queues keyframe generation for an asset.
    pub async fn generate_keyframes(
        &self,
        asset_id: &str,
    ) -> IconikResult<ApiResponse<TranscodeJob>> {
        let body: Body<()> = Body::Raw(serde_json::Map::new());
        self.client
            .post(
                SERVER_PREFIX,
                &format!("keyframes/assets/{}/", asset_id),
                &body,
            )
            .await
    }
}

/// Request to queue a transcode.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscodeRequest {
    /// Source format identifier; the original when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,
    /// Target profile name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Queue priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TranscodePriority>,
    /// Storage for the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<String>,
}
