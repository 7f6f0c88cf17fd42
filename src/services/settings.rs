//! Settings operations.

use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::transport::MultipartField;
use crate::types::{GroupSettings, Logo, MergedSettings};
use bytes::Bytes;

const SERVER_PREFIX: &str = "API/settings/v1";

/// Service for settings operations.
pub struct SettingsService<'a> {
    client: &'a IconikClient,
}

impl<'a> SettingsService<'a> {
    /// Creates a new settings service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets the settings effective for the calling user, merged across
    /// system, group, and user layers.
    pub async fn merged(&self) -> IconikResult<ApiResponse<MergedSettings>> {
        self.client.get(SERVER_PREFIX, "merged/", Vec::new()).await
    }

    /// Gets the settings stored for one user.
    pub async fn user(&self, user_id: &str) -> IconikResult<ApiResponse<MergedSettings>> {
        self.client
            .get(SERVER_PREFIX, &format!("users/{}/", user_id), Vec::new())
            .await
    }

    /// Gets the settings stored for a group.
    pub async fn group(&self, group_id: &str) -> IconikResult<ApiResponse<GroupSettings>> {
        self.client
            .get(SERVER_PREFIX, &format!("groups/{}/", group_id), Vec::new())
            .await
    }

    /// Replaces the settings stored for a group.
    ///
    /// The settings catalogue is tenant-dependent, so the body is a raw
    /// map rather than a closed DTO.
    pub async fn update_group(
        &self,
        group_id: &str,
        settings: serde_json::Map<String, serde_json::Value>,
    ) -> IconikResult<ApiResponse<GroupSettings>> {
        let body: Body<()> = Body::Raw(settings);
        self.client
            .put(SERVER_PREFIX, &format!("groups/{}/", group_id), &body)
            .await
    }

    /// Uploads a tenant logo as multipart form data.
    pub async fn upload_logo(
        &self,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> IconikResult<ApiResponse<Logo>> {
        let field = MultipartField::file("logo", file_name, content_type, data);
        self.client
            .post_multipart(SERVER_PREFIX, "logo/", vec![field])
            .await
    }

    /// Deletes the tenant logo.
    pub async fn delete_logo(&self) -> IconikResult<ApiResponse<()>> {
        self.client.delete(SERVER_PREFIX, "logo/").await
    }
}
