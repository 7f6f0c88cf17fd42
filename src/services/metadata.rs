//! Metadata operations: views, fields, and object values.

use super::ListParams;
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{
    FieldOption, FieldValues, MetadataField, MetadataFieldType, MetadataView, ObjectMetadata,
};
use serde::Serialize;
use std::collections::HashMap;

const SERVER_PREFIX: &str = "API/metadata/v1";

/// Service for metadata operations.
pub struct MetadataService<'a> {
    client: &'a IconikClient,
}

impl<'a> MetadataService<'a> {
    /// Creates a new metadata service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets an asset's metadata resolved through a view.
    pub async fn asset_metadata(
        &self,
        asset_id: &str,
        view_id: &str,
    ) -> IconikResult<ApiResponse<ObjectMetadata>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("assets/{}/views/{}/", asset_id, view_id),
                Vec::new(),
            )
            .await
    }

    /// Writes an asset's metadata through a view.
    pub async fn put_asset_metadata(
        &self,
        asset_id: &str,
        view_id: &str,
        body: impl Into<Body<MetadataValuesUpdate>>,
    ) -> IconikResult<ApiResponse<ObjectMetadata>> {
        self.client
            .put(
                SERVER_PREFIX,
                &format!("assets/{}/views/{}/", asset_id, view_id),
                &body.into(),
            )
            .await
    }

    /// Gets the raw metadata document of any object.
    pub async fn object_metadata(
        &self,
        object_type: &str,
        object_id: &str,
    ) -> IconikResult<ApiResponse<ObjectMetadata>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("{}/{}/", object_type, object_id),
                Vec::new(),
            )
            .await
    }

    // Views

    /// Lists one page of metadata views.
    pub async fn views(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<MetadataView>>> {
        self.client
            .get(SERVER_PREFIX, "views/", params.to_query())
            .await
    }

    /// Gets a metadata view.
    pub async fn get_view(&self, view_id: &str) -> IconikResult<ApiResponse<MetadataView>> {
        self.client
            .get(SERVER_PREFIX, &format!("views/{}/", view_id), Vec::new())
            .await
    }

    /// Creates a metadata view.
    pub async fn create_view(
        &self,
        body: impl Into<Body<MetadataViewCreate>>,
    ) -> IconikResult<ApiResponse<MetadataView>> {
        self.client.post(SERVER_PREFIX, "views/", &body.into()).await
    }

    /// Partially updates a metadata view.
    pub async fn update_view(
        &self,
        view_id: &str,
        body: impl Into<Body<MetadataViewUpdate>>,
    ) -> IconikResult<ApiResponse<MetadataView>> {
        self.client
            .patch(SERVER_PREFIX, &format!("views/{}/", view_id), &body.into())
            .await
    }

    /// Deletes a metadata view.
    pub async fn delete_view(&self, view_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("views/{}/", view_id))
            .await
    }

    // Fields

    /// Lists one page of metadata field definitions.
    pub async fn fields(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<MetadataField>>> {
        self.client
            .get(SERVER_PREFIX, "fields/", params.to_query())
            .await
    }

    /// Creates a metadata field definition.
    pub async fn create_field(
        &self,
        body: impl Into<Body<MetadataFieldCreate>>,
    ) -> IconikResult<ApiResponse<MetadataField>> {
        self.client.post(SERVER_PREFIX, "fields/", &body.into()).await
    }
}

/// Request writing metadata values through a view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetadataValuesUpdate {
    /// Values keyed by field name.
    pub metadata_values: HashMap<String, FieldValues>,
}

/// Request to create a metadata view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetadataViewCreate {
    /// View name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of the fields shown, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub view_fields: Vec<String>,
}

/// Partial update of a metadata view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetadataViewUpdate {
    /// View name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Description.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Names of the fields shown, in order.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub view_fields: Field<Vec<String>>,
}

/// Request to create a metadata field definition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetadataFieldCreate {
    /// Field name.
    pub name: String,
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<MetadataFieldType>,
    /// Options for enumerated types.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// Whether a value is required.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Whether the field accepts multiple values.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multi: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::DumpPolicy;
    use crate::types::FieldValue;
    use serde_json::json;

    #[test]
    fn test_metadata_values_update_serializes() {
        let mut values = HashMap::new();
        values.insert(
            "genre".to_string(),
            FieldValues {
                field_values: vec![FieldValue {
                    value: json!("documentary"),
                }],
            },
        );
        let body = Body::Typed(MetadataValuesUpdate {
            metadata_values: values,
        });
        let value = body.serialize(DumpPolicy::create()).unwrap();
        assert_eq!(
            value,
            json!({"metadata_values": {"genre": {"field_values": [{"value": "documentary"}]}}})
        );
    }
}
