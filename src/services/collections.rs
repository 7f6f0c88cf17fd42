//! Collection operations.
//!
//! Collections live under the assets API, so this service shares the
//! `API/assets/v1` server prefix.

use super::{page_query, ListParams};
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::types::{Collection, CollectionItem};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/assets/v1";

/// Service for collection operations.
pub struct CollectionsService<'a> {
    client: &'a IconikClient,
}

impl<'a> CollectionsService<'a> {
    /// Creates a new collections service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets a collection.
    pub async fn get(&self, collection_id: &str) -> IconikResult<ApiResponse<Collection>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("collections/{}/", collection_id),
                Vec::new(),
            )
            .await
    }

    /// Creates a collection.
    pub async fn create(
        &self,
        body: impl Into<Body<CollectionCreate>>,
    ) -> IconikResult<ApiResponse<Collection>> {
        self.client
            .post(SERVER_PREFIX, "collections/", &body.into())
            .await
    }

    /// Partially updates a collection.
    pub async fn update(
        &self,
        collection_id: &str,
        body: impl Into<Body<CollectionUpdate>>,
    ) -> IconikResult<ApiResponse<Collection>> {
        self.client
            .patch(
                SERVER_PREFIX,
                &format!("collections/{}/", collection_id),
                &body.into(),
            )
            .await
    }

    /// Deletes a collection.
    pub async fn delete(&self, collection_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("collections/{}/", collection_id))
            .await
    }

    /// Lists one page of a collection's contents.
    pub async fn contents(
        &self,
        collection_id: &str,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<CollectionItem>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("collections/{}/contents/", collection_id),
                params.to_query(),
            )
            .await
    }

    /// Lists a collection's complete contents through the pagination
    /// engine.
    pub async fn contents_all(
        &self,
        collection_id: &str,
    ) -> IconikResult<PaginatedResponse<CollectionItem>> {
        let client = self.client;
        let path = format!("collections/{}/contents/", collection_id);
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| {
                let path = path.clone();
                async move {
                    client
                        .get::<PaginatedResponse<CollectionItem>>(
                            SERVER_PREFIX,
                            &path,
                            page_query(&query),
                        )
                        .await?
                        .into_data()
                }
            })
            .await
    }

    /// Adds an object to a collection.
    pub async fn add_item(
        &self,
        collection_id: &str,
        body: impl Into<Body<CollectionItemAdd>>,
    ) -> IconikResult<ApiResponse<CollectionItem>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("collections/{}/contents/", collection_id),
                &body.into(),
            )
            .await
    }

    /// Removes an object from a collection.
    pub async fn remove_item(
        &self,
        collection_id: &str,
        object_id: &str,
    ) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(
                SERVER_PREFIX,
                &format!("collections/{}/contents/{}/", collection_id, object_id),
            )
            .await
    }

    /// Lists the ancestors of a collection, root first.
    pub async fn ancestors(
        &self,
        collection_id: &str,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Collection>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("collections/{}/ancestors/", collection_id),
                Vec::new(),
            )
            .await
    }
}

/// Request to create a collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionCreate {
    /// Display title.
    pub title: String,
    /// Parent collection identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Partial update of a collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionUpdate {
    /// Display title.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Parent collection identifier.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub parent_id: Field<String>,
    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_id: Field<String>,
}

/// Request to add an object to a collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionItemAdd {
    /// Identifier of the object to add.
    pub object_id: String,
    /// Type of the object (`assets` or `collections`).
    pub object_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::DumpPolicy;
    use serde_json::json;

    #[test]
    fn test_collection_update_sends_explicit_null_parent() {
        // Moving a collection to the root requires sending parent_id: null,
        // which must survive the patch dump.
        let update = CollectionUpdate {
            parent_id: Field::Null,
            ..Default::default()
        };
        let value = Body::Typed(update).serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, json!({"parent_id": null}));
    }
}
