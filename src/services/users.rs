//! User operations.

use super::{page_query, ListParams};
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::transport::MultipartField;
use crate::types::{User, UserStatus, UserType};
use bytes::Bytes;
use serde::Serialize;

const SERVER_PREFIX: &str = "API/users/v1";

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a IconikClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new users service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets the calling user.
    pub async fn current(&self) -> IconikResult<ApiResponse<User>> {
        self.client
            .get(SERVER_PREFIX, "users/current/", Vec::new())
            .await
    }

    /// Gets a user.
    pub async fn get(&self, user_id: &str) -> IconikResult<ApiResponse<User>> {
        self.client
            .get(SERVER_PREFIX, &format!("users/{}/", user_id), Vec::new())
            .await
    }

    /// Lists one page of users.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<User>>> {
        self.client
            .get(SERVER_PREFIX, "users/", params.to_query())
            .await
    }

    /// Lists every user through the pagination engine.
    pub async fn list_all(&self) -> IconikResult<PaginatedResponse<User>> {
        let client = self.client;
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| async move {
                client
                    .get::<PaginatedResponse<User>>(SERVER_PREFIX, "users/", page_query(&query))
                    .await?
                    .into_data()
            })
            .await
    }

    /// Creates a user.
    pub async fn create(
        &self,
        body: impl Into<Body<UserCreate>>,
    ) -> IconikResult<ApiResponse<User>> {
        self.client.post(SERVER_PREFIX, "users/", &body.into()).await
    }

    /// Partially updates a user.
    pub async fn update(
        &self,
        user_id: &str,
        body: impl Into<Body<UserUpdate>>,
    ) -> IconikResult<ApiResponse<User>> {
        self.client
            .patch(SERVER_PREFIX, &format!("users/{}/", user_id), &body.into())
            .await
    }

    /// Deletes a user.
    pub async fn delete(&self, user_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("users/{}/", user_id))
            .await
    }

    /// Uploads a profile photo as multipart form data.
    pub async fn upload_photo(
        &self,
        user_id: &str,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> IconikResult<ApiResponse<User>> {
        let field = MultipartField::file("photo", file_name, content_type, data);
        self.client
            .post_multipart(SERVER_PREFIX, &format!("users/{}/photo/", user_id), vec![field])
            .await
    }

    /// Deletes a profile photo.
    pub async fn delete_photo(&self, user_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("users/{}/photo/", user_id))
            .await
    }
}

/// Request to create a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserCreate {
    /// Email address, the login name.
    pub email: String,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Product role.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    /// Initial password; an invitation is sent when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Initial group memberships.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    /// First name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    /// Account status.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<UserStatus>,
    /// Product role.
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub user_type: Field<UserType>,
    /// Group memberships.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub groups: Field<Vec<String>>,
}
