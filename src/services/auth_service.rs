//! Authentication endpoints: token issuance and application lookup.
//!
//! Named `auth_service` to leave the `auth` module name to the header
//! credentials.

use super::ListParams;
use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{App, Token};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/auth/v1";

/// Service for authentication operations.
pub struct AuthService<'a> {
    client: &'a IconikClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new auth service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Logs in with email and password, returning a fresh token.
    pub async fn login(
        &self,
        body: impl Into<Body<LoginRequest>>,
    ) -> IconikResult<ApiResponse<Token>> {
        self.client
            .post(SERVER_PREFIX, "auth/simple/login/", &body.into())
            .await
    }

    /// Gets the token used by this client.
    pub async fn current_token(&self) -> IconikResult<ApiResponse<Token>> {
        self.client.get(SERVER_PREFIX, "auth/token/", Vec::new()).await
    }

    /// Refreshes the current token.
    pub async fn refresh_token(&self) -> IconikResult<ApiResponse<Token>> {
        let body: Body<()> = Body::Raw(serde_json::Map::new());
        self.client
            .post(SERVER_PREFIX, "auth/token/refresh/", &body)
            .await
    }

    /// Revokes the current token.
    pub async fn revoke_token(&self) -> IconikResult<ApiResponse<()>> {
        self.client.delete(SERVER_PREFIX, "auth/token/").await
    }

    /// Lists one page of registered applications.
    pub async fn apps(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<App>>> {
        self.client
            .get(SERVER_PREFIX, "apps/", params.to_query())
            .await
    }

    /// Gets a registered application.
    pub async fn get_app(&self, app_id: &str) -> IconikResult<ApiResponse<App>> {
        self.client
            .get(SERVER_PREFIX, &format!("apps/{}/", app_id), Vec::new())
            .await
    }
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}
