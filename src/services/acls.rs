//! Access-control operations.
//!
//! Permission names are validated locally against
//! [`ALLOWED_PERMISSIONS`](crate::types::ALLOWED_PERMISSIONS); an invalid
//! name is rejected before any HTTP call and the error message lists the
//! allowed set.

use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::{IconikError, IconikResult};
use crate::pagination::PaginatedResponse;
use crate::types::{AccessCheck, Acl, ALLOWED_PERMISSIONS};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/acls/v1";

/// Service for ACL operations.
pub struct AclsService<'a> {
    client: &'a IconikClient,
}

impl<'a> AclsService<'a> {
    /// Creates a new ACLs service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Lists the ACL entries on an object.
    pub async fn list(
        &self,
        object_type: &str,
        object_id: &str,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Acl>>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("{}/{}/acl/", object_type, object_id),
                Vec::new(),
            )
            .await
    }

    /// Checks one user's permission on an object.
    pub async fn check_access(
        &self,
        object_type: &str,
        object_id: &str,
        user_id: &str,
        permission: &str,
    ) -> IconikResult<ApiResponse<AccessCheck>> {
        validate_permissions(std::slice::from_ref(&permission.to_string()))?;
        self.client
            .get(
                SERVER_PREFIX,
                &format!(
                    "{}/{}/acl/users/{}/permissions/{}/",
                    object_type, object_id, user_id, permission
                ),
                Vec::new(),
            )
            .await
    }

    /// Grants permissions on an object to a group.
    pub async fn apply_group_permissions(
        &self,
        object_type: &str,
        object_id: &str,
        group_id: &str,
        permissions: &[String],
    ) -> IconikResult<ApiResponse<Acl>> {
        validate_permissions(permissions)?;
        let body = Body::Typed(PermissionsRequest {
            permissions: permissions.to_vec(),
        });
        self.client
            .put(
                SERVER_PREFIX,
                &format!("{}/{}/acl/groups/{}/", object_type, object_id, group_id),
                &body,
            )
            .await
    }

    /// Grants permissions on an object to a user.
    pub async fn apply_user_permissions(
        &self,
        object_type: &str,
        object_id: &str,
        user_id: &str,
        permissions: &[String],
    ) -> IconikResult<ApiResponse<Acl>> {
        validate_permissions(permissions)?;
        let body = Body::Typed(PermissionsRequest {
            permissions: permissions.to_vec(),
        });
        self.client
            .put(
                SERVER_PREFIX,
                &format!("{}/{}/acl/users/{}/", object_type, object_id, user_id),
                &body,
            )
            .await
    }

    /// Applies an ACL to several objects at once.
    pub async fn bulk_apply(
        &self,
        body: impl Into<Body<BulkAclRequest>>,
    ) -> IconikResult<ApiResponse<()>> {
        let body = body.into();
        if let Body::Typed(ref request) = body {
            validate_permissions(&request.permissions)?;
        }
        self.client.post_empty(SERVER_PREFIX, "acl/", &body).await
    }

    /// Removes ACL entries from several objects at once (DELETE with a
    /// body).
    pub async fn bulk_delete(
        &self,
        body: impl Into<Body<BulkAclDelete>>,
    ) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete_with_body(SERVER_PREFIX, "acl/", &body.into())
            .await
    }
}

/// Rejects permission names outside the allowed set, before any HTTP call.
fn validate_permissions(permissions: &[String]) -> IconikResult<()> {
    for permission in permissions {
        if !ALLOWED_PERMISSIONS.contains(&permission.as_str()) {
            return Err(IconikError::invalid_parameter(format!(
                "Invalid permission {:?}; allowed permissions are: {}",
                permission,
                ALLOWED_PERMISSIONS.join(", ")
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize)]
struct PermissionsRequest {
    permissions: Vec<String>,
}

/// Request applying an ACL to several objects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkAclRequest {
    /// Objects to grant on.
    pub object_ids: Vec<String>,
    /// Type of the objects.
    pub object_type: String,
    /// Groups receiving the grant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// Users receiving the grant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    /// Permissions to grant.
    pub permissions: Vec<String>,
}

/// Request removing ACL entries from several objects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkAclDelete {
    /// Objects to revoke from.
    pub object_ids: Vec<String>,
    /// Type of the objects.
    pub object_type: String,
    /// Groups losing access.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// Users losing access.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IconikErrorKind;

    #[test]
    fn test_validate_permissions_accepts_allowed_set() {
        let permissions: Vec<String> = ALLOWED_PERMISSIONS.iter().map(|p| p.to_string()).collect();
        assert!(validate_permissions(&permissions).is_ok());
    }

    #[test]
    fn test_validate_permissions_rejects_unknown() {
        let err = validate_permissions(&["invalid".to_string()]).unwrap_err();
        assert_eq!(*err.kind(), IconikErrorKind::InvalidParameter);
        // The message names the complete allowed set.
        for permission in ALLOWED_PERMISSIONS {
            assert!(err.message().contains(permission));
        }
    }
}
