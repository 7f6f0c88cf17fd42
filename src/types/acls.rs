//! Access-control domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permissions grantable through an ACL.
///
/// This is the closed set the service accepts; permission arguments are
/// validated against it locally, before any HTTP call.
pub const ALLOWED_PERMISSIONS: &[&str] = &["read", "write", "delete", "change-acl"];

/// An access-control entry on an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acl {
    /// Identifier of the governed object.
    pub object_id: String,
    /// Type of the governed object.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Group granted access, if group-scoped.
    #[serde(default)]
    pub group_id: Option<String>,
    /// User granted access, if user-scoped.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Result of an access check for one user on one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessCheck {
    /// Identifier of the checked object.
    pub object_id: String,
    /// The permission that was checked.
    #[serde(default)]
    pub permission: Option<String>,
    /// Whether access is granted.
    #[serde(default)]
    pub allowed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allowed_permissions_set() {
        assert!(ALLOWED_PERMISSIONS.contains(&"read"));
        assert!(ALLOWED_PERMISSIONS.contains(&"change-acl"));
        assert!(!ALLOWED_PERMISSIONS.contains(&"admin"));
    }

    #[test]
    fn test_acl_deserializes() {
        let acl: Acl = serde_json::from_value(json!({
            "object_id": "a1",
            "object_type": "assets",
            "group_id": "g1",
            "permissions": ["read", "write"]
        }))
        .unwrap();
        assert_eq!(acl.permissions, vec!["read", "write"]);
    }
}
