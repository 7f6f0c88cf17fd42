//! User and group domain types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Active account.
    Active,
    /// Deactivated account.
    Inactive,
    /// Invitation sent, not yet accepted.
    Invited,
}

/// Product role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// Full user.
    PowerUser,
    /// Standard user.
    Standard,
    /// Browse-only user.
    Browse,
    /// Administrator.
    Admin,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Email address, the login name.
    #[serde(default)]
    pub email: Option<String>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account status.
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Product role.
    #[serde(default, rename = "type")]
    pub user_type: Option<UserType>,
    /// Group memberships.
    #[serde(default)]
    pub groups: Vec<String>,
    /// URL of the profile photo.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

impl PageItem for User {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}

/// A user group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub id: String,
    /// Group name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
