//! Authentication domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Token identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// The bearer token value. Present only at issuance.
    #[serde(default)]
    pub token: Option<String>,
    /// Identifier of the authenticated user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Identifier of the application the token is scoped to.
    #[serde(default)]
    pub app_id: Option<String>,
    /// Expiry timestamp.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A registered application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// Application identifier.
    pub id: String,
    /// Application name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the application is active.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
