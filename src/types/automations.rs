//! Automation domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trigger starting an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationTrigger {
    /// When an asset is created.
    AssetCreated,
    /// When an asset enters a collection.
    CollectionContentAdded,
    /// When metadata changes.
    MetadataUpdated,
    /// Started manually.
    Manual,
}

/// A configured automation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Automation {
    /// Automation identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Trigger starting the automation.
    #[serde(default)]
    pub trigger: Option<AutomationTrigger>,
    /// Whether the automation is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Ordered action definitions; shapes vary per action type.
    #[serde(default)]
    pub actions: Vec<serde_json::Value>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

/// One execution of an automation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRun {
    /// Run identifier.
    pub id: String,
    /// The executed automation.
    #[serde(default)]
    pub automation_id: Option<String>,
    /// Run status.
    #[serde(default)]
    pub status: Option<String>,
    /// Start timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
