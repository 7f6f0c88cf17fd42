//! Settings domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings effective for the calling user, merged from system, group,
/// and user layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergedSettings {
    /// Default metadata view for assets.
    #[serde(default)]
    pub asset_default_metadata_view_id: Option<String>,
    /// Default metadata view for collections.
    #[serde(default)]
    pub collection_default_metadata_view_id: Option<String>,
    /// Default search domains.
    #[serde(default)]
    pub default_search_doc_types: Vec<String>,
    /// UI date format.
    #[serde(default)]
    pub date_format: Option<String>,
    /// URL of the tenant logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Remaining settings keys; the catalogue is large and
    /// tenant-dependent.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Settings stored for one group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Identifier of the group.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Settings keys for the group.
    #[serde(flatten)]
    pub settings: HashMap<String, serde_json::Value>,
}

/// An uploaded tenant logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logo {
    /// Logo identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// URL of the stored logo.
    #[serde(default)]
    pub url: Option<String>,
    /// Upload timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
