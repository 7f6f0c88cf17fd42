//! Usage and audit statistics types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usage figures for the asset domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetUsage {
    /// Total number of assets.
    #[serde(default)]
    pub assets_count: u64,
    /// Total stored bytes.
    #[serde(default)]
    pub storage_bytes: u64,
    /// Assets created in the reporting period.
    #[serde(default)]
    pub assets_created: u64,
    /// Assets deleted in the reporting period.
    #[serde(default)]
    pub assets_deleted: u64,
}

/// Usage figures for the collection domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionUsage {
    /// Total number of collections.
    #[serde(default)]
    pub collections_count: u64,
    /// Collections created in the reporting period.
    #[serde(default)]
    pub collections_created: u64,
}

/// One audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry identifier.
    pub id: String,
    /// Acting user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Performed operation, e.g. `assets.delete`.
    #[serde(default)]
    pub operation: Option<String>,
    /// Identifier of the affected object.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Type of the affected object.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Entry timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

impl PageItem for AuditEntry {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}

/// Billing state of the tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingInfo {
    /// Active plan name.
    #[serde(default)]
    pub plan: Option<String>,
    /// Billed seats.
    #[serde(default)]
    pub seats: u64,
    /// Billed storage in bytes.
    #[serde(default)]
    pub storage_bytes: u64,
    /// Next invoice date.
    #[serde(default)]
    pub next_invoice_date: Option<DateTime<Utc>>,
}

/// One entry of the price list catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceList {
    /// Price list identifier.
    pub id: String,
    /// Billed product, e.g. `storage` or `transcoding`.
    #[serde(default)]
    pub product: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Billing unit, e.g. `GB_MONTH`.
    #[serde(default)]
    pub unit: Option<String>,
}
