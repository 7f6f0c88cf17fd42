//! API services for the iconik resource groups.
//!
//! Each service is scoped to one server prefix (`API/<group>/v1`) and
//! follows the same method shape: interpolate the path, collect provided
//! query parameters, serialize the body under the verb's dump policy, send
//! through the transport, decode into the declared response DTO, and return
//! the envelope.

mod acls;
mod assets;
mod auth_service;
mod automations;
mod collections;
mod files;
mod jobs;
mod metadata;
mod notifications;
mod search;
mod settings;
mod stats;
mod transcode;
mod users;
mod users_notifications;

pub use acls::*;
pub use assets::*;
pub use auth_service::*;
pub use automations::*;
pub use collections::*;
pub use files::*;
pub use jobs::*;
pub use metadata::*;
pub use notifications::*;
pub use search::*;
pub use settings::*;
pub use stats::*;
pub use transcode::*;
pub use users::*;
pub use users_notifications::*;

use serde::Serialize;

/// Common parameters for single-page list requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Sort expression, e.g. `date_created:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets items per page.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort expression.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Converts to query parameters; only provided values are included.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(ref sort) = self.sort {
            params.push(("sort".to_string(), sort.clone()));
        }
        params
    }
}

/// Builds the page-cursor query for a pagination-engine fetch.
pub(crate) fn page_query(query: &crate::pagination::PageQuery) -> Vec<(String, String)> {
    let mut params = vec![
        ("page".to_string(), query.page.to_string()),
        ("per_page".to_string(), query.per_page.to_string()),
    ];
    if let Some(cutoff) = query.date_created_gt {
        params.push(("date_created_gt".to_string(), cutoff.to_rfc3339()));
    }
    params
}
