//! Usage and audit statistics operations.

use super::{page_query, ListParams};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::types::{AssetUsage, AuditEntry, BillingInfo, CollectionUsage, PriceList};

const SERVER_PREFIX: &str = "API/stats/v1";

/// Service for statistics operations.
pub struct StatsService<'a> {
    client: &'a IconikClient,
}

impl<'a> StatsService<'a> {
    /// Creates a new stats service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets usage figures for the asset domain.
    pub async fn asset_usage(&self) -> IconikResult<ApiResponse<AssetUsage>> {
        self.client
            .get(SERVER_PREFIX, "assets/usage/", Vec::new())
            .await
    }

    /// Gets usage figures for the collection domain.
    pub async fn collection_usage(&self) -> IconikResult<ApiResponse<CollectionUsage>> {
        self.client
            .get(SERVER_PREFIX, "collections/usage/", Vec::new())
            .await
    }

    /// Lists one page of the audit log.
    pub async fn audit(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<AuditEntry>>> {
        self.client
            .get(SERVER_PREFIX, "audit/", params.to_query())
            .await
    }

    /// Lists the complete audit log through the pagination engine. Audit
    /// logs grow past the search window routinely, so this traversal
    /// leans on the date-continuation fallback.
    pub async fn audit_all(&self) -> IconikResult<PaginatedResponse<AuditEntry>> {
        let client = self.client;
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| async move {
                client
                    .get::<PaginatedResponse<AuditEntry>>(
                        SERVER_PREFIX,
                        "audit/",
                        page_query(&query),
                    )
                    .await?
                    .into_data()
            })
            .await
    }

    /// Gets the tenant's billing state.
    pub async fn billing(&self) -> IconikResult<ApiResponse<BillingInfo>> {
        self.client.get(SERVER_PREFIX, "billing/", Vec::new()).await
    }

    /// Lists the price list catalogue.
    pub async fn price_lists(&self) -> IconikResult<ApiResponse<PaginatedResponse<PriceList>>> {
        self.client
            .get(SERVER_PREFIX, "price_lists/", Vec::new())
            .await
    }
}
