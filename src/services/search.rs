//! Search operations.
//!
//! `search` fetches one page. `search_all` drives the pagination engine,
//! which switches to date continuation past the search backend's result
//! window; the caller's request body is retained across the switch and the
//! continuation cutoff travels as the `date_created_gt` query parameter.

use super::page_query;
use crate::body::Body;
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::types::{SearchObject, SearchRequest};

const SERVER_PREFIX: &str = "API/search/v1";

/// Service for search operations.
pub struct SearchService<'a> {
    client: &'a IconikClient,
}

impl<'a> SearchService<'a> {
    /// Creates a new search service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Runs a search and returns one page of hits.
    pub async fn search(
        &self,
        request: impl Into<Body<SearchRequest>>,
    ) -> IconikResult<ApiResponse<PaginatedResponse<SearchObject>>> {
        self.client
            .post(SERVER_PREFIX, "search/", &request.into())
            .await
    }

    /// Runs a search and returns one specific page of hits.
    pub async fn search_page(
        &self,
        request: impl Into<Body<SearchRequest>>,
        page: u32,
        per_page: u32,
    ) -> IconikResult<ApiResponse<PaginatedResponse<SearchObject>>> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("per_page".to_string(), per_page.to_string()),
        ];
        self.client
            .post_with_query(SERVER_PREFIX, "search/", &request.into(), query)
            .await
    }

    /// Runs a search and collects every hit, following pages and, past the
    /// result window, the date-continuation fallback.
    pub async fn search_all(
        &self,
        request: &SearchRequest,
    ) -> IconikResult<PaginatedResponse<SearchObject>> {
        let client = self.client;
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| {
                let body = Body::Typed(request.clone());
                async move {
                    client
                        .post_with_query::<PaginatedResponse<SearchObject>, _>(
                            SERVER_PREFIX,
                            "search/",
                            &body,
                            page_query(&query),
                        )
                        .await?
                        .into_data()
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{DocType, SearchRequest};

    #[test]
    fn test_search_request_builder_shape() {
        let request = SearchRequest::text("sunset", vec![DocType::Assets, DocType::Collections]);
        assert_eq!(request.doc_types.len(), 2);
        assert_eq!(request.query.as_deref(), Some("sunset"));
    }
}
