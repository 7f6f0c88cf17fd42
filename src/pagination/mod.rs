//! Automatic multi-page traversal for list endpoints.
//!
//! The engine turns a page-returning closure into a complete-list result:
//! it walks `page`/`pages`, concatenates `objects` in arrival order, retries
//! transient page failures with exponential backoff, and rewrites the final
//! metadata so callers see one virtual page.
//!
//! The search backend refuses to page past its result window
//! (`elasticsearch_limit`, 10 000 by default). When the accumulated count
//! reaches the window and the server still reports more results, the engine
//! switches to date continuation: it takes the maximum `date_created`
//! observed, adds one second, and restarts paging filtered by
//! `date_created_gt`. This assumes (a) objects carry a usable
//! `date_created` and (b) the server returns results in date-sortable
//! order. When no dates are extractable the traversal stops with a warning
//! and returns what it has.
//!
//! A page that keeps failing raises `PaginationExhausted` after
//! `max_retries` consecutive failures; previously fetched pages are
//! discarded, callers never receive a partial result from the error path.

use crate::errors::{IconikError, IconikResult};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Hard API ceiling on `per_page`.
pub const MAX_PER_PAGE: u32 = 1000;

/// Search-backend result window; paging past it is refused by the server.
pub const ELASTICSEARCH_LIMIT: usize = 10_000;

/// Immutable parameters controlling multi-page traversal.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Hard API ceiling on page size.
    pub max_per_page: u32,
    /// Page size requested when the caller does not specify one.
    pub default_per_page: u32,
    /// Consecutive failures tolerated on a single page.
    pub max_retries: u32,
    /// Base delay before the first retry.
    pub retry_delay: Duration,
    /// Backoff multiplier applied per attempt.
    pub retry_backoff: f64,
    /// Log each fetched page.
    pub verbose: bool,
    /// Allow switching to date continuation at the result window.
    pub date_fallback_enabled: bool,
    /// The search-backend result window.
    pub elasticsearch_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_per_page: MAX_PER_PAGE,
            default_per_page: 100,
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            retry_backoff: 2.0,
            verbose: false,
            date_fallback_enabled: true,
            elasticsearch_limit: ELASTICSEARCH_LIMIT,
        }
    }
}

/// The list-response contract shared by every paginated endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The objects on this page.
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
    /// Current page number (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Total object count across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// URL of the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_url: Option<String>,
    /// URL of the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_url: Option<String>,
    /// URL of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// URL of the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_url: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Creates a single-page response from a list of objects.
    pub fn single_page(objects: Vec<T>) -> Self {
        let count = objects.len();
        Self {
            objects,
            page: Some(1),
            pages: Some(1),
            per_page: Some(count as u32),
            total: Some(count as u64),
            first_url: None,
            last_url: None,
            next_url: None,
            prev_url: None,
        }
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self::single_page(Vec::new())
    }
}

/// Query issued for one page fetch.
///
/// The fetch closure owns the caller's filters; the engine only varies the
/// page cursor and, after a window-cap switch, the continuation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number to fetch (1-indexed).
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Continuation filter: only objects created strictly after this
    /// instant. `None` until the result window is hit.
    pub date_created_gt: Option<DateTime<Utc>>,
}

/// Access to the `date_created` timestamp the continuation fallback needs.
///
/// The default returns `None`; list DTOs that participate in deep search
/// traversal override it.
pub trait PageItem {
    /// Creation timestamp of the object, if it carries one.
    fn date_created(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl PageItem for serde_json::Value {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.get("date_created")
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
    }
}

/// Traversal phases; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraversalState {
    NormalPaging,
    DateContinuation,
}

/// Drives a page-returning closure to completion.
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Creates a paginator with the given configuration.
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetches every page and returns the merged result as one virtual
    /// page (`page = pages = 1`, `per_page = total = len(objects)`).
    pub async fn collect_all<T, F, Fut>(&self, mut fetch: F) -> IconikResult<PaginatedResponse<T>>
    where
        T: PageItem,
        F: FnMut(PageQuery) -> Fut,
        Fut: Future<Output = IconikResult<PaginatedResponse<T>>>,
    {
        let cfg = &self.config;
        let per_page = cfg.default_per_page.min(cfg.max_per_page).max(1);
        let mut query = PageQuery {
            page: 1,
            per_page,
            date_created_gt: None,
        };
        let mut state = TraversalState::NormalPaging;
        let mut objects: Vec<T> = Vec::new();
        let mut attempt: u32 = 0;
        let mut window_fetched: usize = 0;
        let mut urls = (None, None, None, None);

        loop {
            let response = match fetch(query.clone()).await {
                Ok(response) => {
                    attempt = 0;
                    response
                }
                Err(e) => {
                    attempt += 1;
                    if attempt >= cfg.max_retries {
                        return Err(IconikError::pagination(format!(
                            "Giving up on page {} after {} failed attempts",
                            query.page, attempt
                        ))
                        .with_cause(e));
                    }
                    let delay = backoff_delay(cfg, attempt);
                    tracing::debug!(
                        page = query.page,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying page fetch"
                    );
                    sleep(delay).await;
                    continue;
                }
            };

            let fetched_now = response.objects.len();
            let page = response.page.unwrap_or(query.page);
            let pages = response.pages.unwrap_or(page);
            let total = response.total;
            urls = (
                response.first_url,
                response.last_url,
                response.next_url,
                response.prev_url,
            );
            objects.extend(response.objects);
            window_fetched += fetched_now;

            if cfg.verbose {
                tracing::info!(
                    page = page,
                    pages = pages,
                    fetched = fetched_now,
                    accumulated = objects.len(),
                    "Fetched page"
                );
            }

            match state {
                TraversalState::DateContinuation => {
                    if fetched_now == 0 {
                        break;
                    }
                    if window_fetched >= cfg.elasticsearch_limit && page < pages {
                        // The continuation window itself hit the cap; re-window.
                        match continuation_date(&objects) {
                            Some(cutoff) => {
                                query.date_created_gt = Some(cutoff);
                                query.page = 1;
                                window_fetched = 0;
                                continue;
                            }
                            None => {
                                warn_no_dates(objects.len());
                                break;
                            }
                        }
                    }
                    if page < pages {
                        query.page = page + 1;
                        continue;
                    }
                    break;
                }
                TraversalState::NormalPaging => {
                    // Backends cap `pages` at the window edge, so `total`
                    // is consulted as well when deciding whether more
                    // results exist beyond the cap.
                    let more = page < pages
                        || total.is_some_and(|t| (t as usize) > objects.len());
                    if cfg.date_fallback_enabled
                        && objects.len() >= cfg.elasticsearch_limit
                        && more
                    {
                        match continuation_date(&objects) {
                            Some(cutoff) => {
                                state = TraversalState::DateContinuation;
                                tracing::debug!(
                                    accumulated = objects.len(),
                                    cutoff = %cutoff,
                                    "Result window reached, switching to date continuation"
                                );
                                query.date_created_gt = Some(cutoff);
                                query.page = 1;
                                window_fetched = 0;
                                continue;
                            }
                            None => {
                                warn_no_dates(objects.len());
                                break;
                            }
                        }
                    }
                    if page < pages {
                        query.page = page + 1;
                        continue;
                    }
                    break;
                }
            }
        }

        let count = objects.len();
        Ok(PaginatedResponse {
            objects,
            page: Some(1),
            pages: Some(1),
            per_page: Some(count as u32),
            total: Some(count as u64),
            first_url: urls.0,
            last_url: urls.1,
            next_url: urls.2,
            prev_url: urls.3,
        })
    }
}

/// Maximum observed `date_created` plus one second, to avoid revisiting
/// the boundary object.
fn continuation_date<T: PageItem>(objects: &[T]) -> Option<DateTime<Utc>> {
    objects
        .iter()
        .filter_map(|o| o.date_created())
        .max()
        .map(|d| d + ChronoDuration::seconds(1))
}

fn backoff_delay(cfg: &PaginationConfig, attempt: u32) -> Duration {
    let millis = cfg.retry_delay.as_millis() as f64
        * cfg.retry_backoff.powi(attempt.saturating_sub(1) as i32);
    Duration::from_millis(millis as u64)
}

fn warn_no_dates(accumulated: usize) {
    tracing::warn!(
        accumulated = accumulated,
        "Result window cap reached but objects carry no usable date_created; returning partial result"
    );
}
