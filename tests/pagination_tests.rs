//! Pagination engine tests, driven by closures rather than HTTP.

use integrations_iconik::mocks::fixtures;
use integrations_iconik::{
    IconikError, IconikErrorKind, PageQuery, PaginatedResponse, PaginationConfig, Paginator,
    SearchObject,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn fast_config() -> PaginationConfig {
    PaginationConfig {
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    }
}

/// Shared recorder for the queries the engine issues.
fn recorder() -> Arc<Mutex<Vec<PageQuery>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[tokio::test]
async fn merges_pages_into_one_virtual_page() {
    let calls = recorder();
    let paginator = Paginator::new(fast_config());

    let result = paginator
        .collect_all(|query| {
            let calls = calls.clone();
            async move {
                let mut guard = calls.lock().unwrap();
                guard.push(query);
                let call = guard.len();
                drop(guard);
                match call {
                    1 => Ok(fixtures::page(fixtures::search_objects(2, 0), 1, 2, 4)),
                    2 => Ok(fixtures::page(fixtures::search_objects(2, 2), 2, 2, 4)),
                    n => panic!("unexpected fetch #{}", n),
                }
            }
        })
        .await
        .unwrap();

    let ids: Vec<_> = result.objects.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["obj-0", "obj-1", "obj-2", "obj-3"]);
    assert_eq!(result.page, Some(1));
    assert_eq!(result.pages, Some(1));
    assert_eq!(result.per_page, Some(4));
    assert_eq!(result.total, Some(4));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].page, 1);
    assert_eq!(calls[1].page, 2);
    assert!(calls.iter().all(|q| q.date_created_gt.is_none()));
}

#[tokio::test]
async fn single_page_returns_after_one_fetch() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let paginator = Paginator::new(fast_config());

    let result = paginator
        .collect_all(|_query| {
            let fetches = fetches.clone();
            async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(fixtures::page(fixtures::search_objects(3, 0), 1, 1, 3))
            }
        })
        .await
        .unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    assert_eq!(result.objects.len(), 3);
}

#[tokio::test]
async fn window_cap_switches_to_date_continuation() {
    let calls = recorder();
    let config = PaginationConfig {
        elasticsearch_limit: 100,
        default_per_page: 50,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let result = paginator
        .collect_all(|query| {
            let calls = calls.clone();
            async move {
                let mut guard = calls.lock().unwrap();
                guard.push(query.clone());
                let call = guard.len();
                drop(guard);
                match call {
                    // Two windowed pages of 50, dates ascending; the server
                    // reports 200 matches in total.
                    1 => Ok(fixtures::page(fixtures::search_objects(50, 0), 1, 2, 200)),
                    2 => Ok(fixtures::page(fixtures::search_objects(50, 50), 2, 2, 200)),
                    // The continuation request gets the remaining object.
                    3 => {
                        assert!(query.date_created_gt.is_some());
                        Ok(fixtures::page(fixtures::search_objects(1, 200), 1, 1, 200))
                    }
                    n => panic!("unexpected fetch #{}", n),
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(result.objects.len(), 101);
    assert_eq!(result.total, Some(101));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    // Continuation restarts at page 1, filtered strictly after the maximum
    // observed date_created plus one second. The last windowed object was
    // created at base + 99s.
    let continuation = &calls[2];
    assert_eq!(continuation.page, 1);
    assert_eq!(
        continuation.date_created_gt,
        Some(fixtures::base_time() + chrono::Duration::seconds(100))
    );
}

#[tokio::test]
async fn exactly_at_window_with_no_more_results_terminates() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        elasticsearch_limit: 100,
        default_per_page: 50,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let result = paginator
        .collect_all(|_query| {
            let fetches = fetches.clone();
            async move {
                let call = fetches.fetch_add(1, Ordering::SeqCst) + 1;
                match call {
                    1 => Ok(fixtures::page(fixtures::search_objects(50, 0), 1, 2, 100)),
                    2 => Ok(fixtures::page(fixtures::search_objects(50, 50), 2, 2, 100)),
                    n => panic!("unexpected fetch #{}", n),
                }
            }
        })
        .await
        .unwrap();

    // fetched == elasticsearch_limit and page == pages with nothing beyond:
    // no continuation request is issued.
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(result.objects.len(), 100);
}

#[tokio::test]
async fn cap_without_dates_returns_partial_result() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        elasticsearch_limit: 4,
        default_per_page: 2,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let dateless = |offset: i64| -> Vec<SearchObject> {
        fixtures::search_objects(2, offset)
            .into_iter()
            .map(|mut o| {
                o.date_created = None;
                o
            })
            .collect()
    };

    let result: PaginatedResponse<SearchObject> = paginator
        .collect_all(|_query| {
            let fetches = fetches.clone();
            let objects = dateless((fetches.load(Ordering::SeqCst) as i64) * 2);
            async move {
                let call = fetches.fetch_add(1, Ordering::SeqCst) + 1;
                match call {
                    1 => Ok(fixtures::page(objects, 1, 4, 8)),
                    2 => Ok(fixtures::page(objects, 2, 4, 8)),
                    n => panic!("unexpected fetch #{}", n),
                }
            }
        })
        .await
        .unwrap();

    // The cap was hit with more pages available, but no date_created was
    // extractable; the engine stops and returns what it has.
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(result.objects.len(), 4);
}

#[tokio::test]
async fn fallback_disabled_keeps_normal_paging() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        elasticsearch_limit: 4,
        default_per_page: 2,
        date_fallback_enabled: false,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let result = paginator
        .collect_all(|query| {
            let fetches = fetches.clone();
            async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                let page = query.page;
                assert!(query.date_created_gt.is_none());
                Ok(fixtures::page(
                    fixtures::search_objects(2, (page as i64 - 1) * 2),
                    page,
                    3,
                    6,
                ))
            }
        })
        .await
        .unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 3);
    assert_eq!(result.objects.len(), 6);
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_retries: 3,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let result = paginator
        .collect_all(|_query| {
            let attempts = attempts.clone();
            async move {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err(IconikError::connection("connection reset"))
                } else {
                    Ok(fixtures::page(fixtures::search_objects(2, 0), 1, 1, 2))
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(result.objects.len(), 2);
}

#[tokio::test]
async fn retry_exhaustion_raises_and_discards_partial_progress() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_retries: 2,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    let error = paginator
        .collect_all(|query| {
            let attempts = attempts.clone();
            async move {
                if query.page == 1 {
                    // First page succeeds, the second never does.
                    return Ok(fixtures::page(fixtures::search_objects(2, 0), 1, 2, 4));
                }
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<PaginatedResponse<SearchObject>, _>(IconikError::connection(
                    "connection reset",
                ))
            }
        })
        .await
        .unwrap_err();

    assert_eq!(*error.kind(), IconikErrorKind::PaginationExhausted);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn success_resets_the_attempt_counter() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_retries: 2,
        retry_delay: Duration::from_millis(5),
        ..Default::default()
    };
    let paginator = Paginator::new(config);

    // Each page fails once before succeeding; with max_retries = 2 a
    // stale counter would abort on the second page's failure.
    let result = paginator
        .collect_all(|query| {
            let fetches = fetches.clone();
            async move {
                let call = fetches.fetch_add(1, Ordering::SeqCst) + 1;
                match (call, query.page) {
                    (1, 1) => Err(IconikError::connection("reset")),
                    (2, 1) => Ok(fixtures::page(fixtures::search_objects(1, 0), 1, 2, 2)),
                    (3, 2) => Err(IconikError::connection("reset")),
                    (4, 2) => Ok(fixtures::page(fixtures::search_objects(1, 1), 2, 2, 2)),
                    other => panic!("unexpected fetch {:?}", other),
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(result.objects.len(), 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
}
