//! Wire-level tests against a stubbed iconik server.

use bytes::Bytes;
use integrations_iconik::{
    Body, Field, IconikClient, IconikErrorKind, RetryConfig, SearchRequest,
};
use integrations_iconik::services::ListParams;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d";
const AUTH_TOKEN: &str = "tok_integration_test";

async fn client_for(server: &MockServer) -> IconikClient {
    IconikClient::builder()
        .base_url(server.uri())
        .app_id(APP_ID)
        .auth_token(AUTH_TOKEN)
        .retry(RetryConfig {
            max_attempts: 3,
            retry_delay: Duration::from_millis(10),
            retry_backoff: 2.0,
            enabled: true,
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_asset_by_id_decodes_into_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/assets/v1/assets/abc-123/"))
        .and(header("App-ID", APP_ID))
        .and(header("Auth-Token", AUTH_TOKEN))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "abc-123", "title": "X"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.assets().get("abc-123").await.unwrap();

    assert!(response.ok());
    assert!(response.raw.status < 400);
    let asset = response.data.unwrap();
    assert_eq!(asset.id, "abc-123");
    assert_eq!(asset.title, "X");
}

#[tokio::test]
async fn patch_sends_exactly_the_assigned_fields() {
    let server = MockServer::start().await;
    // The stub only matches a body that is exactly {"title": "Y"}: no
    // defaults, no unassigned fields.
    Mock::given(method("PATCH"))
        .and(path("/API/assets/v1/assets/abc-123/"))
        .and(body_json(json!({"title": "Y"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "abc-123", "title": "Y"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let update = integrations_iconik::services::AssetUpdate {
        title: Field::Set("Y".to_string()),
        ..Default::default()
    };
    let response = client.assets().update("abc-123", update).await.unwrap();

    assert_eq!(response.data.unwrap().title, "Y");
}

#[tokio::test]
async fn invalid_permission_fails_before_any_http_call() {
    let server = MockServer::start().await;
    // No stub is mounted; any request reaching the server would 404 and
    // the expect(0) below would also flag it.
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .acls()
        .apply_group_permissions("assets", "abc-123", "group-1", &["invalid".to_string()])
        .await
        .unwrap_err();

    assert_eq!(*error.kind(), IconikErrorKind::InvalidParameter);
    assert!(error.message().contains("read"));
    assert!(error.message().contains("write"));
    assert!(error.message().contains("delete"));
    assert!(error.message().contains("change-acl"));
}

#[tokio::test]
async fn non_2xx_yields_envelope_with_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/assets/v1/assets/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["not found"]})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.assets().get("missing").await.unwrap();

    assert!(!response.ok());
    assert!(response.data.is_none());
    assert_eq!(response.raw.status, 404);
    assert!(response.raw.body.contains("not found"));

    let error = response.into_data().unwrap_err();
    assert_eq!(*error.kind(), IconikErrorKind::NotFound);
}

#[tokio::test]
async fn server_errors_are_retried_with_backoff() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/jobs/v1/jobs/j1/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/API/jobs/v1/jobs/j1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "j1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.jobs().get("j1").await.unwrap();

    assert!(response.ok());
    assert_eq!(response.data.unwrap().id, "j1");
    assert_eq!(client.metrics().retried_requests(), 2);
    assert_eq!(client.metrics().successful_requests(), 1);
}

#[tokio::test]
async fn exhausted_5xx_retries_surface_the_last_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/jobs/v1/jobs/j1/"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"errors": ["overloaded"]})))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.jobs().get("j1").await.unwrap();

    // Three attempts, then the last 5xx comes back through the envelope.
    assert!(!response.ok());
    assert_eq!(response.raw.status, 503);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/jobs/v1/jobs/j1/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.jobs().get("j1").await.unwrap();

    assert_eq!(response.raw.status, 401);
    assert_eq!(client.metrics().retried_requests(), 0);
}

#[tokio::test]
async fn delete_returns_empty_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/API/assets/v1/assets/abc-123/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.assets().delete("abc-123").await.unwrap();

    assert!(response.ok());
    assert!(response.data.is_none());
}

#[tokio::test]
async fn malformed_2xx_body_raises_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/assets/v1/assets/abc-123/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.assets().get("abc-123").await.unwrap_err();

    assert_eq!(*error.kind(), IconikErrorKind::DeserializationError);
}

#[tokio::test]
async fn search_all_walks_pages_over_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .and(query_param("page", "1"))
        .and(body_json(json!({"doc_types": ["assets"], "query": "sunset"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "s1"}, {"id": "s2"}],
            "page": 1,
            "pages": 2,
            "per_page": 2,
            "total": 4
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/API/search/v1/search/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{"id": "s3"}, {"id": "s4"}],
            "page": 2,
            "pages": 2,
            "per_page": 2,
            "total": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = SearchRequest::text("sunset", vec![integrations_iconik::DocType::Assets]);
    let result = client.search().search_all(&request).await.unwrap();

    let ids: Vec<_> = result.objects.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
    assert_eq!(result.page, Some(1));
    assert_eq!(result.pages, Some(1));
    assert_eq!(result.total, Some(4));
}

#[tokio::test]
async fn photo_upload_sends_multipart_form_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/API/users/v1/users/u1/photo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .users()
        .upload_photo("u1", "photo.png", "image/png", Bytes::from_static(b"PNGDATA"))
        .await
        .unwrap();

    assert!(response.ok());

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/API/users/v1/users/u1/photo/")
        .unwrap();
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("name=\"photo\""));
    assert!(body.contains("filename=\"photo.png\""));
    assert!(body.contains("PNGDATA"));
}

#[tokio::test]
async fn keyframe_upload_sends_raw_bytes_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/a1/keyframes/"))
        .and(header("Content-Type", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "k1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .assets()
        .upload_keyframe("a1", "image/jpeg", Bytes::from_static(b"JPEGDATA"))
        .await
        .unwrap();

    assert_eq!(response.data.unwrap().id, "k1");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].body, b"JPEGDATA");
}

#[tokio::test]
async fn raw_request_supports_form_encoding() {
    use integrations_iconik::transport::{Payload, RequestOptions};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/API/auth/v1/auth/token/exchange/"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = RequestOptions {
        payload: Payload::Form(vec![("grant".to_string(), "exchange code".to_string())]),
        ..Default::default()
    };
    let raw = client
        .raw_request(
            reqwest::Method::POST,
            "API/auth/v1",
            "auth/token/exchange/",
            options,
        )
        .await
        .unwrap();

    assert!(raw.ok());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8_lossy(&requests[0].body),
        "grant=exchange+code"
    );
}

#[tokio::test]
async fn raw_map_body_passes_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/API/assets/v1/assets/"))
        .and(body_json(json!({"title": "Clip", "weird_extra": 7})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "new", "title": "Clip"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut map = serde_json::Map::new();
    map.insert("title".to_string(), json!("Clip"));
    map.insert("weird_extra".to_string(), json!(7));
    let response = client.assets().create(Body::Raw(map)).await.unwrap();

    assert_eq!(response.data.unwrap().id, "new");
}

#[tokio::test]
async fn list_params_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/API/users/v1/users/"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [],
            "page": 2,
            "pages": 2,
            "per_page": 10,
            "total": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = ListParams::new().page(2).per_page(10);
    let response = client.users().list(&params).await.unwrap();

    assert_eq!(response.data.unwrap().page, Some(2));
}
