// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use realestate_search::application::services::ApplicationServices;
use realestate_search::domain::property::{PropertyRecord, PropertySource};
use realestate_search::infrastructure::repositories::InMemoryPropertySource;
use realestate_search::presentation::http::routes::{RouterOptions, build_router_with_options};
use realestate_search::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(source: Arc<dyn PropertySource>, max_page_size: Option<u32>) -> HttpState {
    let services = Arc::new(ApplicationServices::new(source, max_page_size));
    HttpState { services }
}

pub fn make_router_with_source(source: Arc<dyn PropertySource>) -> axum::Router {
    build_router_with_options(build_test_state(source, None), RouterOptions::default())
}

/// Router whose search caps page sizes at `max_page_size`.
pub fn make_capped_router(records: Vec<PropertyRecord>, max_page_size: u32) -> axum::Router {
    let source = Arc::new(InMemoryPropertySource::new(records));
    build_router_with_options(
        build_test_state(source, Some(max_page_size)),
        RouterOptions::default(),
    )
}

pub fn make_test_router(records: Vec<PropertyRecord>) -> axum::Router {
    make_router_with_source(Arc::new(InMemoryPropertySource::new(records)))
}

/// Issue a GET and return the status plus the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();

    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type for {uri}: {content_type}"
    );

    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("invalid JSON from {uri}: {err}"));
    (status, json)
}

pub fn content_ids(page: &Value) -> Vec<i64> {
    page["content"]
        .as_array()
        .expect("content array")
        .iter()
        .map(|item| item["id"].as_i64().expect("numeric id"))
        .collect()
}
