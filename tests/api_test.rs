use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use canopy::api::CanopyApi;
use canopy::conf::ListingConfig;
use canopy::index::MemoryStore;
use canopy::listing::ListingBuilder;
use canopy::testutil::seeded_store;
use canopy::track::InflightTracker;

fn router_for(store: MemoryStore) -> Router {
    let store = Arc::new(store);
    let builder = ListingBuilder::new(store.clone(), store, ListingConfig::default());
    CanopyApi::new(builder, Arc::new(InflightTracker::new())).router()
}

async fn body_bytes(router: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    (status, bytes)
}

async fn body_json(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = body_bytes(router, req).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let router = router_for(MemoryStore::new());
    let (status, bytes) = body_bytes(router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}

#[tokio::test]
async fn test_openapi() {
    let router = router_for(MemoryStore::new());
    let (status, json) = body_json(router, get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["openapi"], "3.1.0");
    assert!(json["paths"]["/health"].is_object());
    assert!(json["paths"]["/api/v1/list/{path}"].is_object());
}

#[tokio::test]
async fn test_root_listing_on_empty_store() {
    let router = router_for(MemoryStore::new());
    let (status, json) = body_json(router, get("/api/v1/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"path": "/", "files": {}, "dirs": {}}));
}

#[tokio::test]
async fn test_listing_with_metadata() {
    let store = seeded_store(&[("a/b.txt", 10), ("a/c/d.txt", 20)]).await;
    let router = router_for(store);

    let (status, json) = body_json(router, get("/api/v1/list/a?include_meta=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path"], "/a");
    assert_eq!(json["files"]["b.txt"]["length"], 10);
    assert_eq!(
        json["dirs"]["c"],
        json!({"descendants": 1, "size": 20, "smallest": 20, "largest": 20})
    );
}

#[tokio::test]
async fn test_listing_defaults_to_empty_placeholders() {
    let store = seeded_store(&[("a/b.txt", 10)]).await;
    let router = router_for(store);

    let (status, json) = body_json(router, get("/api/v1/list/a")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["files"]["b.txt"], json!({}));
}

#[tokio::test]
async fn test_depth_query_param() {
    let store = seeded_store(&[("a/c/d.txt", 20)]).await;
    let router = router_for(store);

    let (status, json) = body_json(router, get("/api/v1/list/a?depth=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["files"]["c/d.txt"].is_object());
    assert_eq!(json["dirs"], json!({}));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let store = seeded_store(&[("a/b.txt", 10)]).await;
    let router = router_for(store);

    let (status, json) = body_json(router, get("/api/v1/list/a/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["path"], "/a");
    assert!(json["files"]["b.txt"].is_object());
}

#[tokio::test]
async fn test_inflight_snapshot_is_empty_between_requests() {
    let store = seeded_store(&[("a/b.txt", 10)]).await;
    let router = router_for(store);

    let (status, _) = body_json(router.clone(), get("/api/v1/list/a")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = body_json(router, get("/debug/inflight")).await;
    assert_eq!(status, StatusCode::OK);
    // the snapshot is taken while /debug/inflight itself is in flight
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["uri"], "/debug/inflight");
}
