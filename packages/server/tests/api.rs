//! HTTP surface tests: router wiring, wire shape, and error behavior.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use server_core::build_app;
use tower::util::ServiceExt;
use travel_search::{SimulatedSearcher, WebSearcher};

fn test_app() -> axum::Router {
    let searcher: Arc<dyn WebSearcher> =
        Arc::new(SimulatedSearcher::new().with_delay(Duration::ZERO));
    build_app(searcher)
}

fn search_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const OOTY_BODY: &str = r#"{
    "destination": "Ooty",
    "currentLocation": "Bangalore",
    "budget": "10k-25k",
    "duration": "3-5",
    "groupSize": "2",
    "preferences": {
        "foodIncluded": true,
        "accommodationType": "hotel",
        "transportIncluded": true
    }
}"#;

#[tokio::test]
async fn health_answers_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn search_returns_package_array() {
    let response = test_app().oneshot(search_request(OOTY_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let packages: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let array = packages.as_array().unwrap();
    assert_eq!(array.len(), 8);

    // camelCase wire shape
    let first = &array[0];
    assert!(first.get("bookingUrl").is_some());
    assert!(first.get("price").is_some());
    assert!(first["agency"].get("verificationLevel").is_some());
    assert!(first["inclusions"].get("accommodation").is_some());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = test_app()
        .oneshot(search_request(r#"{"destination": "Ooty"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_budget_band_is_rejected() {
    let body = OOTY_BODY.replace("10k-25k", "all-the-money");
    let response = test_app().oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
