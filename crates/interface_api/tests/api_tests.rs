//! HTTP tests for the returns API
//!
//! Requests are driven straight through the router without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_returns::OverClaimPolicy;
use interface_api::{
    config::ApiConfig, create_router, handlers::health::SERVICE_NAME, middleware::REQUEST_ID_HEADER,
};
use test_utils::ScenarioFixtures;

fn app() -> Router {
    create_router(ApiConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], SERVICE_NAME);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
    }
}

// ============================================================================
// Returnable Items Tests
// ============================================================================

mod returnable_items_tests {
    use super::*;

    #[tokio::test]
    async fn test_order_returnable_items() {
        let (status, body) = post_json(
            app(),
            "/api/v1/orders/returnable-items",
            ScenarioFixtures::partially_claimed_order_json(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["id"], "A");
        assert_eq!(body["items"][0]["quantity"], 3);
        assert_eq!(body["items"][0]["thumbnail"], "shirt.png");
    }

    #[tokio::test]
    async fn test_order_route_applies_swaps() {
        let (status, body) = post_json(
            app(),
            "/api/v1/orders/returnable-items",
            ScenarioFixtures::swapped_order_json(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["quantity"], 7);
    }

    #[tokio::test]
    async fn test_claim_route_ignores_swaps() {
        let (status, body) = post_json(
            app(),
            "/api/v1/claims/returnable-items",
            ScenarioFixtures::swapped_order_json(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["quantity"], 3);
    }

    #[tokio::test]
    async fn test_missing_items_is_validation_error() {
        let (status, body) = post_json(
            app(),
            "/api/v1/orders/returnable-items",
            json!({ "claims": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "order.items is missing");
    }

    fn over_claimed_order_json() -> Value {
        json!({
            "items": [ { "id": "A", "quantity": 1 } ],
            "claims": [
                {
                    "claim_items": [ { "item_id": "A", "quantity": 2 } ],
                    "fulfillment_status": "fulfilled",
                    "payment_status": "refunded"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_over_claim_is_conflict_by_default() {
        let (status, body) = post_json(
            app(),
            "/api/v1/orders/returnable-items",
            over_claimed_order_json(),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
    }

    #[tokio::test]
    async fn test_over_claim_clamped_when_configured() {
        let config = ApiConfig {
            over_claim_policy: OverClaimPolicy::Clamp,
            ..ApiConfig::default()
        };

        let (status, body) = post_json(
            create_router(config),
            "/api/v1/orders/returnable-items",
            over_claimed_order_json(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["items"], json!([]));
    }
}
