use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use kosku::server::router::routes;
use kosku_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{util::into_json, TestSetupExt};

fn app(test: &TestSetup) -> axum::Router {
    let session = SessionManagerLayer::new(MemoryStore::default());

    routes().with_state(test.into_app_state()).layer(session)
}

#[tokio::test]
/// Expect the error envelope from a protected route without credentials
async fn protected_route_returns_401_envelope() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = into_json(resp).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, serde_json::json!({"success": false, "error": "Unauthorized"}));

    Ok(())
}

#[tokio::test]
/// Expect a malformed bearer token to be rejected rather than falling back to the session
async fn malformed_bearer_token_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/mobile/kos")
                .header("authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = into_json(resp).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the webhook route
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = into_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/midtrans/webhook"]["post"].is_object());
    assert!(body["paths"]["/api/kos/{id}"]["delete"].is_object());

    Ok(())
}
