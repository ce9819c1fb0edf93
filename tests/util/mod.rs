//! Helpers for driving controllers directly in integration tests.

use axum::{
    body::to_bytes,
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use kosku::{
    model::kos::KosForm,
    server::{
        model::{
            app::AppState,
            session::user::{SessionUserId, SESSION_USER_ID_KEY},
        },
        storage::LocalStorage,
        util::jwt::JwtKeys,
    },
};
use kosku_test_utils::prelude::*;

/// Extension trait for TestSetup to create the full AppState controllers expect
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        // Unique per setup so tests running in parallel never share uploads
        let upload_dir =
            std::env::temp_dir().join(format!("kosku-test-uploads-{}", rand::random::<u64>()));

        AppState {
            db: self.state.db.clone(),
            payment_client: self.state.payment_client.clone(),
            jwt: JwtKeys::new(TEST_JWT_SECRET),
            storage: LocalStorage::new(upload_dir, TEST_PUBLIC_ASSET_URL),
        }
    }
}

/// Store `user_id` in the test session as a web login would
pub async fn sign_in(test: &TestSetup, user_id: i32) -> Result<(), TestError> {
    test.session
        .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
        .await?;

    Ok(())
}

/// Headers carrying a freshly issued access token for `user_id`
pub fn bearer_headers(state: &AppState, user_id: i32) -> HeaderMap {
    let pair = state.jwt.issue_pair(user_id, Utc::now()).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", pair.access_token)).unwrap(),
    );

    headers
}

/// Converts a handler result into its response, split into status and JSON body
pub async fn into_json(result: impl IntoResponse) -> (axum::http::StatusCode, serde_json::Value) {
    let resp: Response = result.into_response();
    let status = resp.status();

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Listing form every validation rule accepts
pub fn valid_kos_form() -> KosForm {
    KosForm {
        name: "Kos Melati".to_string(),
        address: "Jl. Kaliurang KM 5".to_string(),
        city: "Yogyakarta".to_string(),
        gender_type: "putri".to_string(),
        monthly_price: 1_200_000,
        total_rooms: 12,
        available_rooms: 4,
        nomor_pemilik: TEST_PHONE.to_string(),
        fasilitas_kos: vec!["WiFi".to_string(), "Dapur".to_string()],
        ..Default::default()
    }
}
