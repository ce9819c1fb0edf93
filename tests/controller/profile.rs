use axum::{extract::State, http::StatusCode, Json};
use kosku::{
    model::profile::ProfileForm,
    server::controller::profile::{get_profile, upsert_profile},
};
use kosku_test_utils::prelude::*;

use crate::{
    util::{bearer_headers, into_json},
    TestSetupExt,
};

fn profile_form(full_name: &str) -> ProfileForm {
    ProfileForm {
        full_name: Some(full_name.to_string()),
        phone_number: Some(TEST_PHONE.to_string()),
        gender: Some("Female".to_string()),
        date_of_birth: Some("2001-08-17".to_string()),
        address: Some("Jl. Gejayan No. 10, Yogyakarta".to_string()),
        emergency_contact: Some("082198765432".to_string()),
    }
}

#[tokio::test]
/// Expect 404 before the profile exists, then 201 on save and 200 on read
async fn profile_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let state = test.into_app_state();

    let headers = bearer_headers(&state, tenant.id);
    let result = get_profile(State(state.clone()), headers, test.session.clone()).await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let headers = bearer_headers(&state, tenant.id);
    let result = upsert_profile(
        State(state.clone()),
        headers,
        test.session.clone(),
        Json(profile_form("Sari Dewi")),
    )
    .await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["gender"], "female");

    let headers = bearer_headers(&state, tenant.id);
    let result = upsert_profile(
        State(state.clone()),
        headers,
        test.session.clone(),
        Json(profile_form("Sari Dewi Lestari")),
    )
    .await;
    let (status, _) = into_json(result).await;
    assert_eq!(status, StatusCode::CREATED);

    let headers = bearer_headers(&state, tenant.id);
    let result = get_profile(State(state), headers, test.session.clone()).await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["full_name"], "Sari Dewi Lestari");
    assert_eq!(body["data"]["date_of_birth"], "2001-08-17");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a gender outside the vocabulary
async fn rejects_unknown_gender() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let state = test.into_app_state();
    let headers = bearer_headers(&state, tenant.id);

    let mut form = profile_form("Sari Dewi");
    form.gender = Some("other".to_string());
    let result = upsert_profile(State(state), headers, test.session.clone(), Json(form)).await;

    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("Gender")));

    Ok(())
}
