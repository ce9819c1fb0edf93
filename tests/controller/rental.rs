use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use kosku::{model::rental::CreateRentalDto, server::controller::rental::{create_rental, list_invoices}};
use kosku_test_utils::prelude::*;

use crate::{
    util::{into_json, sign_in},
    TestSetupExt,
};

#[tokio::test]
/// Expect 201 with one invoice per month from January 31st through April 30th
async fn creates_lease_with_monthly_invoices() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let owner = test
        .insert_user_with_role("pemilik@example.com", "pemilik")
        .await?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let kos = test.insert_kos(owner.id).await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let form = CreateRentalDto {
        kos_id: kos.id,
        start_date: Some("2025-01-31".to_string()),
        end_date: Some("2025-04-30".to_string()),
        monthly_price: None,
    };
    let result = create_rental(State(state.clone()), HeaderMap::new(), test.session.clone(), Json(form)).await;

    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total_invoices"], 4);
    assert_eq!(body["data"]["sewa"]["monthly_price"], kos.monthly_price);
    assert_eq!(body["data"]["tagihan"]["billing_month"], 1);
    assert_eq!(body["data"]["tagihan"]["due_date"], "2025-01-01");
    assert_eq!(body["data"]["tagihan"]["status"], "unpaid");

    let result = list_invoices(State(state), HeaderMap::new(), test.session.clone()).await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"][0]["kos_name"], kos.name);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the start date is missing or the end date precedes it
async fn rejects_invalid_dates() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let owner = test
        .insert_user_with_role("pemilik@example.com", "pemilik")
        .await?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let kos = test.insert_kos(owner.id).await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let missing_start = CreateRentalDto {
        kos_id: kos.id,
        ..Default::default()
    };
    let result = create_rental(
        State(state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Json(missing_start),
    )
    .await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Start date is required");

    let reversed = CreateRentalDto {
        kos_id: kos.id,
        start_date: Some("2025-03-01".to_string()),
        end_date: Some("2025-02-01".to_string()),
        monthly_price: None,
    };
    let result = create_rental(State(state), HeaderMap::new(), test.session.clone(), Json(reversed)).await;
    let (status, _) = into_json(result).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 when renting a listing that does not exist
async fn unknown_listing_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let form = CreateRentalDto {
        kos_id: 404,
        start_date: Some("2025-01-01".to_string()),
        ..Default::default()
    };
    let result = create_rental(State(state), HeaderMap::new(), test.session.clone(), Json(form)).await;

    let (status, _) = into_json(result).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
