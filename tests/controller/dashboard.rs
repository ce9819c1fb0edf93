use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};
use kosku::server::controller::dashboard::get_dashboard;
use kosku_test_utils::prelude::*;

use crate::{
    util::{into_json, sign_in},
    TestSetupExt,
};

#[tokio::test]
/// Expect tenant statistics for a tenant with one lease and one unpaid invoice
async fn tenant_statistics() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let (_owner, tenant, kos, _sewa, _tagihan) = test.insert_rental_chain().await?;
    test.insert_like(tenant.id, kos.id).await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let result = get_dashboard(State(state), HeaderMap::new(), test.session.clone()).await;

    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        serde_json::json!({
            "role": "penyewa",
            "available_kos": 1,
            "favorites": 1,
            "active_leases": 1,
            "unpaid_invoices": 1,
        })
    );

    Ok(())
}

#[tokio::test]
/// Expect owner statistics covering the owner's rooms
async fn owner_statistics() -> Result<(), TestError> {
    let test = test_setup_with_billing_tables!()?;
    let (owner, _tenant, _kos, _sewa, _tagihan) = test.insert_rental_chain().await?;
    let state = test.into_app_state();
    sign_in(&test, owner.id).await?;

    let result = get_dashboard(State(state), HeaderMap::new(), test.session.clone()).await;

    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "pemilik");
    assert_eq!(body["data"]["total_kos"], 1);
    assert_eq!(body["data"]["total_rooms"], 10);
    assert_eq!(body["data"]["available_rooms"], 5);
    assert_eq!(body["data"]["paid_revenue"], 0);

    Ok(())
}
