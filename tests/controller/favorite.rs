use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use kosku::{
    model::favorite::LikeTarget,
    server::controller::favorite::{like_status, list_favorites, toggle_like},
};
use kosku_test_utils::prelude::*;

use crate::{
    util::{into_json, sign_in},
    TestSetupExt,
};

#[tokio::test]
/// Expect the first toggle to like the listing and the second to unlike it
async fn toggle_alternates_like_state() -> Result<(), TestError> {
    let test = test_setup_with_kos_tables!()?;
    let owner = test
        .insert_user_with_role("pemilik@example.com", "pemilik")
        .await?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let kos = test.insert_kos(owner.id).await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let target = LikeTarget {
        kos_id: Some(kos.id),
    };

    let result = toggle_like(
        State(state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Json(target.clone()),
    )
    .await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["liked"], true);

    let result = list_favorites(State(state.clone()), HeaderMap::new(), test.session.clone()).await;
    let (_, body) = into_json(result).await;
    assert_eq!(body["data"][0]["id"], kos.id);

    let result = toggle_like(
        State(state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Json(target.clone()),
    )
    .await;
    let (_, body) = into_json(result).await;
    assert_eq!(body["liked"], false);

    let result = like_status(
        State(state),
        HeaderMap::new(),
        test.session.clone(),
        Query(target),
    )
    .await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["liked"], false);
    assert_eq!(body["kos_id"], kos.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the kos ID is missing
async fn missing_kos_id_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_kos_tables!()?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let result = toggle_like(
        State(state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Json(LikeTarget::default()),
    )
    .await;
    let (status, body) = into_json(result).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let result = like_status(
        State(state),
        HeaderMap::new(),
        test.session.clone(),
        Query(LikeTarget::default()),
    )
    .await;
    let (status, _) = into_json(result).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 when liking a listing that does not exist
async fn unknown_listing_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_kos_tables!()?;
    let tenant = test
        .insert_user_with_role("penyewa@example.com", "penyewa")
        .await?;
    let state = test.into_app_state();
    sign_in(&test, tenant.id).await?;

    let result = toggle_like(
        State(state),
        HeaderMap::new(),
        test.session.clone(),
        Json(LikeTarget { kos_id: Some(404) }),
    )
    .await;

    let (status, _) = into_json(result).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
