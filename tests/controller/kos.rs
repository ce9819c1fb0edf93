use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use kosku::{
    model::kos::{MobileSearchQuery, SearchQuery},
    server::controller::{
        kos::{create_kos, delete_kos, get_kos, list_owner_kos, search_kos, update_kos},
        search::{get_mobile_kos, list_mobile_kos},
    },
};
use kosku_test_utils::{fixtures::kos::kos_active_model, prelude::*};
use sea_orm::ActiveValue;

use crate::{
    util::{bearer_headers, into_json, sign_in, valid_kos_form},
    TestSetupExt,
};

mod create_kos {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the listing owned by the signed in owner
    async fn owner_creates_listing() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let state = test.into_app_state();
        sign_in(&test, owner.id).await?;

        let result = create_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Json(valid_kos_form()),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user_id"], owner.id);
        assert_eq!(body["data"]["property_status"], "active");
        assert_eq!(body["data"]["fasilitas_kos"][1], "Dapur");

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 when a tenant tries to create a listing
    async fn tenant_is_forbidden() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let tenant = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let state = test.into_app_state();
        sign_in(&test, tenant.id).await?;

        let result = create_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Json(valid_kos_form()),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 naming the rule when available rooms exceed total rooms
    async fn rejects_more_available_than_total_rooms() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let state = test.into_app_state();
        sign_in(&test, owner.id).await?;

        let mut form = valid_kos_form();
        form.available_rooms = form.total_rooms + 1;
        let result = create_kos(State(state), HeaderMap::new(), test.session.clone(), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Available rooms cannot exceed total rooms");

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without a session or token
    async fn requires_authentication() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let state = test.into_app_state();

        let result = create_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Json(valid_kos_form()),
        )
        .await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod modify_kos {
    use super::*;

    #[tokio::test]
    /// Expect 403 when another owner updates the listing
    async fn other_owner_cannot_update() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let other = test
            .insert_user_with_role("lain@example.com", "pemilik")
            .await?;
        let kos = test.insert_kos(owner.id).await?;
        let state = test.into_app_state();
        sign_in(&test, other.id).await?;

        let result = update_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Path(kos.id),
            Json(valid_kos_form()),
        )
        .await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    /// Expect an admin to update any listing
    async fn admin_can_update() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let admin = test
            .insert_user_with_role("admin@example.com", "admin")
            .await?;
        let kos = test.insert_kos(owner.id).await?;
        let state = test.into_app_state();
        sign_in(&test, admin.id).await?;

        let result = update_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Path(kos.id),
            Json(valid_kos_form()),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Kos Melati");
        assert_eq!(body["data"]["user_id"], owner.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 when deleting a listing that has a lease, 200 otherwise
    async fn delete_refuses_leased_listing() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, _tenant, leased, _sewa, _tagihan) = test.insert_rental_chain().await?;
        let vacant = test.insert_kos(owner.id).await?;
        let state = test.into_app_state();
        sign_in(&test, owner.id).await?;

        let result = delete_kos(
            State(state.clone()),
            HeaderMap::new(),
            test.session.clone(),
            Path(leased.id),
        )
        .await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let result = delete_kos(
            State(state.clone()),
            HeaderMap::new(),
            test.session.clone(),
            Path(vacant.id),
        )
        .await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);

        let result = get_kos(State(state), Path(vacant.id)).await;
        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Kos not found");

        Ok(())
    }

    #[tokio::test]
    /// Expect only the caller's own listings
    async fn lists_owner_listings() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let other = test
            .insert_user_with_role("lain@example.com", "pemilik")
            .await?;
        test.insert_kos(owner.id).await?;
        test.insert_kos(owner.id).await?;
        test.insert_kos(other.id).await?;
        let state = test.into_app_state();
        sign_in(&test, owner.id).await?;

        let result = list_owner_kos(State(state), HeaderMap::new(), test.session.clone()).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

        Ok(())
    }
}

mod search {
    use super::*;

    #[tokio::test]
    /// Expect public search to filter by city and return every fetched city
    async fn filters_by_city() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        test.insert_kos_model(kos_active_model(owner.id, "Kos Mawar", "Bandung", 900_000))
            .await?;
        test.insert_kos_model(kos_active_model(owner.id, "Kos Anggrek", "Yogyakarta", 700_000))
            .await?;
        let state = test.into_app_state();

        let query = SearchQuery {
            city: Some("Bandung".to_string()),
            ..Default::default()
        };
        let result = search_kos(State(state), Query(query)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["kos"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"]["kos"][0]["name"], "Kos Mawar");
        assert_eq!(
            body["data"]["cities"],
            serde_json::json!(["Bandung", "Yogyakarta"])
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect mobile listing to page active listings only
    async fn mobile_pages_active_listings() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let tenant = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        for i in 0..3 {
            test.insert_kos_model(kos_active_model(
                owner.id,
                &format!("Kos {}", i),
                "Malang",
                500_000,
            ))
            .await?;
        }
        let mut inactive = kos_active_model(owner.id, "Kos Tutup", "Malang", 500_000);
        inactive.property_status = ActiveValue::Set("inactive".to_string());
        test.insert_kos_model(inactive).await?;
        let state = test.into_app_state();
        let headers = bearer_headers(&state, tenant.id);

        let query = MobileSearchQuery {
            page: Some("2".to_string()),
            limit: Some("2".to_string()),
            ..Default::default()
        };
        let result = list_mobile_kos(State(state), headers, test.session.clone(), Query(query)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["pagination"]["total_records"], 3);
        assert_eq!(body["pagination"]["total_pages"], 2);
        assert_eq!(body["pagination"]["current_page"], 2);
        assert_eq!(body["pagination"]["prev_page"], 1);
        assert!(body["pagination"]["next_page"].is_null());

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 from mobile listing without a bearer token
    async fn mobile_requires_authentication() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let state = test.into_app_state();

        let result = list_mobile_kos(
            State(state),
            HeaderMap::new(),
            test.session.clone(),
            Query(MobileSearchQuery::default()),
        )
        .await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect mobile detail to count each view
    async fn mobile_detail_counts_views() -> Result<(), TestError> {
        let test = test_setup_with_kos_tables!()?;
        let owner = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let tenant = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let kos = test.insert_kos(owner.id).await?;
        let state = test.into_app_state();

        for _ in 0..2 {
            let headers = bearer_headers(&state, tenant.id);
            let result =
                get_mobile_kos(State(state.clone()), headers, test.session.clone(), Path(kos.id)).await;
            let (status, _) = into_json(result).await;
            assert_eq!(status, StatusCode::OK);
        }

        let result = get_kos(State(state), Path(kos.id)).await;
        let (_, body) = into_json(result).await;
        assert_eq!(body["data"]["view_count"], 2);

        Ok(())
    }
}
