use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use kosku::{
    model::user::{LoginDto, RefreshDto, RegisterDto},
    server::{
        controller::auth::{login, logout, me, mobile_login, mobile_refresh, register},
        model::session::user::{SessionUserId, SESSION_USER_ID_KEY},
    },
};
use kosku_test_utils::prelude::*;

use crate::{
    util::{bearer_headers, into_json, sign_in},
    TestSetupExt,
};

fn register_form(email: &str, role: Option<&str>) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        confirm_password: TEST_PASSWORD.to_string(),
        name: Some("Sari".to_string()),
        role: role.map(str::to_string),
    }
}

fn login_form(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

mod register {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the created user and a lowercased email
    async fn creates_account() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = test.into_app_state();

        let result = register(State(state), Json(register_form("Sari@Example.com", None))).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["email"], "sari@example.com");

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 when the email is already registered
    async fn rejects_duplicate_email() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.insert_user("sari@example.com").await?;
        let state = test.into_app_state();

        let result = register(State(state), Json(register_form("sari@example.com", None))).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when registering as an admin
    async fn rejects_admin_role() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = test.into_app_state();

        let result = register(
            State(state),
            Json(register_form("sari@example.com", Some("admin"))),
        )
        .await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the password confirmation differs
    async fn rejects_mismatched_confirmation() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = test.into_app_state();

        let mut form = register_form("sari@example.com", None);
        form.confirm_password = "something-else".to_string();
        let result = register(State(state), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        Ok(())
    }
}

mod web_session {
    use super::*;

    #[tokio::test]
    /// Expect 200 and the user ID stored in session after login
    async fn login_stores_user_in_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user = test
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let state = test.into_app_state();

        let result = login(
            State(state),
            test.session.clone(),
            Json(login_form("pemilik@example.com", TEST_PASSWORD)),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["roles"]["isPemilik"], true);

        let stored = test
            .session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);
        assert_eq!(stored, Some(user.id.to_string()));

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 with the error envelope for a wrong password
    async fn login_rejects_wrong_password() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.insert_user("sari@example.com").await?;
        let state = test.into_app_state();

        let result = login(
            State(state),
            test.session.clone(),
            Json(login_form("sari@example.com", "wrong-password")),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid email or password");

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 with roles for a signed in user, 401 after logout
    async fn me_follows_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let state = test.into_app_state();
        sign_in(&test, user.id).await?;

        let result = me(State(state.clone()), HeaderMap::new(), test.session.clone()).await;
        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["id"], user.id);
        assert_eq!(body["data"]["roles"]["isPenyewa"], true);

        let result = logout(test.session.clone()).await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);

        let result = me(State(state), HeaderMap::new(), test.session.clone()).await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 from logout even without a user in session
    async fn logout_without_session_succeeds() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = logout(test.session.clone()).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 and a cleared session when the session user was deleted
    async fn clears_session_for_deleted_user() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let state = test.into_app_state();
        sign_in(&test, 999).await?;

        let result = me(State(state), HeaderMap::new(), test.session.clone()).await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let stored = test
            .session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?;
        assert!(stored.is_none());

        Ok(())
    }
}

mod mobile {
    use super::*;

    #[tokio::test]
    /// Expect a bearer token pair for a tenant
    async fn login_issues_tokens_for_tenant() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let state = test.into_app_state();

        let result = mobile_login(
            State(state),
            Json(login_form("penyewa@example.com", TEST_PASSWORD)),
        )
        .await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["token_type"], "bearer");
        assert_eq!(body["data"]["expires_in"], 3600);
        assert!(body["data"]["access_token"].is_string());
        assert!(body["data"]["refresh_token"].is_string());

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 when an owner signs in from the mobile app
    async fn login_rejects_owner() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let state = test.into_app_state();

        let result = mobile_login(
            State(state),
            Json(login_form("pemilik@example.com", TEST_PASSWORD)),
        )
        .await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 when an access token is presented as a refresh token
    async fn refresh_rejects_access_token() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let state = test.into_app_state();
        let pair = state
            .jwt
            .issue_pair(user.id, chrono::Utc::now())
            .unwrap();

        let result = mobile_refresh(
            State(state.clone()),
            Json(RefreshDto {
                refresh_token: pair.access_token,
            }),
        )
        .await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let result = mobile_refresh(
            State(state),
            Json(RefreshDto {
                refresh_token: pair.refresh_token,
            }),
        )
        .await;
        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["id"], user.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect a bearer token to authenticate without a session
    async fn bearer_token_authenticates() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let user = test
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let state = test.into_app_state();
        let headers = bearer_headers(&state, user.id);

        let result = me(State(state), headers, test.session.clone()).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["id"], user.id);

        Ok(())
    }
}
