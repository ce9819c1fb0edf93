use axum::http::{header::AUTHORIZATION, HeaderMap};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::TokenType, db::UserModel, role::RoleName, session::user::SessionUserId},
    service::{auth::AuthService, role::RoleService},
};

/// Bearer token from the `Authorization` header, if one is present
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}

/// Resolves the user making the request
///
/// A bearer access token takes precedence over the web session.
///
/// # Returns
/// - `Ok(UserModel)`: The authenticated user
/// - `Err(Error::AuthError(AuthError::Unauthenticated))`: Neither a token nor a session user
/// - `Err(Error::AuthError(AuthError::InvalidToken))`: Malformed, expired, or refresh token
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Credentials name a deleted user,
///   in which case the session is cleared
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user(
    state: &AppState,
    headers: &HeaderMap,
    session: &Session,
) -> Result<UserModel, Error> {
    let auth_service = AuthService::new(&state.db);

    if let Some(token) = bearer_token(headers) {
        let user_id = state.jwt.verify(token, TokenType::Access)?;

        return auth_service
            .get_user(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into());
    }

    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::Unauthenticated));
    };

    let Some(user) = auth_service.get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Resolves the user and requires them to hold one of `roles`
pub async fn get_user_with_role(
    state: &AppState,
    headers: &HeaderMap,
    session: &Session,
    roles: &[RoleName],
) -> Result<UserModel, Error> {
    let user = get_user(state, headers, session).await?;

    if !RoleService::new(&state.db).has_any_role(user.id, roles).await? {
        let required = roles.first().map(RoleName::as_str).unwrap_or("required");

        return Err(AuthError::MissingRole(required).into());
    }

    Ok(user)
}
