use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        user::{LoginDto, MeDto, RefreshDto, RegisterDto, TokenDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user,
        error::{validation::ValidationError, Error},
        model::{app::AppState, role::RoleName, session::user::SessionUserId},
        service::{auth::AuthService, role::RoleService},
    },
};

pub static AUTH_TAG: &str = "auth";
pub static MOBILE_AUTH_TAG: &str = "mobile auth";

/// Role requested at web registration, limited to tenant and owner accounts
fn web_registration_role(role: Option<&str>) -> Result<RoleName, ValidationError> {
    let Some(role) = role.map(str::trim).filter(|role| !role.is_empty()) else {
        return Ok(RoleName::Penyewa);
    };

    match RoleName::parse(&role.to_lowercase()) {
        Some(role @ (RoleName::Penyewa | RoleName::Pemilik)) => Ok(role),
        _ => Err(ValidationError::Invalid(
            "Role must be either penyewa or pemilik".to_string(),
        )),
    }
}

/// Register a web account
///
/// Creates a tenant (`penyewa`) or owner (`pemilik`) account. Registration does not sign the
/// user in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid registration form", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let role = web_registration_role(form.role.as_deref())?;

    let user = AuthService::new(&state.db).register(&form, role).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserDto::from(user)).with_message("Registration successful")),
    ))
}

/// Sign in to the web application
///
/// Verifies the credentials and stores the user ID in the session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<MeDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&form.email, &form.password)
        .await?;

    // Rotate the session ID on privilege change
    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    let roles = RoleService::new(&state.db).get_roles(user.id).await?;

    tracing::debug!("User ID {} signed in", user.id);

    Ok(Json(ApiResponse::ok(MeDto {
        user: UserDto::from(user),
        roles,
    })))
}

/// Sign out of the web application
///
/// Clears the session. Succeeds even when nobody is signed in.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Only clear sessions that carry a user, an empty session has nothing to flush
    if let Some(user_id) = SessionUserId::remove(&session).await? {
        session.clear().await;

        tracing::debug!("User ID {} signed out", user_id);
    }

    Ok(Json(MessageDto::new("Logged out")))
}

/// Get the signed in user with their roles
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ApiResponse<MeDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;
    let roles = RoleService::new(&state.db).get_roles(user.id).await?;

    Ok(Json(ApiResponse::ok(MeDto {
        user: UserDto::from(user),
        roles,
    })))
}

/// Register a tenant account from the mobile app
#[utoipa::path(
    post,
    path = "/api/mobile/auth/register",
    tag = MOBILE_AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Tenant account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid registration form", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mobile_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .register(&form, RoleName::Penyewa)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserDto::from(user)).with_message("Registration successful")),
    ))
}

/// Sign in from the mobile app
///
/// Only tenant accounts may sign in. Returns an access and refresh token pair.
#[utoipa::path(
    post,
    path = "/api/mobile/auth/login",
    tag = MOBILE_AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token pair issued", body = ApiResponse<TokenDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account is not a tenant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mobile_login(
    State(state): State<AppState>,
    Json(form): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let tokens = AuthService::new(&state.db)
        .mobile_login(&state.jwt, &form.email, &form.password)
        .await?;

    Ok(Json(ApiResponse::ok(tokens)))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/api/mobile/auth/refresh",
    tag = MOBILE_AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Token pair issued", body = ApiResponse<TokenDto>),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mobile_refresh(
    State(state): State<AppState>,
    Json(form): Json<RefreshDto>,
) -> Result<impl IntoResponse, Error> {
    let tokens = AuthService::new(&state.db)
        .refresh(&state.jwt, &form.refresh_token)
        .await?;

    Ok(Json(ApiResponse::ok(tokens)))
}
