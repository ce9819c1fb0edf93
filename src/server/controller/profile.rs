use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        profile::{ProfileDto, ProfileForm},
    },
    server::{
        controller::util::get_user::get_user, error::Error, model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get the current tenant's profile
#[utoipa::path(
    get,
    path = "/api/mobile/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Tenant profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Profile not created", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let profile = ProfileService::new(&state.db).get_profile(user.id).await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// Create or replace the current tenant's profile
#[utoipa::path(
    post,
    path = "/api/mobile/profile",
    tag = PROFILE_TAG,
    request_body = ProfileForm,
    responses(
        (status = 201, description = "Profile stored", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Invalid profile form", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<ProfileForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let profile = ProfileService::new(&state.db)
        .upsert_profile(user.id, &form)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(profile).with_message("Profile saved")),
    ))
}
