use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        favorite::{LikeStatusDto, LikeTarget, LikeToggleDto},
        kos::KosDto,
    },
    server::{
        controller::util::get_user::get_user,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

fn target_kos_id(target: &LikeTarget) -> Result<i32, ValidationError> {
    target.kos_id.ok_or(ValidationError::Missing("Kos ID"))
}

/// Like a listing, or remove the like when the user already liked it
#[utoipa::path(
    post,
    path = "/api/likes",
    tag = FAVORITE_TAG,
    request_body = LikeTarget,
    responses(
        (status = 200, description = "Like toggled", body = LikeToggleDto),
        (status = 400, description = "Kos ID is missing", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(target): Json<LikeTarget>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;
    let kos_id = target_kos_id(&target)?;

    let liked = FavoriteService::new(&state.db)
        .toggle_like(user.id, kos_id)
        .await?;

    let message = if liked {
        "Kos added to favorites"
    } else {
        "Kos removed from favorites"
    };

    Ok(Json(LikeToggleDto {
        success: true,
        liked,
        message: message.to_string(),
    }))
}

/// Whether the current user liked a listing
#[utoipa::path(
    get,
    path = "/api/likes/status",
    tag = FAVORITE_TAG,
    params(LikeTarget),
    responses(
        (status = 200, description = "Like status", body = LikeStatusDto),
        (status = 400, description = "Kos ID is missing", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Query(target): Query<LikeTarget>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;
    let kos_id = target_kos_id(&target)?;

    let liked = FavoriteService::new(&state.db)
        .like_status(user.id, kos_id)
        .await?;

    Ok(Json(LikeStatusDto {
        success: true,
        liked,
        kos_id,
    }))
}

/// List the current user's liked listings, most recently liked first
#[utoipa::path(
    get,
    path = "/api/likes",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Liked listings", body = ApiResponse<Vec<KosDto>>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let kos = FavoriteService::new(&state.db).list_favorites(user.id).await?;

    Ok(Json(ApiResponse::ok(kos)))
}
