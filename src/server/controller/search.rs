use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedResponse},
        kos::{KosDto, MobileSearchQuery},
    },
    server::{
        controller::util::get_user::get_user, error::Error, model::app::AppState,
        service::search::SearchService,
    },
};

pub static MOBILE_KOS_TAG: &str = "mobile kos";

/// Page through active listings from the mobile app
///
/// `limit` is clamped to 1..=100 and defaults to 10. An `offset` takes precedence over
/// `page`.
#[utoipa::path(
    get,
    path = "/api/mobile/kos",
    tag = MOBILE_KOS_TAG,
    params(MobileSearchQuery),
    responses(
        (status = 200, description = "One page of active listings", body = PaginatedResponse<KosDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_mobile_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Query(query): Query<MobileSearchQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user(&state, &headers, &session).await?;

    let (data, pagination) = SearchService::new(&state.db).mobile_search(&query).await?;

    Ok(Json(PaginatedResponse {
        success: true,
        data,
        pagination,
    }))
}

/// Get a listing from the mobile app, counting the view
#[utoipa::path(
    get,
    path = "/api/mobile/kos/{id}",
    tag = MOBILE_KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Listing", body = ApiResponse<KosDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_mobile_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Path(kos_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user(&state, &headers, &session).await?;

    let kos = SearchService::new(&state.db).mobile_detail(kos_id).await?;

    Ok(Json(ApiResponse::ok(kos)))
}
