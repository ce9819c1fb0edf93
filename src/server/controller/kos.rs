use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        kos::{KosDto, KosForm, SearchQuery, SearchResultDto},
    },
    server::{
        controller::util::get_user::get_user,
        error::Error,
        model::app::AppState,
        service::{kos::KosService, search::SearchService},
    },
};

pub static KOS_TAG: &str = "kos";

/// Search active listings
///
/// Public. Returns matching listings and the distinct cities among the fetched listings for
/// the city filter. Prices that fail to parse are ignored.
#[utoipa::path(
    get,
    path = "/api/kos",
    tag = KOS_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching listings", body = ApiResponse<SearchResultDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_kos(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let result = SearchService::new(&state.db).search(&query).await?;

    Ok(Json(ApiResponse::ok(result)))
}

/// Create a listing
///
/// Requires the `pemilik` or `admin` role. The caller becomes the listing owner.
#[utoipa::path(
    post,
    path = "/api/kos",
    tag = KOS_TAG,
    request_body = KosForm,
    responses(
        (status = 201, description = "Listing created", body = ApiResponse<KosDto>),
        (status = 400, description = "Invalid listing form", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<KosForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let kos = KosService::new(&state.db, &state.storage)
        .create(user.id, &form)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(kos).with_message("Kos created")),
    ))
}

/// Get a listing with its images
#[utoipa::path(
    get,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Listing", body = ApiResponse<KosDto>),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_kos(
    State(state): State<AppState>,
    Path(kos_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let kos = KosService::new(&state.db, &state.storage).get(kos_id).await?;

    Ok(Json(ApiResponse::ok(kos)))
}

/// Update a listing
///
/// Only the listing owner or an admin may update it. The whole form is revalidated.
#[utoipa::path(
    put,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    request_body = KosForm,
    responses(
        (status = 200, description = "Listing updated", body = ApiResponse<KosDto>),
        (status = 400, description = "Invalid listing form", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Path(kos_id): Path<i32>,
    Json(form): Json<KosForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let kos = KosService::new(&state.db, &state.storage)
        .update(user.id, kos_id, &form)
        .await?;

    Ok(Json(ApiResponse::ok(kos).with_message("Kos updated")))
}

/// Delete a listing and its stored images
///
/// Listings with leases cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/kos/{id}",
    tag = KOS_TAG,
    params(("id" = i32, Path, description = "Kos ID")),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller does not own the listing", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 409, description = "Listing has leases", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Path(kos_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    KosService::new(&state.db, &state.storage)
        .delete(user.id, kos_id)
        .await?;

    Ok(Json(MessageDto::new("Kos deleted")))
}

/// List the current user's own listings, newest first
#[utoipa::path(
    get,
    path = "/api/owner/kos",
    tag = KOS_TAG,
    responses(
        (status = 200, description = "Listings owned by the caller", body = ApiResponse<Vec<KosDto>>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_owner_kos(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let kos = KosService::new(&state.db, &state.storage)
        .list_for_owner(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(kos)))
}
