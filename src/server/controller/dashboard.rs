use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        dashboard::DashboardDto,
    },
    server::{
        controller::util::get_user::get_user, error::Error, model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Statistics for the current user's dashboard
///
/// The shape depends on the user's highest role: admin, then owner, then tenant.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let stats = DashboardService::new(&state.db).get_stats(user.id).await?;

    Ok(Json(ApiResponse::ok(stats)))
}
