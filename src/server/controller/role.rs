use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        user::{AssignRoleDto, RoleFlagsDto},
    },
    server::{
        controller::util::get_user::{get_user, get_user_with_role},
        error::Error,
        model::{app::AppState, role::RoleName},
        service::role::RoleService,
    },
};

pub static ROLE_TAG: &str = "role";

/// Get the current user's roles and role flags
#[utoipa::path(
    get,
    path = "/api/users/check-role",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "Roles of the current user", body = ApiResponse<RoleFlagsDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let roles = RoleService::new(&state.db).get_roles(user.id).await?;

    Ok(Json(ApiResponse::ok(roles)))
}

/// Assign a role to a user
///
/// Admin only. Assigning a role the user already holds is not an error.
///
/// # Responses
/// - 201 (Created): Role assigned
/// - 200 (OK): The user already held the role
/// - 400 (Bad Request): Unknown role name or user
/// - 403 (Forbidden): Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/admin/roles",
    tag = ROLE_TAG,
    request_body = AssignRoleDto,
    responses(
        (status = 201, description = "Role assigned", body = MessageDto),
        (status = 200, description = "Role already assigned", body = MessageDto),
        (status = 400, description = "Unknown role or user", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<AssignRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_user_with_role(&state, &headers, &session, &[RoleName::Admin]).await?;

    let assigned = RoleService::new(&state.db)
        .assign_role(form.user_id, &form.role)
        .await?;

    if !assigned {
        return Ok((StatusCode::OK, Json(MessageDto::new("Role already assigned"))));
    }

    tracing::info!(
        "Admin user ID {} assigned role {} to user ID {}",
        admin.id,
        form.role,
        form.user_id
    );

    Ok((StatusCode::CREATED, Json(MessageDto::new("Role assigned"))))
}
