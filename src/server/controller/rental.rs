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
        rental::{CreateRentalDto, InvoiceDto, RentalCreatedDto},
    },
    server::{
        controller::util::get_user::get_user, error::Error, model::app::AppState,
        service::rental::RentalService,
    },
};

pub static RENTAL_TAG: &str = "rental";

/// Rent a listing
///
/// Creates the lease and one unpaid invoice for every billing month it spans.
///
/// # Responses
/// - 201 (Created): The lease with the invoice of its first month
/// - 400 (Bad Request): Missing or invalid dates, or no positive monthly price
/// - 404 (Not Found): The listing does not exist
/// - 500 (Internal Server Error): Invoices could not be generated, the lease was rolled back
#[utoipa::path(
    post,
    path = "/api/sewa",
    tag = RENTAL_TAG,
    request_body = CreateRentalDto,
    responses(
        (status = 201, description = "Lease created", body = ApiResponse<RentalCreatedDto>),
        (status = 400, description = "Invalid dates or price", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Kos not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rental(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<CreateRentalDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let rental = RentalService::new(&state.db)
        .create_rental(user.id, &form)
        .await?;

    let message = format!(
        "Lease created with {} invoice(s)",
        rental.total_invoices
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(rental).with_message(message)),
    ))
}

/// List the current user's invoices with their lease, newest first
#[utoipa::path(
    get,
    path = "/api/tagihan",
    tag = RENTAL_TAG,
    responses(
        (status = 200, description = "Invoices of the caller", body = ApiResponse<Vec<InvoiceDto>>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let invoices = RentalService::new(&state.db).list_invoices(user.id).await?;

    Ok(Json(ApiResponse::ok(invoices)))
}
