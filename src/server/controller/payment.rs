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
        payment::{ConfirmPaymentDto, CreatePaymentDto, PaymentCreatedDto, TransactionDto},
    },
    server::{
        controller::util::get_user::get_user, error::Error, model::app::AppState,
        service::payment::PaymentService,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Start paying an invoice
///
/// Records a pending transaction and opens a Midtrans Snap session for it. When the gateway
/// is unreachable the transaction is still returned, with `midtrans` set to null.
#[utoipa::path(
    post,
    path = "/api/mobile/transactions",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Transaction created", body = ApiResponse<PaymentCreatedDto>),
        (status = 400, description = "Tagihan ID is missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Invoice belongs to another tenant", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 409, description = "Invoice is already paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let payment = PaymentService::new(&state.db, &state.payment_client)
        .create_invoice_payment(&user, &form)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(payment))))
}

/// Report the outcome of a Snap payment from the mobile app
///
/// Only a `success` status changes anything; any other status is acknowledged without change.
#[utoipa::path(
    patch,
    path = "/api/mobile/transactions",
    tag = PAYMENT_TAG,
    request_body = ConfirmPaymentDto,
    responses(
        (status = 200, description = "Payment confirmed, or acknowledged without change", body = ApiResponse<Option<TransactionDto>>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Json(form): Json<ConfirmPaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let transaction = PaymentService::new(&state.db, &state.payment_client)
        .confirm_payment(user.id, &form)
        .await?;

    let message = if transaction.is_some() {
        "Payment confirmed"
    } else {
        "Payment status noted, no change"
    };

    Ok(Json(ApiResponse::ok(transaction).with_message(message)))
}

/// List transactions visible to the current user
///
/// Admins see every transaction, owners those paid to them, tenants their own.
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Transactions, newest first", body = ApiResponse<Vec<TransactionDto>>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user(&state, &headers, &session).await?;

    let transactions = PaymentService::new(&state.db, &state.payment_client)
        .list_transactions(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(transactions)))
}
