use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        payment::NotificationDto,
    },
    server::{error::Error, model::app::AppState, service::payment::PaymentService},
};

pub static WEBHOOK_TAG: &str = "webhook";

/// Midtrans payment notification
///
/// Verifies the notification signature and applies the reported status to the matching
/// transaction. Redelivered notifications leave the transaction in the same state.
#[utoipa::path(
    post,
    path = "/api/midtrans/webhook",
    tag = WEBHOOK_TAG,
    request_body = NotificationDto,
    responses(
        (status = 200, description = "Notification applied", body = MessageDto),
        (status = 403, description = "Invalid signature", body = ErrorDto),
        (status = 404, description = "No transaction for the order ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn midtrans_notification(
    State(state): State<AppState>,
    Json(notification): Json<NotificationDto>,
) -> Result<impl IntoResponse, Error> {
    let notification = payment_gateway::model::Notification::from(notification);

    PaymentService::new(&state.db, &state.payment_client)
        .handle_notification(&notification)
        .await?;

    Ok(Json(MessageDto::new("Notification processed")))
}
