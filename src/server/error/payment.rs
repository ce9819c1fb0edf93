use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Tagihan ID {0} not found")]
    InvoiceNotFound(i32),
    #[error("Tagihan ID {tagihan_id} does not belong to user ID {user_id}")]
    InvoiceNotOwned { tagihan_id: i32, user_id: i32 },
    #[error("Tagihan ID {0} is already paid")]
    InvoiceAlreadyPaid(i32),
    #[error("Failed to resolve the kos owner for tagihan ID {0}")]
    OwnerNotFound(i32),
    #[error("Notification signature mismatch for order {0:?}")]
    InvalidSignature(String),
    #[error("Transaction with invoice number {0:?} not found")]
    TransactionNotFound(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::OwnerNotFound(_) => return InternalServerError(self).into_response(),
            Self::InvalidSignature(_) => {
                tracing::warn!("{}", self);

                return error_response(StatusCode::FORBIDDEN, "Invalid signature");
            }
            Self::InvoiceNotFound(_) => (StatusCode::NOT_FOUND, "Tagihan not found"),
            Self::InvoiceNotOwned { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have access to this tagihan",
            ),
            Self::InvoiceAlreadyPaid(_) => (StatusCode::CONFLICT, "Tagihan is already paid"),
            Self::TransactionNotFound(_) => (StatusCode::NOT_FOUND, "Transaction not found"),
        };

        tracing::debug!("{}", self);

        error_response(status, message)
    }
}
