use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Kos ID {0} not found")]
    KosNotFound(i32),
    #[error("Monthly price for kos ID {0} is not positive")]
    InvalidPrice(i32),
    #[error("Failed to create invoices for sewa ID {sewa_id}, sewa was removed: {source}")]
    InvoiceGenerationFailed {
        sewa_id: i32,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        match self {
            Self::KosNotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Kos not found")
            }
            Self::InvalidPrice(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Monthly price must be greater than 0")
            }
            Self::InvoiceGenerationFailed { .. } => InternalServerError(self).into_response(),
        }
    }
}
