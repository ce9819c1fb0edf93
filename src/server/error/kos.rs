use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum KosError {
    #[error("Kos ID {0} not found")]
    NotFound(i32),
    #[error("User ID {user_id} does not own kos ID {kos_id}")]
    NotOwner { user_id: i32, kos_id: i32 },
    #[error("Kos ID {0} has leases and cannot be deleted")]
    HasLeases(i32),
    #[error("Image ID {0} not found")]
    ImageNotFound(i32),
    #[error("Image type ID {0} does not exist")]
    UnknownImageType(i32),
    #[error("Unsupported image extension {0:?}")]
    UnsupportedImage(String),
}

impl IntoResponse for KosError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Kos not found"),
            Self::NotOwner { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this kos",
            ),
            Self::HasLeases(_) => error_response(
                StatusCode::CONFLICT,
                "Kos has active or past leases and cannot be deleted",
            ),
            Self::ImageNotFound(_) => error_response(StatusCode::NOT_FOUND, "Image not found"),
            Self::UnknownImageType(_) => {
                error_response(StatusCode::BAD_REQUEST, "Unknown image type")
            }
            Self::UnsupportedImage(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Image must be a jpg, jpeg, png or webp file",
            ),
        }
    }
}
