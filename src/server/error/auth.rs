use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No bearer token or session user present")]
    Unauthenticated,
    #[error("Bearer token is malformed, expired, or of the wrong type")]
    InvalidToken,
    #[error("User ID {0:?} not found in database despite presenting valid credentials")]
    UserNotInDatabase(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("User lacks the {0} role required for this action")]
    MissingRole(&'static str),
    #[error("Mobile login is only available to tenant accounts")]
    TenantOnly,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::InvalidToken => error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::EmailTaken(_) => error_response(StatusCode::CONFLICT, "Email is already registered"),
            Self::MissingRole(_) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
            Self::TenantOnly => error_response(
                StatusCode::FORBIDDEN,
                "Only tenant (penyewa) accounts can sign in to the mobile app",
            ),
        }
    }
}
