//! Error types for the kosku server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, validation, listings, rentals, payments, tenant
//! profiles). All errors implement `IntoResponse` for Axum HTTP responses, rendering the
//! `{ "success": false, "error": ... }` envelope, and use `thiserror` for their definitions.

pub mod auth;
pub mod config;
pub mod kos;
pub mod payment;
pub mod profile;
pub mod rental;
pub mod validation;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, kos::KosError, payment::PaymentError,
        profile::ProfileError, rental::RentalError, validation::ValidationError,
    },
};

/// Main error type for the kosku server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// error type. `#[from]` enables conversion from the underlying errors via `?`, and the
/// `IntoResponse` implementation maps each to the appropriate HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Rejected request input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Listing or listing image error.
    #[error(transparent)]
    KosError(#[from] KosError),
    /// Lease creation error.
    #[error(transparent)]
    RentalError(#[from] RentalError),
    /// Invoice payment or gateway notification error.
    #[error(transparent)]
    PaymentError(#[from] PaymentError),
    /// Tenant profile error.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug or inconsistent data.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Payment gateway client error.
    #[error(transparent)]
    PaymentGatewayError(#[from] payment_gateway::Error),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// Token signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Object storage or socket IO error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Malformed multipart upload.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping; everything else is treated as an internal
/// server error (500) and logged.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::KosError(err) => err.into_response(),
            Self::RentalError(err) => err.into_response(),
            Self::PaymentError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!(error = %err, "Rejected multipart upload");

                error_response(StatusCode::BAD_REQUEST, err.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the error envelope with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    use crate::server::error::{
        auth::AuthError, validation::ValidationError, Error,
    };

    #[tokio::test]
    async fn database_errors_are_hidden_behind_500() {
        let resp = Error::DbErr(sea_orm::DbErr::Custom("secret detail".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("\"success\":false"));
        assert!(!body.contains("secret detail"));
    }

    #[tokio::test]
    async fn validation_errors_are_400_with_message() {
        let resp = Error::from(ValidationError::Invalid("total rooms must be at least 1".to_string()))
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("total rooms must be at least 1"));
    }

    #[test]
    fn auth_errors_keep_their_status() {
        let resp = Error::from(AuthError::Unauthenticated).into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
