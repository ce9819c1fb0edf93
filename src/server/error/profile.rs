use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("User ID {0} has not created a tenant profile")]
    NotCreated(i32),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotCreated(_) => error_response(StatusCode::NOT_FOUND, "Profile not created"),
        }
    }
}
