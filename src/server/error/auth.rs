use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the admin bearer token check.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Request to an admin route is missing a bearer token")]
    MissingToken,
    #[error("Request to an admin route presented an invalid bearer token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: "Admin authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
