//! Error types for the PulsePoint server.
//!
//! Domain errors (configuration, admin authentication, synchronisation) live in their own
//! modules and are aggregated into [`Error`] together with the library errors the server
//! propagates. Every error implements `IntoResponse` so handlers can return `Result<_, Error>`.

pub mod auth;
pub mod config;
pub mod retry;
pub mod sync;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, sync::SyncError},
};

/// Main error type for the PulsePoint server.
///
/// Uses `thiserror`'s `#[from]` so underlying errors convert with `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (admin bearer token)
/// - Synchronisation errors (concurrent trigger, incomplete pass)
/// - External library errors (UEX client, database, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin authentication error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Synchronisation error.
    #[error(transparent)]
    SyncError(#[from] SyncError),
    /// Requested record does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// Internal error indicating a bug in PulsePoint's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// UEX client error (configuration, request, upstream status or body).
    #[error(transparent)]
    UexError(#[from] uex::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized / 403 Forbidden - Missing or wrong admin token
/// - 404 Not Found - Requested record does not exist
/// - 409 Conflict - Synchronisation of the same kind already running
/// - 502 Bad Gateway - UEX answered with an error status or an undecodable body
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SyncError(err) => err.into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id, "Requested record not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            Self::UexError(err) if err.is_upstream() => {
                tracing::error!("{}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Trade API request failed".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
