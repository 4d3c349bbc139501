use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::InternalServerError, service::sync::SyncKind},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SyncError {
    /// Another pass of the same kind holds the single-flight lock.
    #[error("{0} synchronisation is already running")]
    AlreadyRunning(SyncKind),
    /// A space station names a star system that isn't stored, its batch is rolled back.
    #[error("Space station `{space_station}` references unknown star system `{star_system}`")]
    StarSystemNotFound {
        space_station: String,
        star_system: String,
    },
    /// The pass completed but some per-system steps were rolled back.
    #[error("{kind} synchronisation finished with {failures} failed step(s)")]
    Incomplete { kind: SyncKind, failures: usize },
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyRunning(_) => {
                tracing::info!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Incomplete { .. } => {
                tracing::warn!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::StarSystemNotFound { .. } => InternalServerError(self).into_response(),
        }
    }
}
