use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, sync::SyncResponseDto},
    server::{
        error::{sync::SyncError, Error},
        model::app::AppState,
        service::sync::{SyncKind, SyncService},
    },
};

pub static SYNC_TAG: &str = "sync";

/// Synchronise commodities from UEX
///
/// Runs a commodity pass to completion before answering.
#[utoipa::path(
    post,
    path = "/api/pulsepoint/updateCommodities",
    tag = SYNC_TAG,
    security(("admin_token" = [])),
    responses(
        (status = 200, description = "Synchronisation ran", body = SyncResponseDto),
        (status = 401, description = "Missing admin token", body = ErrorDto),
        (status = 403, description = "Invalid admin token", body = ErrorDto),
        (status = 409, description = "Commodity synchronisation already running", body = ErrorDto),
        (status = 502, description = "UEX request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_commodities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    trigger_sync(&state, SyncKind::Commodities).await
}

/// Synchronise star systems, planets, moons and space stations from UEX
///
/// Runs a star system pass to completion before answering.
#[utoipa::path(
    post,
    path = "/api/pulsepoint/updateStarSystems",
    tag = SYNC_TAG,
    security(("admin_token" = [])),
    responses(
        (status = 200, description = "Synchronisation ran", body = SyncResponseDto),
        (status = 401, description = "Missing admin token", body = ErrorDto),
        (status = 403, description = "Invalid admin token", body = ErrorDto),
        (status = 409, description = "Star system sync already running", body = ErrorDto),
        (status = 502, description = "UEX request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_star_systems(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    trigger_sync(&state, SyncKind::StarSystems).await
}

/// Runs a pass and answers according to `report_sync_failures`
///
/// With reporting disabled every outcome except a concurrent trigger answers
/// `{"success": true}`, failures only show up in the logs.
async fn trigger_sync(state: &AppState, kind: SyncKind) -> Result<Json<SyncResponseDto>, Error> {
    let result = SyncService::new(&state.db, &state.uex_client, &state.sync_locks)
        .with_max_attempts(state.settings.uex_max_attempts)
        .run(kind)
        .await;

    let report_failures = state.settings.report_sync_failures;

    match result {
        Err(Error::SyncError(e @ SyncError::AlreadyRunning(_))) => Err(e.into()),
        Err(e) if report_failures => Err(e),
        Ok(report) if report_failures && !report.is_clean() => Err(SyncError::Incomplete {
            kind,
            failures: report.failures.len(),
        }
        .into()),
        Ok(report) if report_failures => Ok(Json(SyncResponseDto {
            success: true,
            report: Some(report.into()),
        })),
        _ => Ok(Json(SyncResponseDto {
            success: true,
            report: None,
        })),
    }
}
