use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{analysis::AnalysisReportDto, api::ErrorDto, sync::SyncResultDto, sync::SyncStatusDto},
    server::{
        data::player::{PlayerRepository, PlayerStore},
        error::AppError,
        service::{player_sync, schema_analysis::SchemaAnalysisService},
        source::SourceConnector,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Analyze the game server database schema.
///
/// Connects to the game server database, classifies every table and guesses which
/// framework produced the schema. Tables that cannot be inspected are reported with
/// their error instead of failing the request.
///
/// # Arguments
/// - `state` - Application state containing the game server credentials
///
/// # Returns
/// - `200 OK` - Analysis report
/// - `500 Internal Server Error` - Game server credentials missing or catalog unreadable
/// - `502 Bad Gateway` - Game server database unreachable
#[utoipa::path(
    get,
    path = "/api/admin/schema",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully analyzed game server schema", body = AnalysisReportDto),
        (status = 500, description = "Missing credentials or internal server error", body = ErrorDto),
        (status = 502, description = "Game server database unreachable", body = ErrorDto)
    ),
)]
pub async fn analyze_schema(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let connector = SourceConnector::from_config(&state.source)?;

    let report = SchemaAnalysisService::new(&connector).analyze().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Run a player sync.
///
/// Mirrors every player from the game server into the player store. Failed batches are
/// listed in the result and do not fail the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection and sync settings
///
/// # Returns
/// - `200 OK` - Sync result, possibly with batch errors
/// - `409 Conflict` - Another sync is already running
/// - `500 Internal Server Error` - Game server credentials missing
/// - `502 Bad Gateway` - Game server database unreachable
#[utoipa::path(
    post,
    path = "/api/admin/sync",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Sync completed", body = SyncResultDto),
        (status = 409, description = "A sync is already running", body = ErrorDto),
        (status = 500, description = "Missing credentials or internal server error", body = ErrorDto),
        (status = 502, description = "Game server database unreachable", body = ErrorDto)
    ),
)]
pub async fn run_sync(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let result = player_sync::run_exclusive(&state).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get the player store sync status.
///
/// # Returns
/// - `200 OK` - Number of mirrored players and the latest sync time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/sync/status",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved sync status", body = SyncStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sync_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = PlayerRepository::new(&state.db).status().await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
