use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, player::PlayerDto},
    server::{
        data::player::{PlayerRepository, PlayerStore},
        error::AppError,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get a mirrored player by license.
///
/// Reads from the player store only; the game server is never contacted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `license` - Player license, e.g. `license:abc123`
///
/// # Returns
/// - `200 OK` - Player record
/// - `404 Not Found` - No player with this license has been synced
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{license}",
    tag = PLAYER_TAG,
    params(
        ("license" = String, Path, description = "Player license")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(license): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerRepository::new(&state.db)
        .get_by_license(&license)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player {} not found", license)))?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}
