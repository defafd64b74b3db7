use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        admin::{
            __path_analyze_schema, __path_get_sync_status, __path_run_sync, analyze_schema,
            get_sync_status, run_sync,
        },
        player::{__path_get_player, get_player},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(title = "Player Sync"))]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(analyze_schema))
        .routes(routes!(run_sync))
        .routes(routes!(get_sync_status))
        .routes(routes!(get_player))
        .split_for_parts();

    router.route("/api/openapi.json", get(move || async move { Json(api) }))
}
