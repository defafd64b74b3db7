mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, scheduler::player_sync, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("player_sync=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::check_source_credentials(&config);

    let state = AppState::new(db, &config);

    tracing::info!("Starting server");

    // Start player sync scheduler
    let scheduler_state = state.clone();
    let scheduler_cron = config.sync_cron.clone();
    tokio::spawn(async move {
        if let Err(e) = player_sync::start_scheduler(scheduler_state, &scheduler_cron).await {
            tracing::error!("Player sync scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
