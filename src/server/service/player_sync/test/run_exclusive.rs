use crate::server::{
    config::SourceConfig, error::config::ConfigError, service::player_sync::run_exclusive,
    state::AppState,
};

use super::*;

fn state(db: sea_orm::DatabaseConnection, source: SourceConfig) -> AppState {
    AppState {
        db,
        source,
        sync: sync_config(50),
        store_timeout: STORE_TIMEOUT,
        sync_guard: Default::default(),
    }
}

fn blank_credentials() -> SourceConfig {
    SourceConfig {
        host: String::new(),
        port: 3306,
        user: String::new(),
        password: String::new(),
        database: String::new(),
        timeout: Duration::from_secs(5),
    }
}

/// Tests that a sync without game server credentials fails before connecting.
///
/// Expected: Err(AppError::ConfigErr(ConfigError::MissingSourceCredential)) and the guard released
#[tokio::test]
async fn rejects_missing_credentials() {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let state = state(test.db.clone().unwrap(), blank_credentials());

    let result = run_exclusive(&state).await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::MissingSourceCredential(_)))
    ));
    assert!(state.sync_guard.try_acquire().is_ok());
}

/// Tests that a sync is refused while another run holds the guard.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_concurrent_run() {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let state = state(test.db.clone().unwrap(), blank_credentials());

    let _running = state.sync_guard.try_acquire().unwrap();

    let result = run_exclusive(&state).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
