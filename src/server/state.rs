//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction and for each
//! scheduled job.
//!
//! The state includes:
//! - Database connection pool for the player store
//! - Game server credentials, validated whenever a connector is built
//! - Sync tuning and store timeout
//! - Guard ensuring a single sync run at a time

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, SourceConfig, SyncConfig},
    service::player_sync::guard::SyncGuard,
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SyncGuard` uses an `Arc` internally, so every clone guards the same runs
/// - configuration structs are small and cloned as needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the player store.
    pub db: DatabaseConnection,

    /// Game server database credentials and query timeout.
    ///
    /// Kept unvalidated so the server starts without them; analysis and sync report
    /// missing credentials per request.
    pub source: SourceConfig,

    /// Player table name and batch size for sync runs.
    pub sync: SyncConfig,

    /// Upper bound for a single player store upsert.
    pub store_timeout: Duration,

    /// Single-flight guard shared by the sync endpoint and the scheduler.
    pub sync_guard: SyncGuard,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            source: config.source.clone(),
            sync: config.sync.clone(),
            store_timeout: config.store_timeout,
            sync_guard: SyncGuard::new(),
        }
    }
}
