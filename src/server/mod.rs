//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: the connector to the game
//! server database, schema analysis, player sync, the player store, and the HTTP API in
//! front of them. The backend uses Axum as the web framework and SeaORM for both the
//! game server connection and the player store.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Schema analysis and player sync orchestration
//! - **Source Layer** (`source/`) - Game server database connection and catalog queries
//! - **Data Layer** (`data/`) - Player store operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models for analysis, player records and sync runs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, credentials, sync guard)
//! - **Startup** (`startup`) - Database connection, migrations and credential checks
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job running the periodic player sync
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** builds the connector or repository it needs from the state
//! 3. **Service** runs the analysis or sync over the game server connection
//! 4. **Data** writes or reads the player store and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod source;
pub mod startup;
pub mod state;
pub mod util;
