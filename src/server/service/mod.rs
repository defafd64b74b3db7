//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the source and data layers:
//!
//! - **Schema Analysis**: Classifying the game server's tables and framework
//! - **Player Sync**: Normalizing game server players and upserting them into the store

pub mod player_sync;
pub mod schema_analysis;
