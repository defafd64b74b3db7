//! Player Sync Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the player
//! sync service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, and a file-backed SQLite stand-in for the game server database.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring destination store test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **SourceFixture**: Temporary game server database seeded with player rows
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, source::SourceFixture, fixture::player_row};
//! use entity::prelude::FivemPlayer;
//!
//! #[tokio::test]
//! async fn test_sync() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(FivemPlayer)
//!         .build()
//!         .await?;
//!
//!     let source = SourceFixture::new().await?;
//!     source.insert_player(&player_row::qbcore("license:abc")).await?;
//!
//!     let db = test.db.unwrap();
//!     // Run a sync from source.url() into db...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod source;
