//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::fivem_player::create_player(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::fivem_player::FivemPlayerFactory::new(&db)
//!     .license("license:abc123")
//!     .cash(250)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `fivem_player` - Create mirrored player entities in the destination store
//! - `helpers` - Shared ID generation

pub mod fivem_player;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use fivem_player::create_player;
