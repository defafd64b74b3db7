//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as input for the source fixture. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::player_row;
//!
//! // A well-formed QBCore row
//! let row = player_row::qbcore("license:abc123");
//!
//! // The same row with a corrupted money ledger
//! let broken = player_row::qbcore("license:abc123").money("{not json");
//! ```

pub mod player_row;

pub use player_row::{qbcore as qbcore_player_row, PlayerRowFixture};
