//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from entity models or source rows at the repository and connector
//! boundaries and transformed to DTOs at the controller boundary.

pub mod analysis;
pub mod player;
pub mod sync;
