//! Database repository layer for the destination store.
//!
//! This module contains repository structs that handle database operations for mirrored
//! players. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.

pub mod player;

#[cfg(test)]
mod test;
