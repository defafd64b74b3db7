//! SeaORM entities for the destination store.

pub mod prelude;

pub mod fivem_player;
