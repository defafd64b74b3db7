pub mod analysis;
pub mod api;
pub mod player;
pub mod sync;
