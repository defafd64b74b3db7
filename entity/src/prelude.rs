pub use super::fivem_player::Entity as FivemPlayer;
