//! Cron jobs for recurring background work.

pub mod player_sync;
