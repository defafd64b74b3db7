use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SyncStatsDto {
    pub total_fivem_players: u64,
    pub synced_players: u64,
    pub skipped_players: u64,
    pub duplicate_players: u64,
    /// Number of failed batches
    pub errors: usize,
    pub sync_completed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SyncResultDto {
    pub success: bool,
    pub stats: SyncStatsDto,
    pub errors: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SyncStatusDto {
    pub total_players: u64,
    pub last_synced_at: Option<DateTime<Utc>>,
}
