//! Domain models for player sync runs.

use chrono::{DateTime, Utc};

use crate::model::sync::{SyncResultDto, SyncStatsDto};

/// Phases of a sync run, logged as the run progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Connecting,
    Scanning,
    BatchProcessing,
    Closing,
}

/// Outcome of a store upsert call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub succeeded: u64,
    pub failed: u64,
}

/// Aggregated result of one sync run.
///
/// Batch failures do not abort the run; they are collected in `errors` and the
/// remaining batches still count towards `synced_players`.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncRunResult {
    /// Whether the player table was scanned and all batches were attempted.
    pub success: bool,
    /// Rows read from the game server.
    pub total_rows: u64,
    /// Records the store accepted.
    pub synced_players: u64,
    /// Rows dropped because they had no license.
    pub skipped_players: u64,
    /// Rows collapsed into a later row with the same license.
    pub duplicate_players: u64,
    pub completed_at: DateTime<Utc>,
    pub errors: Vec<String>,
}

impl SyncRunResult {
    /// Result for a run whose table scan failed after connecting.
    pub fn scan_failed(error: String) -> Self {
        Self {
            success: false,
            total_rows: 0,
            synced_players: 0,
            skipped_players: 0,
            duplicate_players: 0,
            completed_at: Utc::now(),
            errors: vec![error],
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_dto(self) -> SyncResultDto {
        SyncResultDto {
            success: self.success,
            stats: SyncStatsDto {
                total_fivem_players: self.total_rows,
                synced_players: self.synced_players,
                skipped_players: self.skipped_players,
                duplicate_players: self.duplicate_players,
                errors: self.errors.len(),
                sync_completed_at: self.completed_at,
            },
            errors: self.errors,
        }
    }
}
