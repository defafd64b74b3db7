//! Player sync from the game server into the destination store.
//!
//! A run is a full rescan of the player table: every row is read, normalized and upserted
//! in fixed-size batches keyed by license. Batch failures are collected and never abort
//! the run, so re-running after a partial failure converges on the same store contents.

pub mod guard;
pub mod normalize;

use std::{collections::HashMap, time::Duration};

use chrono::Utc;
use sea_orm::sea_query::{Alias, Asterisk, Query};

use crate::server::{
    config::SyncConfig,
    data::player::{PlayerRepository, PlayerStore},
    error::{source::SourceError, store::StoreError, AppError},
    model::{
        player::{InvalidRow, NormalizedPlayerRecord, RawPlayerRow},
        sync::{SyncPhase, SyncRunResult, UpsertOutcome},
    },
    source::{SourceConnection, SourceConnector},
    state::AppState,
};

pub struct PlayerSyncService<'a> {
    connector: &'a SourceConnector,
    store: &'a dyn PlayerStore,
    config: &'a SyncConfig,
    store_timeout: Duration,
}

impl<'a> PlayerSyncService<'a> {
    pub fn new(
        connector: &'a SourceConnector,
        store: &'a dyn PlayerStore,
        config: &'a SyncConfig,
        store_timeout: Duration,
    ) -> Self {
        Self {
            connector,
            store,
            config,
            store_timeout,
        }
    }

    /// Runs one full sync of the player table.
    ///
    /// Only a failed connection is returned as an error. A failed table scan produces a
    /// result with `success: false`; failed batches are listed in the result's errors
    /// while the remaining batches still run. The game server connection is closed on
    /// every path once it has been opened.
    ///
    /// # Returns
    /// - `Ok(SyncRunResult)` - Run completed, possibly with scan or batch errors
    /// - `Err(AppError::SourceErr)` - The game server database could not be reached
    pub async fn run_sync(&self) -> Result<SyncRunResult, AppError> {
        log_phase(SyncPhase::Connecting);
        let conn = self.connector.connect().await?;

        log_phase(SyncPhase::Scanning);
        let rows = match self.scan(&conn).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Player sync aborted, table scan failed: {}", e);
                log_phase(SyncPhase::Closing);
                conn.close().await;
                return Ok(SyncRunResult::scan_failed(e.to_string()));
            }
        };

        log_phase(SyncPhase::BatchProcessing);
        let result = self.process(rows).await;

        log_phase(SyncPhase::Closing);
        conn.close().await;

        tracing::info!(
            "Player sync finished: {} rows read, {} synced, {} skipped, {} duplicates, {} batch errors",
            result.total_rows,
            result.synced_players,
            result.skipped_players,
            result.duplicate_players,
            result.error_count()
        );

        Ok(result)
    }

    async fn scan(&self, conn: &SourceConnection) -> Result<Vec<RawPlayerRow>, SourceError> {
        let query = Query::select()
            .column(Asterisk)
            .from(Alias::new(self.config.players_table.clone()))
            .to_owned();

        conn.query(
            conn.build(&query),
            &format!("scanning {}", self.config.players_table),
        )
        .await
    }

    /// Normalizes and upserts rows batch by batch.
    async fn process(&self, rows: Vec<RawPlayerRow>) -> SyncRunResult {
        let synced_at = Utc::now();
        let batch_size = self.config.batch_size.max(1);

        let mut result = SyncRunResult {
            success: true,
            total_rows: rows.len() as u64,
            synced_players: 0,
            skipped_players: 0,
            duplicate_players: 0,
            completed_at: synced_at,
            errors: Vec::new(),
        };

        let records = collect_records(rows, synced_at, &mut result);

        for (index, batch) in records.chunks(batch_size).enumerate() {
            let batch_number = index + 1;

            match self.upsert(batch).await {
                Ok(outcome) => {
                    result.synced_players += outcome.succeeded;
                    if outcome.failed > 0 {
                        result.errors.push(format!(
                            "Batch {}: {} records rejected",
                            batch_number, outcome.failed
                        ));
                    }
                }
                Err(e) => {
                    tracing::warn!("Player sync batch {} failed: {}", batch_number, e);
                    result.errors.push(format!("Batch {}: {}", batch_number, e));
                }
            }
        }

        result.completed_at = Utc::now();
        result
    }

    async fn upsert(&self, records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError> {
        tokio::time::timeout(self.store_timeout, self.store.upsert(records))
            .await
            .map_err(|_| StoreError::Timeout(self.store_timeout.as_secs()))?
    }
}

/// Runs a sync against the configured game server unless one is already running.
///
/// # Returns
/// - `Ok(SyncRunResult)` - Run completed
/// - `Err(AppError::Conflict)` - Another run holds the sync guard
/// - `Err(AppError::ConfigErr)` - Game server credentials are missing
/// - `Err(AppError::SourceErr)` - The game server database could not be reached
pub async fn run_exclusive(state: &AppState) -> Result<SyncRunResult, AppError> {
    let _permit = state.sync_guard.try_acquire()?;

    let connector = SourceConnector::from_config(&state.source)?;
    let store = PlayerRepository::new(&state.db);

    PlayerSyncService::new(&connector, &store, &state.sync, state.store_timeout)
        .run_sync()
        .await
}

/// Normalizes every row and keeps one record per license.
///
/// A license seen again replaces the earlier record in place, so the last row read wins
/// while batches keep the order in which licenses first appeared. A single upsert
/// statement never carries the same license twice.
fn collect_records(
    rows: Vec<RawPlayerRow>,
    synced_at: chrono::DateTime<Utc>,
    result: &mut SyncRunResult,
) -> Vec<NormalizedPlayerRecord> {
    let mut records: Vec<NormalizedPlayerRecord> = Vec::with_capacity(rows.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(rows.len());

    for row in rows {
        let record = match normalize_row(row, synced_at) {
            Ok(record) => record,
            Err(InvalidRow::MissingLicense) => {
                result.skipped_players += 1;
                continue;
            }
        };

        match positions.get(&record.license) {
            Some(&position) => {
                tracing::warn!(
                    "Player {} appears more than once, keeping the last row",
                    record.license
                );
                result.duplicate_players += 1;
                records[position] = record;
            }
            None => {
                positions.insert(record.license.clone(), records.len());
                records.push(record);
            }
        }
    }

    records
}

fn normalize_row(
    row: RawPlayerRow,
    synced_at: chrono::DateTime<Utc>,
) -> Result<NormalizedPlayerRecord, InvalidRow> {
    let normalized = normalize::normalize(row, synced_at).inspect_err(|_| {
        tracing::debug!("Skipping player row without license");
    })?;

    for (column, failure) in &normalized.fallbacks {
        tracing::warn!(
            "Player {}: {} column unusable ({}), using empty defaults",
            normalized.record.license,
            column.name(),
            failure
        );
    }

    Ok(normalized.record)
}

fn log_phase(phase: SyncPhase) {
    tracing::debug!("Player sync phase: {:?}", phase);
}

#[cfg(test)]
mod test;
