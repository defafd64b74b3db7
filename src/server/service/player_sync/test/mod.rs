use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, fixture::player_row, source::SourceFixture};

use crate::server::{
    config::SyncConfig,
    data::player::{PlayerRepository, PlayerStore},
    error::{source::SourceError, store::StoreError, AppError},
    model::{
        player::{NormalizedPlayerRecord, PlayerStoreStatus},
        sync::UpsertOutcome,
    },
    service::player_sync::PlayerSyncService,
    source::SourceConnector,
};

mod run_exclusive;

const STORE_TIMEOUT: Duration = Duration::from_secs(5);

fn connector(fixture: &SourceFixture) -> SourceConnector {
    SourceConnector::from_url(fixture.url(), Duration::from_secs(5))
}

fn sync_config(batch_size: usize) -> SyncConfig {
    SyncConfig {
        batch_size,
        ..Default::default()
    }
}

/// Store that rejects one batch and accepts every other one.
struct FailingBatchStore {
    fail_on_call: usize,
    calls: AtomicUsize,
}

impl FailingBatchStore {
    fn new(fail_on_call: usize) -> Self {
        Self {
            fail_on_call,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PlayerStore for FailingBatchStore {
    async fn upsert(&self, records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if call == self.fail_on_call {
            return Err(StoreError::Upsert {
                records: records.len(),
                source: DbErr::Custom("connection reset".to_string()),
            });
        }

        Ok(UpsertOutcome {
            succeeded: records.len() as u64,
            failed: 0,
        })
    }

    async fn get_by_license(
        &self,
        _license: &str,
    ) -> Result<Option<NormalizedPlayerRecord>, StoreError> {
        Ok(None)
    }

    async fn status(&self) -> Result<PlayerStoreStatus, StoreError> {
        Ok(PlayerStoreStatus {
            total_players: 0,
            last_synced_at: None,
        })
    }
}

/// Store that never answers within the sync's store timeout.
struct StalledStore;

#[async_trait]
impl PlayerStore for StalledStore {
    async fn upsert(&self, _records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(UpsertOutcome::default())
    }

    async fn get_by_license(
        &self,
        _license: &str,
    ) -> Result<Option<NormalizedPlayerRecord>, StoreError> {
        Ok(None)
    }

    async fn status(&self) -> Result<PlayerStoreStatus, StoreError> {
        Ok(PlayerStoreStatus {
            total_players: 0,
            last_synced_at: None,
        })
    }
}

/// Store that accepts every batch and remembers the licenses it was sent.
#[derive(Default)]
struct RecordingStore {
    batches: AtomicUsize,
    licenses: tokio::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl PlayerStore for RecordingStore {
    async fn upsert(&self, records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.licenses
            .lock()
            .await
            .extend(records.iter().map(|record| record.license.clone()));

        Ok(UpsertOutcome {
            succeeded: records.len() as u64,
            failed: 0,
        })
    }

    async fn get_by_license(
        &self,
        _license: &str,
    ) -> Result<Option<NormalizedPlayerRecord>, StoreError> {
        Ok(None)
    }

    async fn status(&self) -> Result<PlayerStoreStatus, StoreError> {
        Ok(PlayerStoreStatus {
            total_players: 0,
            last_synced_at: None,
        })
    }
}
