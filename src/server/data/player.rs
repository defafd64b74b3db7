//! Player data repository for the destination store.
//!
//! This module provides the `PlayerStore` seam the sync service writes through and the
//! `PlayerRepository` implementation backed by the application database. Records are
//! keyed by license: writing a record whose license already exists replaces the stored
//! row instead of adding a second one.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::store::StoreError,
    model::{
        player::{NormalizedPlayerRecord, PlayerStoreStatus},
        sync::UpsertOutcome,
    },
};

/// Destination for normalized player records.
///
/// Implementations must make `upsert` idempotent on `license`: repeating a call with the
/// same records leaves exactly one row per license.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Inserts or replaces a batch of records keyed by license.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Number of records accepted and rejected
    /// - `Err(StoreError::Upsert)` - The store rejected the whole batch
    async fn upsert(&self, records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError>;

    /// Looks up a single mirrored player by license.
    async fn get_by_license(
        &self,
        license: &str,
    ) -> Result<Option<NormalizedPlayerRecord>, StoreError>;

    /// Total number of mirrored players and the most recent sync timestamp.
    async fn status(&self) -> Result<PlayerStoreStatus, StoreError>;
}

/// Repository providing database operations for mirrored players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerStore for PlayerRepository<'_> {
    /// Inserts or replaces a batch of records in a single statement.
    ///
    /// Every column except the surrogate id is overwritten on conflict, so the stored row
    /// always reflects the latest sync. An empty batch is a no-op.
    async fn upsert(&self, records: &[NormalizedPlayerRecord]) -> Result<UpsertOutcome, StoreError> {
        if records.is_empty() {
            return Ok(UpsertOutcome::default());
        }

        let models = records.iter().cloned().map(into_active_model);

        entity::prelude::FivemPlayer::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::fivem_player::Column::License)
                    .update_columns([
                        entity::fivem_player::Column::CitizenId,
                        entity::fivem_player::Column::Name,
                        entity::fivem_player::Column::FirstName,
                        entity::fivem_player::Column::LastName,
                        entity::fivem_player::Column::Cash,
                        entity::fivem_player::Column::Bank,
                        entity::fivem_player::Column::JobName,
                        entity::fivem_player::Column::JobGrade,
                        entity::fivem_player::Column::JobGradeName,
                        entity::fivem_player::Column::JobLabel,
                        entity::fivem_player::Column::JobPayment,
                        entity::fivem_player::Column::Money,
                        entity::fivem_player::Column::Charinfo,
                        entity::fivem_player::Column::Job,
                        entity::fivem_player::Column::LastSyncedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
            .map_err(|source| StoreError::Upsert {
                records: records.len(),
                source,
            })?;

        Ok(UpsertOutcome {
            succeeded: records.len() as u64,
            failed: 0,
        })
    }

    async fn get_by_license(
        &self,
        license: &str,
    ) -> Result<Option<NormalizedPlayerRecord>, StoreError> {
        let entity = entity::prelude::FivemPlayer::find()
            .filter(entity::fivem_player::Column::License.eq(license))
            .one(self.db)
            .await
            .map_err(StoreError::Lookup)?;

        Ok(entity.map(NormalizedPlayerRecord::from_entity))
    }

    async fn status(&self) -> Result<PlayerStoreStatus, StoreError> {
        let total_players = entity::prelude::FivemPlayer::find()
            .count(self.db)
            .await
            .map_err(StoreError::Lookup)?;

        let latest = entity::prelude::FivemPlayer::find()
            .order_by_desc(entity::fivem_player::Column::LastSyncedAt)
            .one(self.db)
            .await
            .map_err(StoreError::Lookup)?;

        Ok(PlayerStoreStatus {
            total_players,
            last_synced_at: latest.map(|player| player.last_synced_at),
        })
    }
}

fn into_active_model(record: NormalizedPlayerRecord) -> entity::fivem_player::ActiveModel {
    entity::fivem_player::ActiveModel {
        id: ActiveValue::NotSet,
        license: ActiveValue::Set(record.license),
        citizen_id: ActiveValue::Set(record.citizen_id),
        name: ActiveValue::Set(record.name),
        first_name: ActiveValue::Set(record.first_name),
        last_name: ActiveValue::Set(record.last_name),
        cash: ActiveValue::Set(record.cash),
        bank: ActiveValue::Set(record.bank),
        job_name: ActiveValue::Set(record.job_name),
        job_grade: ActiveValue::Set(record.job_grade),
        job_grade_name: ActiveValue::Set(record.job_grade_name),
        job_label: ActiveValue::Set(record.job_label),
        job_payment: ActiveValue::Set(record.job_payment),
        money: ActiveValue::Set(record.money),
        charinfo: ActiveValue::Set(record.charinfo),
        job: ActiveValue::Set(record.job),
        last_synced_at: ActiveValue::Set(record.last_synced_at),
    }
}
