use crate::server::{
    data::player::{PlayerRepository, PlayerStore},
    error::store::StoreError,
    model::player::{NormalizedPlayerRecord, RawPlayerRow},
    service::player_sync::normalize::normalize,
};
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, fixture::player_row};

mod get_by_license;
mod status;
mod upsert;

/// Normalized record for a complete QBCore row with the given license.
fn record(license: &str, synced_at: DateTime<Utc>) -> NormalizedPlayerRecord {
    normalize(RawPlayerRow::from(player_row::qbcore(license)), synced_at)
        .unwrap()
        .record
}
