//! Domain models for game server player records.
//!
//! Defines the typed row read from the game server, the per-column decode outcome for
//! JSON payload columns, and the normalized record mirrored into the destination store.

use chrono::{DateTime, Utc};
use sea_orm::{DbErr, FromQueryResult, JsonValue, QueryResult};
use serde_json::Map;

use crate::model::{player::PlayerDto, sync::SyncStatusDto};

/// A player row as stored by the game server.
///
/// Every column is optional text because the game server does not enforce its own
/// schema. Decoded into this fixed shape directly from the query result; columns the
/// table does not have at all decode as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlayerRow {
    /// Rockstar license string, the natural key.
    pub license: Option<String>,
    /// QBCore character identifier, absent on other frameworks.
    pub citizenid: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// JSON-encoded money ledger, e.g. `{"cash":500,"bank":5000}`.
    pub money: Option<String>,
    /// JSON-encoded character info, e.g. `{"firstname":"John","lastname":"Doe"}`.
    pub charinfo: Option<String>,
    /// JSON-encoded job assignment, e.g. `{"name":"police","grade":{"level":2}}`.
    pub job: Option<String>,
}

impl FromQueryResult for RawPlayerRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        let columns = res.column_names();
        let text = |column: &str| -> Result<Option<String>, DbErr> {
            if columns.iter().any(|c| c == column) {
                res.try_get::<Option<String>>(pre, column)
            } else {
                Ok(None)
            }
        };

        Ok(Self {
            license: text("license")?,
            citizenid: text("citizenid")?,
            name: text("name")?,
            money: text("money")?,
            charinfo: text("charinfo")?,
            job: text("job")?,
        })
    }
}

#[cfg(test)]
impl From<test_utils::fixture::player_row::PlayerRowFixture> for RawPlayerRow {
    fn from(fixture: test_utils::fixture::player_row::PlayerRowFixture) -> Self {
        Self {
            license: fixture.license,
            citizenid: fixture.citizenid,
            name: fixture.name,
            money: fixture.money,
            charinfo: fixture.charinfo,
            job: fixture.job,
        }
    }
}

/// Why a JSON payload column fell back to an empty object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The column was NULL or blank.
    Missing,
    /// The column did not contain valid JSON.
    Malformed(String),
    /// The column held valid JSON that is not an object.
    NotAnObject,
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "column is empty"),
            Self::Malformed(reason) => write!(f, "invalid JSON: {}", reason),
            Self::NotAnObject => write!(f, "JSON is not an object"),
        }
    }
}

/// Outcome of decoding one JSON payload column.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The column decoded to a JSON object.
    Decoded(Map<String, JsonValue>),
    /// The column could not be used; callers see an empty object.
    Fallback(DecodeFailure),
}

impl Payload {
    /// Looks up a top-level field, `None` for fallbacks.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            Self::Decoded(object) => object.get(key),
            Self::Fallback(_) => None,
        }
    }

    /// The decode failure, if the payload fell back.
    pub fn failure(&self) -> Option<&DecodeFailure> {
        match self {
            Self::Decoded(_) => None,
            Self::Fallback(failure) => Some(failure),
        }
    }

    /// Converts into the JSON stored alongside the projected fields.
    pub fn into_value(self) -> JsonValue {
        match self {
            Self::Decoded(object) => JsonValue::Object(object),
            Self::Fallback(_) => JsonValue::Object(Map::new()),
        }
    }
}

/// The three JSON payload columns of a player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadColumn {
    Money,
    Charinfo,
    Job,
}

impl PayloadColumn {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Charinfo => "charinfo",
            Self::Job => "job",
        }
    }
}

/// Canonical player record mirrored into the destination store.
///
/// `license` is always non-empty. Money and job fields default to zero or empty when
/// their source payload was missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPlayerRecord {
    pub license: String,
    pub citizen_id: Option<String>,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub cash: i64,
    pub bank: i64,
    pub job_name: String,
    pub job_grade: i32,
    pub job_grade_name: String,
    pub job_label: String,
    pub job_payment: i64,
    /// Decoded money ledger, empty object on fallback.
    pub money: JsonValue,
    /// Decoded character info, empty object on fallback.
    pub charinfo: JsonValue,
    /// Decoded job assignment, empty object on fallback.
    pub job: JsonValue,
    pub last_synced_at: DateTime<Utc>,
}

impl NormalizedPlayerRecord {
    /// Converts an entity model to a player record at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `NormalizedPlayerRecord` - The converted domain model
    pub fn from_entity(entity: entity::fivem_player::Model) -> Self {
        Self {
            license: entity.license,
            citizen_id: entity.citizen_id,
            name: entity.name,
            first_name: entity.first_name,
            last_name: entity.last_name,
            cash: entity.cash,
            bank: entity.bank,
            job_name: entity.job_name,
            job_grade: entity.job_grade,
            job_grade_name: entity.job_grade_name,
            job_label: entity.job_label,
            job_payment: entity.job_payment,
            money: entity.money,
            charinfo: entity.charinfo,
            job: entity.job,
            last_synced_at: entity.last_synced_at,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            license: self.license,
            citizen_id: self.citizen_id,
            name: self.name,
            first_name: self.first_name,
            last_name: self.last_name,
            cash: self.cash,
            bank: self.bank,
            job_name: self.job_name,
            job_grade: self.job_grade,
            job_grade_name: self.job_grade_name,
            job_label: self.job_label,
            job_payment: self.job_payment,
            money: self.money,
            charinfo: self.charinfo,
            job: self.job,
            last_synced_at: self.last_synced_at,
        }
    }
}

/// Result of normalizing a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub record: NormalizedPlayerRecord,
    /// Payload columns that fell back to an empty object, with the reason.
    pub fallbacks: Vec<(PayloadColumn, DecodeFailure)>,
}

/// Why a row was excluded from the sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRow {
    /// The natural key is NULL or blank.
    MissingLicense,
}

/// Aggregate view of the destination store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStoreStatus {
    pub total_players: u64,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl PlayerStoreStatus {
    pub fn into_dto(self) -> SyncStatusDto {
        SyncStatusDto {
            total_players: self.total_players,
            last_synced_at: self.last_synced_at,
        }
    }
}
