//! Player factory for creating destination store entities.
//!
//! This module provides factory methods for creating mirrored player entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::fivem_player::FivemPlayerFactory;
///
/// let player = FivemPlayerFactory::new(&db)
///     .license("license:abc123")
///     .name("Tester")
///     .build()
///     .await?;
/// ```
pub struct FivemPlayerFactory<'a> {
    db: &'a DatabaseConnection,
    license: String,
    name: String,
    cash: i64,
    bank: i64,
    last_synced_at: DateTime<Utc>,
}

impl<'a> FivemPlayerFactory<'a> {
    /// Creates a new FivemPlayerFactory with default values.
    ///
    /// Defaults:
    /// - license: `"license:{id}"` where id is auto-incremented
    /// - name: `"Player {id}"`
    /// - cash: `0`, bank: `0`
    /// - last_synced_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            license: format!("license:{}", id),
            name: format!("Player {}", id),
            cash: 0,
            bank: 0,
            last_synced_at: Utc::now(),
        }
    }

    /// Sets the license natural key.
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the cash balance.
    pub fn cash(mut self, cash: i64) -> Self {
        self.cash = cash;
        self
    }

    /// Sets the bank balance.
    pub fn bank(mut self, bank: i64) -> Self {
        self.bank = bank;
        self
    }

    /// Sets the last sync timestamp.
    pub fn last_synced_at(mut self, last_synced_at: DateTime<Utc>) -> Self {
        self.last_synced_at = last_synced_at;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::fivem_player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::fivem_player::Model, DbErr> {
        entity::fivem_player::ActiveModel {
            license: ActiveValue::Set(self.license),
            citizen_id: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name),
            first_name: ActiveValue::Set(String::new()),
            last_name: ActiveValue::Set(String::new()),
            cash: ActiveValue::Set(self.cash),
            bank: ActiveValue::Set(self.bank),
            job_name: ActiveValue::Set("unemployed".to_string()),
            job_grade: ActiveValue::Set(0),
            job_grade_name: ActiveValue::Set(String::new()),
            job_label: ActiveValue::Set("Civilian".to_string()),
            job_payment: ActiveValue::Set(0),
            money: ActiveValue::Set(json!({ "cash": self.cash, "bank": self.bank })),
            charinfo: ActiveValue::Set(json!({})),
            job: ActiveValue::Set(json!({ "name": "unemployed" })),
            last_synced_at: ActiveValue::Set(self.last_synced_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `FivemPlayerFactory::new(db).build().await`.
pub async fn create_player(
    db: &DatabaseConnection,
) -> Result<entity::fivem_player::Model, DbErr> {
    FivemPlayerFactory::new(db).build().await
}
