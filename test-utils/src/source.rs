//! File-backed SQLite stand-in for the game server database.
//!
//! The game server database is opened by its own connector in the code under test, so the
//! fixture lives in a temporary file rather than in memory. The fixture keeps a writable
//! connection for seeding while `url()` hands out a read-only URL for the connector.

use std::path::PathBuf;

use sea_orm::{
    sea_query::{Alias, Query, SqliteQueryBuilder},
    ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::{error::TestError, fixture::player_row::PlayerRowFixture};

/// QBCore-shaped `players` table.
pub const PLAYERS_TABLE_SQL: &str = "CREATE TABLE players (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     citizenid VARCHAR(50), \
     cid INTEGER, \
     license VARCHAR(255) NOT NULL, \
     name VARCHAR(255) NOT NULL, \
     money TEXT NOT NULL, \
     charinfo TEXT, \
     job TEXT NOT NULL, \
     gang TEXT, \
     position TEXT, \
     metadata TEXT, \
     inventory TEXT, \
     last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP)";

/// Temporary game server database.
///
/// Dropping the fixture deletes the backing file.
pub struct SourceFixture {
    _dir: TempDir,
    path: PathBuf,
    db: DatabaseConnection,
}

impl SourceFixture {
    /// Creates a game server database containing an empty QBCore `players` table.
    ///
    /// # Returns
    /// - `Ok(SourceFixture)` - Database created with the `players` table
    /// - `Err(TestError)` - Temporary file or table could not be created
    pub async fn new() -> Result<Self, TestError> {
        let fixture = Self::empty().await?;
        fixture.execute(PLAYERS_TABLE_SQL).await?;
        Ok(fixture)
    }

    /// Creates a game server database with no tables.
    pub async fn empty() -> Result<Self, TestError> {
        let dir = Self::scratch_dir()?;
        let path = dir.path().join("game.db");
        let db = Database::connect(format!("sqlite://{}?mode=rwc", path.display())).await?;

        Ok(Self {
            _dir: dir,
            path,
            db,
        })
    }

    /// Creates an empty temporary directory for tests that need a path of their own.
    pub fn scratch_dir() -> Result<TempDir, TestError> {
        Ok(tempfile::tempdir()?)
    }

    /// Read-only connection URL for the code under test.
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=ro", self.path.display())
    }

    /// Runs arbitrary SQL against the fixture, e.g. to add tables.
    pub async fn execute(&self, sql: &str) -> Result<(), TestError> {
        self.db.execute_unprepared(sql).await?;
        Ok(())
    }

    /// Inserts a player row into the `players` table.
    ///
    /// NOT NULL payload columns that the fixture leaves unset are written as empty text,
    /// mirroring rows created by game server scripts that skip a column.
    pub async fn insert_player(&self, row: &PlayerRowFixture) -> Result<(), TestError> {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let insert = Query::insert()
            .into_table(Alias::new("players"))
            .columns([
                Alias::new("citizenid"),
                Alias::new("license"),
                Alias::new("name"),
                Alias::new("money"),
                Alias::new("charinfo"),
                Alias::new("job"),
            ])
            .values_panic([
                row.citizenid.clone().into(),
                text(&row.license).into(),
                text(&row.name).into(),
                text(&row.money).into(),
                row.charinfo.clone().into(),
                text(&row.job).into(),
            ])
            .to_owned();

        self.execute(&insert.to_string(SqliteQueryBuilder)).await
    }

    /// Inserts several player rows.
    pub async fn insert_players(&self, rows: &[PlayerRowFixture]) -> Result<(), TestError> {
        for row in rows {
            self.insert_player(row).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::player_row;
    use sea_orm::{FromQueryResult, Statement};

    #[derive(FromQueryResult)]
    struct Count {
        count: i64,
    }

    #[tokio::test]
    async fn seeds_players_table() -> Result<(), TestError> {
        let fixture = SourceFixture::new().await?;
        fixture.insert_players(&player_row::qbcore_many(4)).await?;

        let reader = Database::connect(fixture.url()).await?;
        let count = Count::find_by_statement(Statement::from_string(
            sea_orm::DbBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM players",
        ))
        .one(&reader)
        .await?
        .map(|c| c.count);

        assert_eq!(count, Some(4));

        Ok(())
    }
}
