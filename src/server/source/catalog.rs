//! Catalog queries against the game server database.
//!
//! MySQL/MariaDB and PostgreSQL are read through `information_schema`, SQLite through
//! `sqlite_master` and `pragma_table_info`. Statements that name a user table are built
//! with `sea-query` so identifiers are quoted for the connected dialect.

use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, Query},
    DbBackend, FromQueryResult, JsonValue,
};

use super::SourceConnection;
use crate::server::{error::source::SourceError, model::analysis::ColumnDescriptor};

const MYSQL_TABLES: &str = "SELECT CAST(TABLE_SCHEMA AS CHAR) AS table_schema, \
     CAST(TABLE_NAME AS CHAR) AS table_name \
     FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_TYPE = 'BASE TABLE' \
     ORDER BY TABLE_NAME";

const POSTGRES_TABLES: &str = "SELECT table_schema::text AS table_schema, \
     table_name::text AS table_name \
     FROM information_schema.tables \
     WHERE table_schema = current_schema() AND table_type = 'BASE TABLE' \
     ORDER BY table_name";

const SQLITE_TABLES: &str = "SELECT 'main' AS table_schema, name AS table_name \
     FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
     ORDER BY name";

const MYSQL_COLUMNS: &str = "SELECT CAST(COLUMN_NAME AS CHAR) AS column_name, \
     CAST(COLUMN_TYPE AS CHAR) AS data_type, \
     CAST(IS_NULLABLE AS CHAR) AS is_nullable, \
     CAST(COLUMN_DEFAULT AS CHAR) AS column_default, \
     CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED) AS max_length \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

const POSTGRES_COLUMNS: &str = "SELECT column_name::text AS column_name, \
     data_type::text AS data_type, \
     is_nullable::text AS is_nullable, \
     column_default::text AS column_default, \
     character_maximum_length::bigint AS max_length \
     FROM information_schema.columns \
     WHERE table_schema = current_schema() AND table_name = $1 \
     ORDER BY ordinal_position";

const SQLITE_COLUMNS: &str = "SELECT name AS column_name, \
     type AS data_type, \
     CASE WHEN \"notnull\" = 0 THEN 'YES' ELSE 'NO' END AS is_nullable, \
     dflt_value AS column_default, \
     NULL AS max_length \
     FROM pragma_table_info(?) \
     ORDER BY cid";

/// A table listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CatalogTable {
    pub table_schema: String,
    pub table_name: String,
}

#[derive(Debug, FromQueryResult)]
struct CatalogColumn {
    column_name: String,
    data_type: String,
    is_nullable: String,
    column_default: Option<String>,
    max_length: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct RowCount {
    row_count: i64,
}

impl SourceConnection {
    /// Lists every base table in the connected schema, ordered by name.
    pub async fn list_tables(&self) -> Result<Vec<CatalogTable>, SourceError> {
        let sql = match self.backend() {
            DbBackend::Sqlite => SQLITE_TABLES,
            DbBackend::Postgres => POSTGRES_TABLES,
            _ => MYSQL_TABLES,
        };

        self.query(self.statement(sql, []), "listing tables").await
    }

    /// Reads declared column metadata for one table, in ordinal order.
    pub async fn describe_columns(
        &self,
        table: &str,
    ) -> Result<Vec<ColumnDescriptor>, SourceError> {
        let sql = match self.backend() {
            DbBackend::Sqlite => SQLITE_COLUMNS,
            DbBackend::Postgres => POSTGRES_COLUMNS,
            _ => MYSQL_COLUMNS,
        };

        let rows: Vec<CatalogColumn> = self
            .query(
                self.statement(sql, [table.into()]),
                &format!("describing columns of {}", table),
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ColumnDescriptor {
                max_length: row.max_length.or_else(|| declared_length(&row.data_type)),
                nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
                name: row.column_name,
                declared_type: row.data_type,
                default: row.column_default,
            })
            .collect())
    }

    /// Counts the rows currently stored in a table.
    pub async fn count_rows(&self, table: &str) -> Result<i64, SourceError> {
        let query = Query::select()
            .expr_as(Expr::cust("COUNT(*)"), Alias::new("row_count"))
            .from(Alias::new(table.to_string()))
            .to_owned();

        let rows: Vec<RowCount> = self
            .query(self.build(&query), &format!("counting rows of {}", table))
            .await?;

        Ok(rows.first().map(|row| row.row_count).unwrap_or(0))
    }

    /// Reads at most `limit` rows of a table as JSON objects.
    pub async fn sample_rows(
        &self,
        table: &str,
        limit: u64,
    ) -> Result<Vec<JsonValue>, SourceError> {
        let query = Query::select()
            .column(Asterisk)
            .from(Alias::new(table.to_string()))
            .limit(limit)
            .to_owned();

        self.query(self.build(&query), &format!("sampling rows of {}", table))
            .await
    }
}

/// Extracts the length from a sized type declaration such as `VARCHAR(50)`.
fn declared_length(declared_type: &str) -> Option<i64> {
    let open = declared_type.find('(')?;
    let close = declared_type[open..].find(')')? + open;
    declared_type[open + 1..close].trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::server::source::SourceConnector;
    use test_utils::source::SourceFixture;

    async fn connect(fixture: &SourceFixture) -> SourceConnection {
        SourceConnector::from_url(fixture.url(), Duration::from_secs(5))
            .connect()
            .await
            .unwrap()
    }

    #[test]
    fn parses_declared_lengths() {
        assert_eq!(declared_length("VARCHAR(50)"), Some(50));
        assert_eq!(declared_length("varchar( 255 )"), Some(255));
        assert_eq!(declared_length("decimal(10,2)"), None);
        assert_eq!(declared_length("TEXT"), None);
    }

    #[tokio::test]
    async fn lists_tables_in_name_order() -> Result<(), SourceError> {
        let fixture = SourceFixture::new().await.unwrap();
        fixture
            .execute("CREATE TABLE player_vehicles (id INTEGER PRIMARY KEY, license TEXT)")
            .await
            .unwrap();
        let conn = connect(&fixture).await;

        let tables = conn.list_tables().await?;
        conn.close().await;

        let names: Vec<_> = tables.iter().map(|t| t.table_name.as_str()).collect();
        assert_eq!(names, vec!["player_vehicles", "players"]);
        assert!(tables.iter().all(|t| t.table_schema == "main"));

        Ok(())
    }

    #[tokio::test]
    async fn describes_columns_with_nullability_and_length() -> Result<(), SourceError> {
        let fixture = SourceFixture::new().await.unwrap();
        fixture
            .execute(
                "CREATE TABLE bans (id INTEGER PRIMARY KEY, license VARCHAR(50) NOT NULL, \
                 reason TEXT DEFAULT 'none')",
            )
            .await
            .unwrap();
        let conn = connect(&fixture).await;

        let columns = conn.describe_columns("bans").await?;
        conn.close().await;

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].name, "license");
        assert_eq!(columns[1].declared_type, "VARCHAR(50)");
        assert!(!columns[1].nullable);
        assert_eq!(columns[1].max_length, Some(50));
        assert!(columns[2].nullable);
        assert_eq!(columns[2].default.as_deref(), Some("'none'"));

        Ok(())
    }

    #[tokio::test]
    async fn counts_and_samples_rows() -> Result<(), SourceError> {
        let fixture = SourceFixture::new().await.unwrap();
        for i in 0..5 {
            fixture
                .insert_player(&test_utils::fixture::player_row::qbcore(&format!(
                    "license:{}",
                    i
                )))
                .await
                .unwrap();
        }
        let conn = connect(&fixture).await;

        let count = conn.count_rows("players").await?;
        let sample = conn.sample_rows("players", 3).await?;
        conn.close().await;

        assert_eq!(count, 5);
        assert_eq!(sample.len(), 3);
        assert!(sample[0].get("license").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn counting_missing_table_is_a_query_error() {
        let fixture = SourceFixture::new().await.unwrap();
        let conn = connect(&fixture).await;

        let result = conn.count_rows("does_not_exist").await;
        conn.close().await;

        assert!(matches!(result, Err(SourceError::Query { .. })));
    }
}
