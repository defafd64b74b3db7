//! Schema analysis of the game server database.
//!
//! Walks the catalog, classifies every table with the rule tables in [`rules`] and
//! samples small tables. Analysis is read-only and may be repeated freely.

pub mod rules;

use std::collections::BTreeMap;

use crate::server::{
    error::{source::SourceError, AppError},
    model::analysis::{AnalysisReport, ExternalTableDescriptor, TableAnalysis},
    source::{catalog::CatalogTable, SourceConnection, SourceConnector},
};

/// Tables with fewer rows than this are sampled.
pub const SAMPLE_ROW_THRESHOLD: i64 = 1000;

/// Maximum number of rows sampled from a small table.
pub const SAMPLE_ROW_LIMIT: u64 = 3;

pub struct SchemaAnalysisService<'a> {
    connector: &'a SourceConnector,
}

impl<'a> SchemaAnalysisService<'a> {
    pub fn new(connector: &'a SourceConnector) -> Self {
        Self { connector }
    }

    /// Analyzes every table of the game server database.
    ///
    /// A table that cannot be inspected is reported with its error and does not stop the
    /// remaining tables. The connection is closed before returning on every path.
    ///
    /// # Returns
    /// - `Ok(AnalysisReport)` - Framework guess, per-table analysis and summary
    /// - `Err(AppError::SourceErr)` - Connecting or listing tables failed
    pub async fn analyze(&self) -> Result<AnalysisReport, AppError> {
        let conn = self.connector.connect().await?;

        let result = match conn.list_tables().await {
            Ok(tables) => Ok(analyze_tables(&conn, tables).await),
            Err(e) => Err(e),
        };

        conn.close().await;

        let report = result?;

        tracing::info!(
            "Analyzed {} game server tables ({} player-related, framework {})",
            report.total_tables,
            report.player_related_tables.len(),
            report.framework.label()
        );

        Ok(report)
    }
}

/// Analyzes the given tables over an open connection and builds the report.
pub async fn analyze_tables(conn: &SourceConnection, tables: Vec<CatalogTable>) -> AnalysisReport {
    let mut analyses = BTreeMap::new();

    for table in tables {
        let analysis = match analyze_table(conn, &table).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Failed to analyze table {}: {}", table.table_name, e);
                TableAnalysis::failed(table.table_name.clone(), table.table_schema, e.to_string())
            }
        };

        analyses.insert(table.table_name, analysis);
    }

    let framework = rules::guess_framework(analyses.keys().map(String::as_str));
    let summary = rules::summarize(
        analyses
            .values()
            .map(|a| (a.table.name.as_str(), a.table.columns.as_slice())),
    );
    let player_related_tables = analyses
        .values()
        .filter(|a| a.is_player_related)
        .map(|a| a.table.name.clone())
        .collect();

    AnalysisReport {
        framework,
        total_tables: analyses.len(),
        player_related_tables,
        tables: analyses,
        summary,
    }
}

async fn analyze_table(
    conn: &SourceConnection,
    table: &CatalogTable,
) -> Result<TableAnalysis, SourceError> {
    let columns = conn.describe_columns(&table.table_name).await?;
    let row_count = conn.count_rows(&table.table_name).await?;

    let sample_rows = if row_count < SAMPLE_ROW_THRESHOLD {
        Some(
            conn.sample_rows(&table.table_name, SAMPLE_ROW_LIMIT)
                .await?,
        )
    } else {
        None
    };

    let matched_rule = rules::classify_table(&table.table_name, &columns);

    Ok(TableAnalysis {
        table: ExternalTableDescriptor {
            name: table.table_name.clone(),
            schema: table.table_schema.clone(),
            columns,
            row_count,
        },
        is_player_related: matched_rule.is_some(),
        matched_rule,
        sample_rows,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::server::model::analysis::FrameworkGuess;
    use test_utils::{fixture::player_row, source::SourceFixture};

    fn connector(fixture: &SourceFixture) -> SourceConnector {
        SourceConnector::from_url(fixture.url(), Duration::from_secs(5))
    }

    async fn qbcore_source() -> SourceFixture {
        let fixture = SourceFixture::new().await.unwrap();
        fixture
            .execute(
                "CREATE TABLE player_vehicles (id INTEGER PRIMARY KEY, license TEXT, \
                 citizenid TEXT, vehicle TEXT, plate TEXT)",
            )
            .await
            .unwrap();
        fixture
            .execute(
                "CREATE TABLE audit_log (id INTEGER PRIMARY KEY, message TEXT, created_at TEXT)",
            )
            .await
            .unwrap();
        fixture
            .insert_players(&player_row::qbcore_many(2))
            .await
            .unwrap();
        fixture
    }

    /// Tests a full analysis of a QBCore-shaped game server.
    ///
    /// Expected: QBCore guess, player tables classified, audit log excluded
    #[tokio::test]
    async fn analyzes_qbcore_schema() -> Result<(), AppError> {
        let fixture = qbcore_source().await;

        let report = SchemaAnalysisService::new(&connector(&fixture))
            .analyze()
            .await?;

        assert_eq!(report.framework, FrameworkGuess::QbCore);
        assert_eq!(report.total_tables, 3);
        assert_eq!(
            report.player_related_tables,
            vec!["player_vehicles".to_string(), "players".to_string()]
        );

        let audit = &report.tables["audit_log"];
        assert!(!audit.is_player_related);
        assert!(audit.matched_rule.is_none());
        assert!(audit.error.is_none());

        let players = &report.tables["players"];
        assert_eq!(players.table.row_count, 2);
        assert_eq!(players.sample_rows.as_ref().map(Vec::len), Some(2));
        assert!(players.table.columns.iter().any(|c| c.name == "license"));

        assert!(report.summary.has_users);
        assert!(report.summary.has_vehicles);
        assert!(report
            .summary
            .identifier_columns
            .iter()
            .any(|c| c.table == "player_vehicles" && c.column == "license"));

        Ok(())
    }

    /// Tests that large tables are counted but not sampled.
    ///
    /// Expected: row count reported, no sample rows
    #[tokio::test]
    async fn skips_sampling_large_tables() -> Result<(), AppError> {
        let fixture = SourceFixture::empty().await.unwrap();
        fixture
            .execute("CREATE TABLE bans (id INTEGER PRIMARY KEY, license TEXT)")
            .await
            .unwrap();
        fixture
            .execute(
                "INSERT INTO bans (license) \
                 WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 1000) \
                 SELECT 'license:' || n FROM seq",
            )
            .await
            .unwrap();

        let report = SchemaAnalysisService::new(&connector(&fixture))
            .analyze()
            .await?;

        let bans = &report.tables["bans"];
        assert_eq!(bans.table.row_count, 1000);
        assert!(bans.sample_rows.is_none());
        assert!(bans.is_player_related);

        Ok(())
    }

    /// Tests that a failing table degrades to an error entry without stopping the others.
    ///
    /// Expected: failing table has an error, zero rows and is not player-related
    #[tokio::test]
    async fn isolates_table_failures() {
        let fixture = qbcore_source().await;
        let conn = connector(&fixture).connect().await.unwrap();

        let mut tables = conn.list_tables().await.unwrap();
        tables.push(CatalogTable {
            table_schema: "main".to_string(),
            table_name: "player_ghosts".to_string(),
        });

        let report = analyze_tables(&conn, tables).await;
        conn.close().await;

        assert_eq!(report.total_tables, 4);

        let ghost = &report.tables["player_ghosts"];
        assert!(ghost.error.is_some());
        assert!(!ghost.is_player_related);
        assert_eq!(ghost.table.row_count, 0);

        assert!(report.tables["players"].error.is_none());
        assert!(!report
            .player_related_tables
            .contains(&"player_ghosts".to_string()));
    }

    /// Tests that an unreachable game server is reported as a source error.
    ///
    /// Expected: Err(AppError::SourceErr(SourceError::Connection))
    #[tokio::test]
    async fn unreachable_source_fails() {
        let dir = SourceFixture::scratch_dir().unwrap();
        let url = format!(
            "sqlite://{}?mode=ro",
            dir.path().join("missing.db").display()
        );
        let connector = SourceConnector::from_url(url, Duration::from_secs(5));

        let result = SchemaAnalysisService::new(&connector).analyze().await;

        assert!(matches!(
            result,
            Err(AppError::SourceErr(SourceError::Connection(_)))
        ));
    }
}
