//! Domain models for game server schema analysis.
//!
//! Produced fresh on every analysis run and never persisted.

use std::collections::BTreeMap;

use sea_orm::JsonValue;

use crate::model::analysis::{
    AnalysisReportDto, ColumnDto, IdentifierColumnDto, SchemaSummaryDto, TableAnalysisDto,
};

/// Column metadata as declared in the game server's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Column name as declared.
    pub name: String,
    /// Declared SQL type, e.g. `varchar(50)` or `longtext`.
    pub declared_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Declared default expression, if any.
    pub default: Option<String>,
    /// Maximum character length for sized text columns.
    pub max_length: Option<i64>,
}

impl ColumnDescriptor {
    pub fn into_dto(self) -> ColumnDto {
        ColumnDto {
            name: self.name,
            declared_type: self.declared_type,
            nullable: self.nullable,
            default: self.default,
            max_length: self.max_length,
        }
    }
}

/// A table found in the game server's catalog along with its observed row count.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalTableDescriptor {
    /// Table name.
    pub name: String,
    /// Schema (database) the table lives in.
    pub schema: String,
    /// Declared columns in ordinal order.
    pub columns: Vec<ColumnDescriptor>,
    /// Number of rows at the time of analysis.
    pub row_count: i64,
}

/// Best-effort guess of which game server framework produced the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkGuess {
    /// QBCore naming convention (`players`, `player_vehicles`, `qb_*`).
    QbCore,
    /// ESX naming convention (`users`, `owned_vehicles`, `esx_*`).
    Esx,
    /// A `players` table without the remaining QBCore markers.
    QbCoreLike,
    /// No known convention matched.
    Unknown,
}

impl FrameworkGuess {
    /// Label reported to operators.
    pub fn label(&self) -> &'static str {
        match self {
            Self::QbCore => "QBCore",
            Self::Esx => "ESX",
            Self::QbCoreLike => "QBCore-like",
            Self::Unknown => "Unknown",
        }
    }
}

/// Analysis of one game server table.
///
/// When the table could not be inspected, `error` is set, `row_count` is 0 and the
/// table counts as not player-related.
#[derive(Debug, Clone, PartialEq)]
pub struct TableAnalysis {
    pub table: ExternalTableDescriptor,
    pub is_player_related: bool,
    /// Description of the classification rule that matched, if any.
    pub matched_rule: Option<String>,
    /// Up to a few rows, only collected for small tables.
    pub sample_rows: Option<Vec<JsonValue>>,
    pub error: Option<String>,
}

impl TableAnalysis {
    /// Placeholder entry for a table whose inspection failed.
    pub fn failed(name: String, schema: String, error: String) -> Self {
        Self {
            table: ExternalTableDescriptor {
                name,
                schema,
                columns: Vec::new(),
                row_count: 0,
            },
            is_player_related: false,
            matched_rule: None,
            sample_rows: None,
            error: Some(error),
        }
    }

    pub fn into_dto(self) -> TableAnalysisDto {
        TableAnalysisDto {
            name: self.table.name,
            schema: self.table.schema,
            columns: self
                .table
                .columns
                .into_iter()
                .map(ColumnDescriptor::into_dto)
                .collect(),
            row_count: self.table.row_count,
            is_player_related: self.is_player_related,
            matched_rule: self.matched_rule,
            sample_rows: self.sample_rows,
            error: self.error,
        }
    }
}

/// A column whose name suggests it holds a player identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierColumn {
    pub table: String,
    pub column: String,
    pub declared_type: String,
}

/// Presence flags and identifier columns derived from all analyzed tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaSummary {
    pub has_users: bool,
    pub has_jobs: bool,
    pub has_vehicles: bool,
    pub has_properties: bool,
    pub has_inventory: bool,
    pub has_money: bool,
    pub identifier_columns: Vec<IdentifierColumn>,
}

impl SchemaSummary {
    pub fn into_dto(self) -> SchemaSummaryDto {
        SchemaSummaryDto {
            has_users: self.has_users,
            has_jobs: self.has_jobs,
            has_vehicles: self.has_vehicles,
            has_properties: self.has_properties,
            has_inventory: self.has_inventory,
            has_money: self.has_money,
            identifier_columns: self
                .identifier_columns
                .into_iter()
                .map(|c| IdentifierColumnDto {
                    table: c.table,
                    column: c.column,
                    declared_type: c.declared_type,
                })
                .collect(),
        }
    }
}

/// Full result of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub framework: FrameworkGuess,
    pub total_tables: usize,
    /// Names of tables classified as player-related, in name order.
    pub player_related_tables: Vec<String>,
    /// Per-table analysis keyed by table name.
    pub tables: BTreeMap<String, TableAnalysis>,
    pub summary: SchemaSummary,
}

impl AnalysisReport {
    /// Converts the report into the JSON shape served to operators.
    pub fn into_dto(self) -> AnalysisReportDto {
        AnalysisReportDto {
            framework: self.framework.label().to_string(),
            total_tables: self.total_tables,
            player_related_tables: self.player_related_tables,
            tables: self
                .tables
                .into_iter()
                .map(|(name, analysis)| (name, analysis.into_dto()))
                .collect(),
            summary: self.summary.into_dto(),
        }
    }
}
