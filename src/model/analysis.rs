use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub max_length: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableAnalysisDto {
    pub name: String,
    pub schema: String,
    pub columns: Vec<ColumnDto>,
    pub row_count: i64,
    pub is_player_related: bool,
    pub matched_rule: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub sample_rows: Option<Vec<Value>>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierColumnDto {
    pub table: String,
    pub column: String,
    #[serde(rename = "type")]
    pub declared_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummaryDto {
    pub has_users: bool,
    pub has_jobs: bool,
    pub has_vehicles: bool,
    pub has_properties: bool,
    pub has_inventory: bool,
    pub has_money: bool,
    pub identifier_columns: Vec<IdentifierColumnDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReportDto {
    pub framework: String,
    pub total_tables: usize,
    pub player_related_tables: Vec<String>,
    pub tables: BTreeMap<String, TableAnalysisDto>,
    pub summary: SchemaSummaryDto,
}
