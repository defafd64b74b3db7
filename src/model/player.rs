use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
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
    #[schema(value_type = Object)]
    pub money: Value,
    #[schema(value_type = Object)]
    pub charinfo: Value,
    #[schema(value_type = Object)]
    pub job: Value,
    pub last_synced_at: DateTime<Utc>,
}
