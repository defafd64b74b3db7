use sea_orm::entity::prelude::*;

/// Mirrored game-server player, keyed by the `license` natural key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fivem_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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
    pub money: Json,
    pub charinfo: Json,
    pub job: Json,
    pub last_synced_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
