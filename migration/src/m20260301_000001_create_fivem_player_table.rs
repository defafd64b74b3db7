use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FivemPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(FivemPlayer::Id))
                    .col(string_uniq(FivemPlayer::License))
                    .col(string_null(FivemPlayer::CitizenId))
                    .col(string(FivemPlayer::Name))
                    .col(string(FivemPlayer::FirstName))
                    .col(string(FivemPlayer::LastName))
                    .col(big_integer(FivemPlayer::Cash))
                    .col(big_integer(FivemPlayer::Bank))
                    .col(string(FivemPlayer::JobName))
                    .col(integer(FivemPlayer::JobGrade))
                    .col(string(FivemPlayer::JobGradeName))
                    .col(string(FivemPlayer::JobLabel))
                    .col(big_integer(FivemPlayer::JobPayment))
                    .col(json(FivemPlayer::Money))
                    .col(json(FivemPlayer::Charinfo))
                    .col(json(FivemPlayer::Job))
                    .col(timestamp_with_time_zone(FivemPlayer::LastSyncedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fivem_player_last_synced_at")
                    .table(FivemPlayer::Table)
                    .col(FivemPlayer::LastSyncedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FivemPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum FivemPlayer {
    Table,
    Id,
    License,
    CitizenId,
    Name,
    FirstName,
    LastName,
    Cash,
    Bank,
    JobName,
    JobGrade,
    JobGradeName,
    JobLabel,
    JobPayment,
    Money,
    Charinfo,
    Job,
    LastSyncedAt,
}
