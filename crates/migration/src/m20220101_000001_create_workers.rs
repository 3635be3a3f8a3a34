//! Create `workers` table.
//!
//! Root entity of the catalog; `services.worker_id` references it.
//! Free-text columns are unbounded `text`, so input length is never a storage error.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workers::Table)
                    .if_not_exists()
                    .col(pk_auto(Workers::Id))
                    .col(text(Workers::Name))
                    .col(text(Workers::Skill))
                    .col(text(Workers::Location))
                    .col(double(Workers::Rating))
                    .col(text(Workers::Contact))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Workers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Workers { Table, Id, Name, Skill, Location, Rating, Contact }
