//! Create `services` table.
//! Each row belongs to exactly one worker; the foreign key keeps the join total.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(integer(Services::WorkerId))
                    .col(text(Services::Title))
                    .col(text(Services::Description))
                    .col(text(Services::PriceRange))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_worker")
                            .from(Services::Table, Services::WorkerId)
                            .to(Workers::Table, Workers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    WorkerId,
    Title,
    Description,
    PriceRange,
}

#[derive(DeriveIden)]
enum Workers { Table, Id }
