use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: lookups by owning worker
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_services_worker")
                    .table(Services::Table)
                    .col(Services::WorkerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_worker").table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, WorkerId }
