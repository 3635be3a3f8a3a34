//! Migrator registering catalog migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_workers;
mod m20220101_000002_create_services;
mod m20220101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_workers::Migration),
            // services.worker_id -> workers.id
            Box::new(m20220101_000002_create_services::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000003_add_indexes::Migration),
        ]
    }
}
