//! Catalog store: the persistence contract for workers and services.
//! - `store::CatalogStore` is the seam the HTTP layer depends on.
//! - `seaorm` implements it over the pooled relational connection.
//! - `memory` implements it in-process for tests and local runs.

pub mod errors;
pub mod store;
pub mod seaorm;
pub mod memory;

pub use errors::CatalogError;
pub use memory::InMemoryCatalogStore;
pub use seaorm::SeaOrmCatalogStore;
pub use store::CatalogStore;

/// Connect with `cfg`, apply migrations and hand back the SQL store.
pub async fn open(cfg: &configs::DatabaseConfig) -> anyhow::Result<SeaOrmCatalogStore> {
    let db = models::db::connect_with_config(cfg).await?;
    models::db::migrate(&db).await?;
    Ok(SeaOrmCatalogStore::new(db))
}
