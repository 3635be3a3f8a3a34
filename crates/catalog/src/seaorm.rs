use async_trait::async_trait;
use common::{NewService, NewWorker, Service, Worker};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

use crate::errors::CatalogError;
use crate::store::CatalogStore;
use models::{service, worker};

/// SeaORM-backed store. Owns a clone of the pooled connection handle; every
/// operation is a single round trip through the pool.
#[derive(Clone)]
pub struct SeaOrmCatalogStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CatalogStore for SeaOrmCatalogStore {
    #[instrument(skip(self))]
    async fn list_workers(&self) -> Result<Vec<Worker>, CatalogError> {
        let rows = worker::list(&self.db).await?;
        debug!(count = rows.len(), "workers loaded");
        Ok(rows.into_iter().map(Worker::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_worker(&self, id: i32) -> Result<Worker, CatalogError> {
        worker::find(&self.db, id)
            .await?
            .map(Worker::from)
            .ok_or_else(CatalogError::worker_not_found)
    }

    #[instrument(skip(self, input), fields(name = %input.name, skill = %input.skill))]
    async fn create_worker(&self, input: NewWorker) -> Result<Worker, CatalogError> {
        let created = worker::create(&self.db, &input).await?;
        Ok(created.into())
    }

    #[instrument(skip(self))]
    async fn list_services(&self) -> Result<Vec<Service>, CatalogError> {
        let rows = service::list(&self.db).await?;
        debug!(count = rows.len(), "services loaded");
        Ok(rows.into_iter().map(Service::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_service(&self, id: i32) -> Result<Service, CatalogError> {
        service::find(&self.db, id)
            .await?
            .map(Service::from)
            .ok_or_else(CatalogError::service_not_found)
    }

    #[instrument(skip(self, input), fields(worker_id = input.worker_id, title = %input.title))]
    async fn create_service(&self, input: NewService) -> Result<Service, CatalogError> {
        let created = service::create(&self.db, &input).await?;
        Ok(created.into())
    }

    async fn server_time(&self) -> Result<String, CatalogError> {
        Ok(models::db::server_time(&self.db).await?)
    }
}
