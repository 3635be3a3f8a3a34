use async_trait::async_trait;
use common::{NewService, NewWorker, Service, Worker};

use crate::errors::CatalogError;

/// Persistence contract for the two catalog record types.
///
/// Lists are ordered by ascending id. Single-record fetches return
/// `CatalogError::NotFound` for unknown ids. Creates assign the id and return
/// the full persisted record.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_workers(&self) -> Result<Vec<Worker>, CatalogError>;
    async fn get_worker(&self, id: i32) -> Result<Worker, CatalogError>;
    async fn create_worker(&self, input: NewWorker) -> Result<Worker, CatalogError>;

    async fn list_services(&self) -> Result<Vec<Service>, CatalogError>;
    async fn get_service(&self, id: i32) -> Result<Service, CatalogError>;
    /// Rejects a `worker_id` that does not reference an existing worker.
    async fn create_service(&self, input: NewService) -> Result<Service, CatalogError>;

    /// Clock of the backing store, used as a liveness probe.
    async fn server_time(&self) -> Result<String, CatalogError>;
}
