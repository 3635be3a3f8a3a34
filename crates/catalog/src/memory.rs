//! In-memory `CatalogStore`.
//!
//! Same contract as the SQL store, foreign key included, so request-layer
//! tests can run without a database. `unavailable` builds a store whose every
//! call fails like a lost connection.

use std::collections::BTreeMap;

use async_trait::async_trait;
use common::{NewService, NewWorker, Service, Worker};
use tokio::sync::RwLock;

use crate::errors::CatalogError;
use crate::store::CatalogStore;

#[derive(Default)]
struct Tables {
    workers: BTreeMap<i32, Worker>,
    services: BTreeMap<i32, Service>,
    next_worker_id: i32,
    next_service_id: i32,
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
    outage: Option<String>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self { Self::default() }

    /// A store that answers every call with `CatalogError::Storage(reason)`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { tables: RwLock::default(), outage: Some(reason.into()) }
    }

    fn check(&self) -> Result<(), CatalogError> {
        match &self.outage {
            Some(reason) => Err(CatalogError::Storage(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_workers(&self) -> Result<Vec<Worker>, CatalogError> {
        self.check()?;
        Ok(self.tables.read().await.workers.values().cloned().collect())
    }

    async fn get_worker(&self, id: i32) -> Result<Worker, CatalogError> {
        self.check()?;
        self.tables
            .read()
            .await
            .workers
            .get(&id)
            .cloned()
            .ok_or_else(CatalogError::worker_not_found)
    }

    async fn create_worker(&self, input: NewWorker) -> Result<Worker, CatalogError> {
        self.check()?;
        models::worker::validate(&input)?;
        let mut t = self.tables.write().await;
        t.next_worker_id += 1;
        let w = Worker {
            id: t.next_worker_id,
            name: input.name.trim().to_string(),
            skill: input.skill.trim().to_string(),
            location: input.location.trim().to_string(),
            rating: input.rating,
            contact: input.contact.trim().to_string(),
        };
        t.workers.insert(w.id, w.clone());
        Ok(w)
    }

    async fn list_services(&self) -> Result<Vec<Service>, CatalogError> {
        self.check()?;
        Ok(self.tables.read().await.services.values().cloned().collect())
    }

    async fn get_service(&self, id: i32) -> Result<Service, CatalogError> {
        self.check()?;
        self.tables
            .read()
            .await
            .services
            .get(&id)
            .cloned()
            .ok_or_else(CatalogError::service_not_found)
    }

    async fn create_service(&self, input: NewService) -> Result<Service, CatalogError> {
        self.check()?;
        models::service::validate(&input)?;
        let mut t = self.tables.write().await;
        if !t.workers.contains_key(&input.worker_id) {
            return Err(CatalogError::Validation(format!(
                "worker_id {} does not reference an existing worker",
                input.worker_id
            )));
        }
        t.next_service_id += 1;
        let s = Service {
            id: t.next_service_id,
            worker_id: input.worker_id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            price_range: input.price_range.trim().to_string(),
        };
        t.services.insert(s.id, s.clone());
        Ok(s)
    }

    async fn server_time(&self) -> Result<String, CatalogError> {
        self.check()?;
        Ok(chrono::Utc::now().to_rfc3339())
    }
}
