use common::{Service, Worker};

/// Session-long copy of both collections. All cross-references are resolved
/// locally; the service to worker join stays optional because a snapshot may
/// be stale or come from the fallback dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    workers: Vec<Worker>,
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(workers: Vec<Worker>, services: Vec<Service>) -> Self {
        Self { workers, services }
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn find_worker(&self, id: i32) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn find_service(&self, id: i32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Services whose `worker_id` is `worker_id`, in snapshot order.
    pub fn services_for_worker(&self, worker_id: i32) -> Vec<&Service> {
        self.services.iter().filter(|s| s.worker_id == worker_id).collect()
    }

    pub fn worker_for_service(&self, service: &Service) -> Option<&Worker> {
        self.find_worker(service.worker_id)
    }

    /// Workers whose name or skill contains `query`, ignoring case.
    /// A blank query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&Worker> {
        let needle = query.trim().to_lowercase();
        self.workers
            .iter()
            .filter(|w| {
                needle.is_empty()
                    || w.name.to_lowercase().contains(&needle)
                    || w.skill.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
