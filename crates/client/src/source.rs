use tracing::{info, warn};

use crate::{api::CatalogApi, fallback, snapshot::Catalog};

/// Which tier supplied the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback,
}

#[derive(Clone, Debug)]
pub struct Loaded {
    pub catalog: Catalog,
    pub tier: Tier,
    /// User-visible message when the primary tier failed.
    pub error: Option<String>,
}

/// Two-tier data source: the remote API first, the built-in dataset second.
pub struct CatalogSource<A> {
    api: A,
}

impl<A: CatalogApi> CatalogSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch workers and services concurrently; if either fails, switch to
    /// the fallback dataset and record the error.
    pub async fn load(&self) -> Loaded {
        match tokio::try_join!(self.api.get_workers(), self.api.get_services()) {
            Ok((workers, services)) => {
                info!(workers = workers.len(), services = services.len(), "catalog loaded");
                Loaded { catalog: Catalog::new(workers, services), tier: Tier::Primary, error: None }
            }
            Err(e) => {
                warn!(error = %e, base = self.api.base_url(), "catalog load failed, using fallback dataset");
                Loaded {
                    catalog: fallback::catalog(),
                    tier: Tier::Fallback,
                    error: Some(format!(
                        "Failed to load data. Make sure your backend is running on {}",
                        self.api.base_url()
                    )),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use async_trait::async_trait;
    use common::{NewService, NewWorker, Service, Worker};

    struct Stub {
        services_fail: bool,
    }

    #[async_trait]
    impl CatalogApi for Stub {
        fn base_url(&self) -> &str {
            "http://stub:3000"
        }
        async fn get_workers(&self) -> Result<Vec<Worker>, ClientError> {
            Ok(fallback::WORKERS[..1].to_vec())
        }
        async fn get_services(&self) -> Result<Vec<Service>, ClientError> {
            if self.services_fail {
                Err(ClientError::Network("connection refused".into()))
            } else {
                Ok(vec![])
            }
        }
        async fn get_worker(&self, _: i32) -> Result<Worker, ClientError> {
            unimplemented!()
        }
        async fn get_service(&self, _: i32) -> Result<Service, ClientError> {
            unimplemented!()
        }
        async fn create_worker(&self, _: &NewWorker) -> Result<Worker, ClientError> {
            unimplemented!()
        }
        async fn create_service(&self, _: &NewService) -> Result<Service, ClientError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn primary_tier_is_used_when_both_fetches_succeed() {
        let loaded = CatalogSource::new(Stub { services_fail: false }).load().await;
        assert_eq!(loaded.tier, Tier::Primary);
        assert!(loaded.error.is_none());
        assert_eq!(loaded.catalog.workers().len(), 1);
    }

    #[tokio::test]
    async fn one_failed_fetch_switches_to_fallback() {
        let loaded = CatalogSource::new(Stub { services_fail: true }).load().await;
        assert_eq!(loaded.tier, Tier::Fallback);
        assert_eq!(
            loaded.error.as_deref(),
            Some("Failed to load data. Make sure your backend is running on http://stub:3000")
        );
        assert_eq!(loaded.catalog, fallback::catalog());
    }
}
