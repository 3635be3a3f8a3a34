use std::time::Duration;

use async_trait::async_trait;
use common::{ErrorBody, NewService, NewWorker, Service, Worker};
use configs::ClientConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ClientError;

/// Remote catalog operations as seen by the client.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Base URL requests are sent to; used in user-facing error text.
    fn base_url(&self) -> &str;

    async fn get_workers(&self) -> Result<Vec<Worker>, ClientError>;
    async fn get_services(&self) -> Result<Vec<Service>, ClientError>;
    async fn get_worker(&self, id: i32) -> Result<Worker, ClientError>;
    async fn get_service(&self, id: i32) -> Result<Service, ClientError>;
    async fn create_worker(&self, input: &NewWorker) -> Result<Worker, ClientError>;
    async fn create_service(&self, input: &NewService) -> Result<Service, ClientError>;
}

#[derive(Clone, Debug)]
pub struct HttpCatalogApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(cfg.api_base_url.clone(), Duration::from_secs(cfg.timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(b) => b.error,
            Err(_) if body.trim().is_empty() => status.canonical_reason().unwrap_or("request failed").to_string(),
            Err(_) => body,
        };
        return Err(ClientError::Status { status: status.as_u16(), message });
    }
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_workers(&self) -> Result<Vec<Worker>, ClientError> {
        self.get_json("/api/workers").await
    }

    async fn get_services(&self) -> Result<Vec<Service>, ClientError> {
        self.get_json("/api/services").await
    }

    async fn get_worker(&self, id: i32) -> Result<Worker, ClientError> {
        self.get_json(&format!("/api/workers/{id}")).await
    }

    async fn get_service(&self, id: i32) -> Result<Service, ClientError> {
        self.get_json(&format!("/api/services/{id}")).await
    }

    async fn create_worker(&self, input: &NewWorker) -> Result<Worker, ClientError> {
        self.post_json("/api/workers", input).await
    }

    async fn create_service(&self, input: &NewService) -> Result<Service, ClientError> {
        self.post_json("/api/services", input).await
    }
}
