//! HTTP client for the store admin API.
//!
//! One client is scoped to a single store and resource kind and speaks the
//! dashboard's REST shape: `POST /api/{store}/{kind}` to create,
//! `PATCH /api/{store}/{kind}/{id}` to update, `DELETE` on the same path to
//! delete. Response bodies are dropped after the status check; the form
//! core only branches on success or failure.

use std::time::Duration;

use async_trait::async_trait;
use entities::ResourceKind;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum StoreApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("missing base url: STORE_API_URL environment variable not set")]
    MissingBaseUrl,
}

/// Write side of the resource contract. Each form session dispatches at
/// most one of these per controller operation, with no automatic retry.
#[async_trait]
pub trait ResourceWriter<P: Serialize + Send + Sync>: Send + Sync {
    async fn create(&self, payload: &P) -> Result<(), StoreApiError>;
    async fn update(&self, id: Uuid, payload: &P) -> Result<(), StoreApiError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreApiError>;
}

/// Client for one store's collection of one resource kind
#[derive(Debug, Clone)]
pub struct StoreApiClient {
    http: Client,
    base_url: String,
    store_id: Uuid,
    kind: ResourceKind,
}

impl StoreApiClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client using the STORE_API_URL environment variable
    pub fn from_env(store_id: Uuid, kind: ResourceKind) -> Result<Self, StoreApiError> {
        let base_url =
            std::env::var("STORE_API_URL").map_err(|_| StoreApiError::MissingBaseUrl)?;
        Self::new(base_url, store_id, kind)
    }

    pub fn new(
        base_url: impl Into<String>,
        store_id: Uuid,
        kind: ResourceKind,
    ) -> Result<Self, StoreApiError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store_id,
            kind,
        })
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.store_id,
            self.kind.path_segment()
        )
    }

    fn record_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn request_error(error: reqwest::Error) -> StoreApiError {
        if error.is_timeout() {
            StoreApiError::Timeout
        } else {
            StoreApiError::Transport(error.to_string())
        }
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<(), StoreApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(
            kind = %self.kind,
            status = status.as_u16(),
            "store api request failed"
        );
        Err(StoreApiError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl<P: Serialize + Send + Sync> ResourceWriter<P> for StoreApiClient {
    async fn create(&self, payload: &P) -> Result<(), StoreApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(payload)
            .send()
            .await
            .map_err(Self::request_error)?;
        self.check_status(response).await
    }

    async fn update(&self, id: Uuid, payload: &P) -> Result<(), StoreApiError> {
        let response = self
            .http
            .patch(self.record_url(id))
            .json(payload)
            .send()
            .await
            .map_err(Self::request_error)?;
        self.check_status(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreApiError> {
        let response = self
            .http
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(Self::request_error)?;
        self.check_status(response).await
    }
}
