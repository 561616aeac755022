use crate::domain::model::{Catalog, ListingPage, PredictResponse};
use crate::domain::ports::ListingBackend;
use crate::utils::error::{CarscopeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-backed implementation of the listing backend port.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ListingBackend for HttpBackend {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.endpoint("metadata");
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_listings(&self, query: &[(String, String)]) -> Result<ListingPage> {
        let url = self.endpoint("cars");
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).query(query).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn predict(&self, description: &str) -> Result<f64> {
        let url = self.endpoint("predict");
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let body: PredictResponse = response.json().await?;
            body.score.ok_or_else(|| CarscopeError::BackendError {
                status: status.as_u16(),
                message: "response carried no score".to_string(),
            })
        } else {
            // The backend reports failures as { "error": ... }; fall back to a
            // generic message when that field is absent or unreadable.
            let message = response
                .json::<PredictResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("prediction request failed with status {}", status));
            Err(CarscopeError::BackendError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
