use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::source::{FetchError, TransactionSource};

/// [`TransactionSource`] backed by the dashboard backend's REST API.
pub struct HttpTransactionSource {
    base_url: String,
    client: Client
}

impl HttpTransactionSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl(base_url));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport { url: base_url.clone(), source })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transactions_url(&self, service_id: &str) -> String {
        format!("{}/services/{}/transactions", self.base_url, service_id)
    }

    pub fn services_url(&self) -> String {
        format!("{}/services", self.base_url)
    }

    async fn get_json(&self, url: String, query: &[(&str, usize)]) -> Result<Value, FetchError> {
        debug!("GET {url} {query:?}");

        let response = self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        response.json::<Value>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait]
impl TransactionSource for HttpTransactionSource {
    async fn fetch_transactions(&self, service_id: &str, limit: usize, offset: usize) -> Result<Value, FetchError> {
        let url = self.transactions_url(service_id);

        self.get_json(url, &[("limit", limit), ("offset", offset)]).await
    }

    async fn fetch_services(&self) -> Result<Value, FetchError> {
        self.get_json(self.services_url(), &[]).await
    }
}
