use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;

use crate::source::{FetchError, TransactionSource};

pub enum MockResponse {
    Body(Value),
    Delayed(Duration, Value),
    Status(StatusCode),
    Panic
}

/// In-memory backend keyed by service id.
#[derive(Default)]
pub struct MockSource {
    responses: HashMap<String, MockResponse>,
    services: Option<Value>,
    calls: Mutex<Vec<(String, usize, usize)>>
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, service_id: &str, response: MockResponse) -> Self {
        self.responses.insert(service_id.to_string(), response);
        self
    }

    pub fn with_services(mut self, services: Value) -> Self {
        self.services = Some(services);
        self
    }

    pub fn calls(&self) -> Vec<(String, usize, usize)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn url(service_id: &str) -> String {
        format!("mock://services/{service_id}/transactions")
    }
}

#[async_trait]
impl TransactionSource for MockSource {
    async fn fetch_transactions(&self, service_id: &str, limit: usize, offset: usize) -> Result<Value, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((service_id.to_string(), limit, offset));
        }

        match self.responses.get(service_id) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Delayed(delay, body)) => {
                sleep(*delay).await;
                Ok(body.clone())
            }
            Some(MockResponse::Status(status)) => Err(FetchError::Status { url: Self::url(service_id), status: *status }),
            Some(MockResponse::Panic) => panic!("mock backend crashed while serving service {service_id}"),
            None => Err(FetchError::Status { url: Self::url(service_id), status: StatusCode::NOT_FOUND })
        }
    }

    async fn fetch_services(&self) -> Result<Value, FetchError> {
        self.services.clone().ok_or_else(|| FetchError::Status {
            url: "mock://services".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE
        })
    }
}
