use std::collections::HashMap;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::engine::StatusBreakdown;
use crate::source::FetchError;
use crate::types::ServiceId;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Fetching transactions for service [{service_id}] failed: {source}")]
    Fetch {
        service_id: ServiceId,
        #[source]
        source: FetchError
    },
    #[error("Aggregation for service [{service_id}] did not complete: {reason}")]
    Task {
        service_id: ServiceId,
        reason: String
    }
}

/// Result of one aggregation run across a set of services.
///
/// Every requested service has an entry in `counts`; services that failed
/// carry `0` there and their failure in `errors`.
#[derive(Debug)]
pub struct AggregateReport {
    /// Invocation number, higher is newer.
    pub generation: u64,
    pub started_at: DateTime<Local>,
    /// Requested services, deduplicated, in request order.
    pub services: Vec<ServiceId>,
    pub counts: HashMap<ServiceId, usize>,
    pub breakdowns: HashMap<ServiceId, StatusBreakdown>,
    pub errors: HashMap<ServiceId, ServiceError>
}

impl AggregateReport {
    pub fn new(generation: u64, started_at: DateTime<Local>) -> Self {
        Self {
            generation,
            started_at,
            services: Vec::new(),
            counts: HashMap::new(),
            breakdowns: HashMap::new(),
            errors: HashMap::new()
        }
    }

    pub fn record_success(&mut self, service_id: ServiceId, breakdown: StatusBreakdown) {
        self.counts.insert(service_id.clone(), breakdown.total());
        self.breakdowns.insert(service_id.clone(), breakdown);
        self.services.push(service_id);
    }

    pub fn record_failure(&mut self, service_id: ServiceId, error: ServiceError) {
        self.counts.insert(service_id.clone(), 0);
        self.breakdowns.insert(service_id.clone(), StatusBreakdown::default());
        self.errors.insert(service_id.clone(), error);
        self.services.push(service_id);
    }

    pub fn count(&self, service_id: &str) -> usize {
        self.counts.get(service_id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn failed_services(&self) -> Vec<&ServiceId> {
        self.services.iter()
            .filter(|service_id| self.errors.contains_key(*service_id))
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} transactions this month across {} services, {} of {} services failed to load",
            self.total(),
            self.services.len(),
            self.failed_services().len(),
            self.services.len()
        )
    }
}
