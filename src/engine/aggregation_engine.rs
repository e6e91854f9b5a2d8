use crate::actors::ServiceActor;
use crate::engine::{AggregateReport, ServiceError};
use crate::source::TransactionSource;
use crate::storage::{ReportStorage, Storage};
use crate::types::ServiceId;
use chrono::{DateTime, Local};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Page size requested from the backend for every service.
///
/// The whole month is read as a single page at offset zero. A service holding
/// more than this many transactions is silently undercounted.
pub const FETCH_PAGE_SIZE: usize = 10_000;
pub const FETCH_OFFSET: usize = 0;

/// Counts current-month transactions per service, one concurrent fetch per service.
pub struct AggregationEngine<S: TransactionSource> {
    source: Arc<S>,
    storage: Arc<ReportStorage>,
    generation: AtomicU64
}

impl<S: TransactionSource> AggregationEngine<S> {
    /// Creates a new engine that publishes its reports into `storage`.
    pub fn new(source: Arc<S>, storage: Arc<ReportStorage>) -> Self {
        Self {
            source,
            storage,
            generation: AtomicU64::new(0)
        }
    }

    pub async fn aggregate(&self, service_ids: &[ServiceId]) -> Arc<AggregateReport> {
        self.aggregate_at(service_ids, Local::now()).await
    }

    /// Runs one aggregation as of `now` and publishes it.
    ///
    /// Never fails: a service whose fetch errors, or whose task dies, is
    /// reported with a count of `0` and an entry in the report's errors. The
    /// report is returned once every service has settled. If a newer
    /// invocation has already published, this report is returned to the
    /// caller but does not replace the stored one.
    pub async fn aggregate_at(&self, service_ids: &[ServiceId], now: DateTime<Local>) -> Arc<AggregateReport> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut seen = HashSet::new();
        let services: Vec<ServiceId> = service_ids.iter()
            .filter(|service_id| seen.insert(service_id.as_str()))
            .cloned()
            .collect();

        info!("Aggregation [{generation}] started for {} services", services.len());

        let handles = services.iter()
            .map(|service_id| ServiceActor::spawn(service_id.clone(), self.source.clone(), now));

        let outcomes = join_all(handles).await;
        let mut report = AggregateReport::new(generation, now);

        for (service_id, outcome) in services.into_iter().zip(outcomes) {
            match outcome {
                Ok(Ok(breakdown)) => report.record_success(service_id, breakdown),
                Ok(Err(source)) => {
                    let error = ServiceError::Fetch { service_id: service_id.clone(), source };
                    warn!("{error}");
                    report.record_failure(service_id, error);
                }
                Err(join_error) => {
                    let error = ServiceError::Task { service_id: service_id.clone(), reason: join_error.to_string() };
                    warn!("{error}");
                    report.record_failure(service_id, error);
                }
            }
        }

        info!("Aggregation [{generation}] finished: {}", report.summary());

        let report = Arc::new(report);

        if !self.storage.publish(report.clone()) {
            debug!("Aggregation [{generation}] was superseded by a newer run and was not published");
        }

        report
    }
}
