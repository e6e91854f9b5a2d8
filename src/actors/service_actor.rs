use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::spawn;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::{tally_current_month, StatusBreakdown, FETCH_OFFSET, FETCH_PAGE_SIZE};
use crate::normalizer::normalize;
use crate::source::{FetchError, TransactionSource};
use crate::types::ServiceId;

pub struct ServiceActor;

impl ServiceActor {
    /// Spawns the fetch and tally for one service and returns its handle.
    ///
    /// Actors share nothing with each other; each one owns its response and
    /// hands back its own breakdown through the join handle.
    pub fn spawn<S: TransactionSource>(service_id: ServiceId, source: Arc<S>, now: DateTime<Local>) -> JoinHandle<Result<StatusBreakdown, FetchError>> {
        spawn(async move {
            let raw = source.fetch_transactions(&service_id, FETCH_PAGE_SIZE, FETCH_OFFSET).await?;
            let transactions = normalize(&raw);
            let breakdown = tally_current_month(&transactions, now);

            debug!("Service [{service_id}] returned {} transactions, {} in the current month", transactions.len(), breakdown.total());

            Ok(breakdown)
        })
    }
}
