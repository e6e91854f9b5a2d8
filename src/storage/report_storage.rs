use crate::engine::AggregateReport;
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::watch;

pub type CurrentReport = Option<Arc<AggregateReport>>;

/// Holds the one report currently considered authoritative.
///
/// Observers are notified through a watch channel whenever a newer report
/// is published.
pub struct ReportStorage {
    sender: watch::Sender<CurrentReport>
}

impl ReportStorage {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);

        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<CurrentReport> {
        self.sender.subscribe()
    }
}

impl Storage for ReportStorage {
    fn publish(&self, report: Arc<AggregateReport>) -> bool {
        self.sender.send_if_modified(|current| {
            let is_newer = current.as_ref()
                .is_none_or(|held| report.generation > held.generation);

            if is_newer {
                *current = Some(report.clone());
            }

            is_newer
        })
    }

    fn latest(&self) -> CurrentReport {
        self.sender.borrow().clone()
    }
}
