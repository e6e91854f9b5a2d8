mod report_storage;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::engine::AggregateReport;

use report_storage::CurrentReport;

pub use report_storage::ReportStorage;

pub trait Storage: Send + Sync + 'static {
    /// Stores `report` unless a report from a newer invocation is already held.
    /// Returns whether the report was stored.
    fn publish(&self, report: Arc<AggregateReport>) -> bool;
    fn latest(&self) -> CurrentReport;
}
