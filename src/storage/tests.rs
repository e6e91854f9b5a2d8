use super::{ReportStorage, Storage};
use crate::engine::AggregateReport;

use anyhow::{anyhow, Result};
use chrono::Local;
use std::sync::Arc;

fn create_report(generation: u64, service_id: &str) -> Arc<AggregateReport> {
    let mut report = AggregateReport::new(generation, Local::now());
    report.record_success(service_id.to_string(), Default::default());

    Arc::new(report)
}

#[test]
fn test_storage_starts_empty() {
    let storage = ReportStorage::new();

    assert!(storage.latest().is_none());
}

#[test]
fn test_storage_accepts_newer_generations() -> Result<()> {
    let storage = ReportStorage::new();

    assert!(storage.publish(create_report(1, "5")));
    assert!(storage.publish(create_report(2, "6")));

    let latest = storage.latest().ok_or_else(|| anyhow!("report missing from storage"))?;

    assert_eq!(latest.generation, 2);
    assert_eq!(latest.services, vec!["6".to_string()]);

    Ok(())
}

#[test]
fn test_storage_rejects_older_and_equal_generations() -> Result<()> {
    let storage = ReportStorage::new();

    assert!(storage.publish(create_report(3, "newest")));
    assert!(!storage.publish(create_report(2, "stale")));
    assert!(!storage.publish(create_report(3, "duplicate")));

    let latest = storage.latest().ok_or_else(|| anyhow!("report missing from storage"))?;

    assert_eq!(latest.services, vec!["newest".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_subscribers_are_notified_only_of_accepted_reports() -> Result<()> {
    let storage = ReportStorage::new();
    let mut receiver = storage.subscribe();

    storage.publish(create_report(2, "5"));

    receiver.changed().await?;
    assert_eq!(receiver.borrow_and_update().as_ref().map(|report| report.generation), Some(2));

    storage.publish(create_report(1, "5"));

    assert!(!receiver.has_changed()?);

    Ok(())
}
