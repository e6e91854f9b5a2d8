use tracing::info;

use crate::models::Service;
use crate::normalizer::normalize_records;
use crate::source::{FetchError, TransactionSource};
use crate::types::ServiceId;

/// Lists every service the backend knows about, regardless of status.
pub async fn fetch_services<S: TransactionSource + ?Sized>(source: &S) -> Result<Vec<Service>, FetchError> {
    let raw = source.fetch_services().await?;
    let services: Vec<Service> = normalize_records(&raw);

    info!("Backend listed {} services", services.len());

    Ok(services)
}

/// Ids of the services to aggregate when none were requested explicitly.
pub async fn list_service_ids<S: TransactionSource + ?Sized>(source: &S, active_only: bool) -> Result<Vec<ServiceId>, FetchError> {
    let services = fetch_services(source).await?;

    Ok(services.into_iter()
        .filter(|service| !active_only || service.status)
        .map(|service| service.id)
        .collect())
}
