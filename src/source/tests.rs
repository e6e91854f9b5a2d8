use super::{FetchError, HttpTransactionSource, TransactionSource};

use anyhow::Result;
use std::time::Duration;

#[test]
fn test_urls_are_built_from_trimmed_base_url() -> Result<()> {
    let source = HttpTransactionSource::new(" https://backend.example/api/ ", Duration::from_secs(5))?;

    assert_eq!(source.base_url(), "https://backend.example/api");
    assert_eq!(source.transactions_url("5"), "https://backend.example/api/services/5/transactions");
    assert_eq!(source.services_url(), "https://backend.example/api/services");

    Ok(())
}

#[test]
fn test_base_url_without_scheme_is_rejected() {
    let result = HttpTransactionSource::new("backend.example/api", Duration::from_secs(5));

    assert!(matches!(result, Err(FetchError::InvalidBaseUrl(_))));
}

#[tokio::test]
async fn test_unreachable_backend_reports_transport_error() -> Result<()> {
    let source = HttpTransactionSource::new("http://127.0.0.1:9", Duration::from_secs(2))?;

    let result = source.fetch_transactions("5", 10, 0).await;

    match result {
        Err(FetchError::Transport { url, .. }) => assert_eq!(url, "http://127.0.0.1:9/services/5/transactions"),
        other => panic!("expected a transport error, got {other:?}")
    }

    Ok(())
}
