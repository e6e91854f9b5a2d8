mod errors;
mod http_source;
#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde_json::Value;

pub use errors::FetchError;
pub use http_source::HttpTransactionSource;

/// Backend capability the aggregation depends on.
///
/// Implementations return the raw JSON body; shape handling is left to the
/// normalizer because the backend is not consistent about envelopes.
#[async_trait]
pub trait TransactionSource: Send + Sync + 'static {
    async fn fetch_transactions(&self, service_id: &str, limit: usize, offset: usize) -> Result<Value, FetchError>;
    async fn fetch_services(&self) -> Result<Value, FetchError>;
}
