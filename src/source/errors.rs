use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to [{url}] failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error
    },
    #[error("Request to [{url}] returned status {status}")]
    Status {
        url: String,
        status: StatusCode
    },
    #[error("Response from [{url}] was not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error
    },
    #[error("Invalid backend base URL [{0}]")]
    InvalidBaseUrl(String)
}
