use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

/// Audits banking service transactions for the current calendar month.
///
/// Every option can also be supplied through the environment or a `.env` file.
#[derive(Debug, Parser)]
#[command(name = "service-audit", version)]
pub struct Settings {
    /// Base URL of the dashboard backend, e.g. https://backend.example/api
    #[arg(long, env = "SERVICE_AUDIT_BASE_URL")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SERVICE_AUDIT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// error, warn, info, debug or trace
    #[arg(long, env = "SERVICE_AUDIT_LOG_LEVEL", default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count this month's transactions per service
    Counts {
        /// Services to aggregate; all services known to the backend when omitted
        service_ids: Vec<String>,

        /// Only aggregate active services when listing them from the backend
        #[arg(long)]
        active_only: bool,

        /// Re-run the aggregation every N seconds until interrupted
        #[arg(long, value_name = "SECONDS")]
        refresh: Option<u64>
    },
    /// List one service's transactions with their resolved status
    Audit {
        service_id: String
    },
    /// List the services registered on the backend
    Services
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_level(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
