mod actors;
mod config;
mod directory;
mod engine;
mod models;
mod normalizer;
mod output;
mod source;
mod storage;
mod types;

use std::io::{stderr, stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal::ctrl_c;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Command, Settings};
use crate::directory::{fetch_services, list_service_ids};
use crate::engine::{AggregateReport, AggregationEngine, FETCH_OFFSET, FETCH_PAGE_SIZE};
use crate::normalizer::normalize;
use crate::output::{write_audit, write_report, write_services};
use crate::source::{HttpTransactionSource, TransactionSource};
use crate::storage::{ReportStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::parse();

    setup_logging(settings.log_level());

    let source = Arc::new(
        HttpTransactionSource::new(&settings.base_url, settings.timeout())
            .context("Could not set up the backend client")?
    );

    info!("Using backend at {}", source.base_url());

    match settings.command {
        Command::Counts { service_ids, active_only, refresh } => {
            let service_ids = if service_ids.is_empty() {
                list_service_ids(source.as_ref(), active_only)
                    .await
                    .context("Could not list services")?
            } else {
                service_ids
            };

            match refresh {
                Some(seconds) => watch_counts(source, service_ids, Duration::from_secs(seconds.max(1))).await,
                None => print_counts(source, service_ids).await
            }
        }
        Command::Audit { service_id } => audit_service(source.as_ref(), &service_id).await,
        Command::Services => {
            let services = fetch_services(source.as_ref())
                .await
                .context("Could not list services")?;
            write_services(stdout().lock(), &services)?;

            Ok(())
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV output, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn print_counts(source: Arc<HttpTransactionSource>, service_ids: Vec<String>) -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let engine = AggregationEngine::new(source, storage);

    let timer = Instant::now();
    let report = engine.aggregate(&service_ids).await;
    let duration = timer.elapsed();

    info!("Aggregated {} services in: {duration:?}", report.services.len());

    print_report(&report)
}

async fn watch_counts(source: Arc<HttpTransactionSource>, service_ids: Vec<String>, period: Duration) -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let engine = Arc::new(AggregationEngine::new(source, storage.clone()));
    let service_ids = Arc::new(service_ids);
    let mut receiver = storage.subscribe();

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                //NOTE: Runs may overlap when the backend is slow, storage only keeps the newest one
                let engine = engine.clone();
                let service_ids = service_ids.clone();
                tokio::spawn(async move {
                    engine.aggregate(&service_ids).await;
                });
            }
            changed = receiver.changed() => {
                changed.context("Report storage closed")?;
                let current = receiver.borrow_and_update().clone();

                if let Some(report) = current {
                    print_report(&report)?;
                }
            }
            _ = ctrl_c() => {
                if let Some(report) = storage.latest() {
                    info!("Interrupted, last published report was aggregation [{}]", report.generation);
                }
                return Ok(());
            }
        }
    }
}

async fn audit_service<S: TransactionSource>(source: &S, service_id: &str) -> Result<()> {
    let raw = source.fetch_transactions(service_id, FETCH_PAGE_SIZE, FETCH_OFFSET)
        .await
        .with_context(|| format!("Could not fetch transactions for service [{service_id}]"))?;

    write_audit(stdout().lock(), &normalize(&raw))?;

    Ok(())
}

fn print_report(report: &AggregateReport) -> Result<()> {
    write_report(stdout().lock(), report)?;

    writeln!(stderr(), "[{}] {}", report.started_at.format("%Y-%m-%d %H:%M:%S"), report.summary())?;

    Ok(())
}
