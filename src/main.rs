use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_query::dataset::{DatasetCache, DatasetConfig};
use transaction_query::models::{FraudSummary, MethodStats, StatsOverview, TopCustomer};
use transaction_query::query::QueryEngine;
use transaction_query::system::{HealthCheck, SystemMetadata, SystemService};

const TOP_CUSTOMERS: usize = 5;

#[derive(Serialize)]
struct Report {
    health: HealthCheck,
    metadata: SystemMetadata,
    #[serde(flatten)]
    dataset: Option<DatasetReport>
}

#[derive(Serialize)]
struct DatasetReport {
    overview: StatsOverview,
    fraud_summary: FraudSummary,
    stats_by_method: Vec<MethodStats>,
    top_customers: Vec<TopCustomer>
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: transaction-query [transactions].csv [fraud_labels].json [log_level:optional] > [report].json");
        eprintln!("Defaults: data/transactions_data.csv and data/train_fraud_labels.json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(0);
    }

    let config = DatasetConfig::new(args.get(1).map(PathBuf::from), args.get(2).map(PathBuf::from));
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let system = SystemService::new();
    let cache = DatasetCache::from_config(&config);

    let timer = Instant::now();

    //NOTE: A missing dataset is not fatal, the process keeps running in degraded mode and reports it through health
    if let Err(error) = cache.load().await {
        error!("Starting in degraded mode: {error}");
    } else {
        info!("Dataset ready in: {:?}", timer.elapsed());
    }

    let dataset = match QueryEngine::from_cache(&cache).await {
        Ok(engine) => Some(DatasetReport {
            overview: engine.overview(),
            fraud_summary: engine.fraud_summary(),
            stats_by_method: engine.stats_by_method(),
            top_customers: engine.top_customers(TOP_CUSTOMERS)
        }),
        Err(_) => None
    };

    let report = Report {
        health: system.health(&cache).await,
        metadata: system.metadata(),
        dataset
    };

    write_report_to_stdout(&report)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
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

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging is kept on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(report: &Report) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, report)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
