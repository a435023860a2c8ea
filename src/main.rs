//! status-radar
//!
//! Watches third-party status pages from the terminal.
//!
//! # Architecture Overview
//!
//! ```text
//!   registry ──▶ monitor ──▶ check ──▶ relay chain ──▶ relay 1 … relay n ──▶ status page
//!                  │           │            │
//!                  │           │            └─ all failed ──▶ simulate
//!                  │           ▼
//!                  │      status board (latest + history)
//!                  ▼
//!             aggregate (summary, issue feed) ──▶ observer (logs) / JSON output
//! ```

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::sync::mpsc;

use status_radar::lifecycle::{self, signals, Shutdown};
use status_radar::monitor::{NoopObserver, StatusObserver, TracingObserver};
use status_radar::observability::{logging, metrics};
use status_radar::{CheckResult, RadarConfig};

#[derive(Parser)]
#[command(name = "status-radar", version)]
#[command(about = "Poll third-party status pages through relay proxies", long_about = None)]
struct Cli {
    /// TOML configuration file; the built-in catalog is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll continuously; press Enter to refresh now
    Watch,
    /// Refresh every service once and print the dashboard as JSON
    Once,
    /// Check a single service and print its result as JSON
    Check { id: String },
    /// List monitored services
    Services,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    service: &'a str,
    result: CheckResult,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging needs the config, so parse errors before init go to stderr directly
    let config = match lifecycle::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    logging::init_logging(&config.observability);

    tracing::info!("status-radar v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => watch(&config).await?,
        Commands::Once => {
            let monitor = lifecycle::build_monitor(&config, Arc::new(NoopObserver))?;
            monitor.refresh_all().await;
            println!("{}", serde_json::to_string_pretty(&monitor.snapshot())?);
        }
        Commands::Check { id } => {
            let monitor = lifecycle::build_monitor(&config, Arc::new(NoopObserver))?;
            match monitor.check_service(&id).await {
                Ok(result) => {
                    let output = CheckOutput { service: &id, result };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Services => {
            let registry = status_radar::Registry::from_config(&config);
            for service in registry.iter() {
                println!(
                    "{:<14} {:<22} {:<14} {}",
                    service.id, service.name, service.category, service.endpoint_url
                );
            }
        }
    }

    Ok(())
}

async fn watch(config: &RadarConfig) -> Result<(), Box<dyn std::error::Error>> {
    let observer: Arc<dyn StatusObserver> = Arc::new(TracingObserver);
    let monitor = lifecycle::build_monitor(config, observer)?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let (trigger_tx, trigger_rx) = mpsc::channel(8);
    spawn_stdin_trigger(trigger_tx);

    monitor
        .run(
            Duration::from_secs(config.poll.interval_secs),
            trigger_rx,
            shutdown.subscribe(),
        )
        .await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Each line on stdin requests a refresh. Runs on a plain thread so a pending
/// read never holds up runtime shutdown.
fn spawn_stdin_trigger(tx: mpsc::Sender<()>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if line.is_err() || tx.blocking_send(()).is_err() {
                break;
            }
        }
    });
}
