//! Launch Dash Server
//!
//! Run with: cargo run --bin launch-dash -- --data data/spacex_launch_dash.csv
//!
//! # Configuration
//!
//! Settings come from `--config` (or the default config locations), then
//! environment variables, then command-line flags:
//! - `LAUNCH_DASH_DATA`: CSV file with the launch records
//! - `LAUNCH_DASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCH_DASH_PORT`: Port to listen on (default: 8050)
//! - `LAUNCH_DASH_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCH_DASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use clap::Parser;
use launch_dash::api::{serve, AppState};
use launch_dash::config::Config;
use launch_dash::dataset::load_csv;
use launch_dash::reactive::Dashboard;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SpaceX launch records dashboard server")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file with the launch records
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", launch_dash::config::generate_default_config());
        return Ok(());
    }

    // Runs before logging is up, so failures surface through the returned error
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default().context("loading config from default locations")?,
    };

    if let Some(data) = args.data {
        config.dataset.path = data;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    config.logging.init();

    tracing::info!("Starting Launch Dash v{}", env!("CARGO_PKG_VERSION"));

    let table = load_csv(&config.dataset.path)
        .with_context(|| format!("loading launch records from {:?}", config.dataset.path))?;

    if table.is_empty() {
        tracing::warn!("Launch table is empty, charts will render without data");
    }

    let dashboard = Dashboard::launch_records(Arc::new(table), &config.dashboard)?;
    let state = AppState::new(dashboard, config.api.clone());

    serve(state, &config.api).await?;

    tracing::info!("Launch Dash stopped");
    Ok(())
}
