//! LineRelay server
//!
//! Receives Prometheus Alertmanager webhooks and forwards them to LINE
//! Notify.

use anyhow::Context as _;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use linerelay::api::HttpServer;
use linerelay::notify::LineNotify;
use linerelay::Config;

/// LineRelay - Alertmanager to LINE Notify relay
#[derive(Parser)]
#[command(name = "linerelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LINERELAY_CONFIG")]
    config: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long, env = "LINERELAY_PORT")]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Make .env values visible to the config loader
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config, cli.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(config: &Config, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;

    let push = LineNotify::new(&config.line).context("failed to build LINE Notify client")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting LineRelay on {}", addr);

    HttpServer::new(Arc::new(config), Arc::new(push), Some(metrics))
        .serve(&addr)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
