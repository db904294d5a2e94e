//! Beacon server - HTTP status service.

use anyhow::Result;
use beacon_server::{config, logging, server, state};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use config::{ServerConfig, ServiceConfig};
use logging::{LogConfig, LogFormat};
use state::AppState;

/// Beacon server - reports service status and deployed version.
#[derive(Parser, Debug)]
#[command(name = "beacon-server")]
#[command(about = "HTTP status service reporting version metadata")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override host from config
    #[arg(long)]
    host: Option<String>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging (INFO level, includes request traces)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace logging
    #[arg(long)]
    trace: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "api=debug").
    /// Can be specified multiple times. Targets are prefixed with "beacon::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };

    config.apply_overrides(cli.host, cli.port);

    tracing::info!(target: "beacon::startup", "Loaded configuration (host: {}, port: {})", config.host, config.port);

    let service = ServiceConfig::from_env();
    tracing::info!(
        target: "beacon::startup",
        "Service version {} (git sha {})",
        service.version,
        service.git_sha
    );

    let state = Arc::new(AppState::new(service));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(target: "beacon::startup", "Listening on {}", listener.local_addr()?);

    server::serve(listener, state, server::shutdown_signal()).await?;

    tracing::info!(target: "beacon::startup", "Server stopped");
    Ok(())
}
