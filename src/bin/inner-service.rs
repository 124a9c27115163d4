//! Inner service binary: serves `GET /retrieveData`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use relay_demo::config::{self, InnerServiceConfig};
use relay_demo::lifecycle::Shutdown;
use relay_demo::observability::init_logging;

#[derive(Parser)]
#[command(name = "inner-service")]
#[command(about = "Data service that fails a configurable share of requests", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `failure.probability`.
    #[arg(long)]
    failure_probability: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config::<InnerServiceConfig>(path)?,
        None => InnerServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(probability) = cli.failure_probability {
        config.failure.probability = probability;
    }
    config::loader::validate(&config)?;

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        failure_probability = config.failure.probability,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = relay_demo::inner::server(&config)?;

    // Held for the lifetime of the server; only Ctrl+C stops the binary.
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
