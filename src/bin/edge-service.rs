//! Edge service binary: serves `GET /data1` and `GET /data2`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use relay_demo::config::{self, EdgeServiceConfig};
use relay_demo::lifecycle::Shutdown;
use relay_demo::observability::init_logging;

#[derive(Parser)]
#[command(name = "edge-service")]
#[command(about = "Public service relaying data from the inner service", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `inner_service.url`.
    #[arg(long)]
    inner_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config::<EdgeServiceConfig>(path)?,
        None => EdgeServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = cli.inner_url {
        config.inner_service.url = Some(url);
    }
    config::loader::validate(&config)?;

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        inner_service_url = config.inner_service.url.as_deref().unwrap_or_default(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = relay_demo::edge::server(&config)?;

    // Held for the lifetime of the server; only Ctrl+C stops the binary.
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
