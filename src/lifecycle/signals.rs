//! OS signal handling.
//!
//! Ctrl+C (SIGINT) and an in-process [`ShutdownSignal`] both end a server.

use crate::lifecycle::shutdown::ShutdownSignal;

/// Wait until either Ctrl+C is received or `signal` fires.
pub async fn shutdown_requested(signal: ShutdownSignal) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = signal.recv() => tracing::info!("Shutdown triggered"),
    }
}
