//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C, then fire `shutdown`.
///
/// If the handler cannot be installed this never resolves; the process
/// then only stops through another `Shutdown::trigger`.
pub async fn wait_for_signal(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
