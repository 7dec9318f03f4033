//! OS signal handling.

/// Resolve once Ctrl+C is received.
///
/// If the handler cannot be installed the future never resolves and the
/// process runs until killed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
