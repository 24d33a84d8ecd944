//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Waits for Ctrl-C (or SIGTERM on Unix), then cancels `cancel`.
///
/// Used as the server's graceful-shutdown future. Cancelling the token also
/// cancels every in-flight resolution, since each request runs on a child token.
pub async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = cancel.cancelled() => {},
    }

    log::info!("Shutting down, cancelling in-flight redirect checks");
    cancel.cancel();
}
