//! The calculator service: HTTP endpoints in front of [`evaluate`].
//!
//! [`evaluate`]: crate::calculator::evaluate

mod routes;

pub use routes::router;

use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind `listen` and serve until Ctrl+C.
pub async fn serve(listen: &str, allowed_origins: &[String]) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Calculator service listening on http://{}", addr);

    axum::serve(listener, router(allowed_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calculator service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
