use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, router};

/// Initializes the global tracing subscriber.
///
/// Log level defaults to `info` and can be overridden with `RUST_LOG`,
/// e.g. `RUST_LOG=chat_reviver=debug,serenity=warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Serves the keep-alive endpoint until the process exits.
///
/// # Arguments
/// - `addr` - Address to bind, from `KEEP_ALIVE_ADDR`
///
/// # Returns
/// - `Err(AppError::IoErr)` - Failed to bind or the server stopped with an error
pub async fn serve_keep_alive(addr: SocketAddr) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Keep-alive server listening on {}", listener.local_addr()?);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
