//! Application startup and server initialization.
//!
//! Records the start time, builds the router and serves it until the process
//! is asked to stop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Settings;
use crate::error::StartupError;
use crate::routes;
use crate::state::StartTime;

/// Initializes and runs the application server.
///
/// Binds to the configured host and port and serves requests until Ctrl+C
/// or SIGTERM, then drains in-flight requests.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
/// while running.
pub async fn run(config: Arc<Settings>) -> Result<(), StartupError> {
    info!("Starting up the application...");
    let started = StartTime::now();

    let address = config.bind_address();
    let app = routes::create_router(started);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Listening on {}", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Shutting down the application...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
