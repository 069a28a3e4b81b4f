//! Serve command - runs the HTTP server

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, RouterOptions};
use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Port to listen on, overriding configuration
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the demo key server until Ctrl-C
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init_logging(&config.logging);

    let state = crate::create_app_state(&config)?;
    let app = create_router(state, RouterOptions::from(&config.server));

    let addr = config.socket_addr()?;
    info!("Demo key server running on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
