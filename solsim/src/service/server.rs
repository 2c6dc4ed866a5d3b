//! Server entrypoint: bind, serve, shut down on Ctrl-C

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use crate::service::routes::create_router;
use crate::simulation::controller::StepController;

/// Serve `controller` on `addr` until the process is interrupted
pub async fn run_server(controller: StepController, addr: SocketAddr) -> Result<()> {
    let app = create_router(Arc::new(controller));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("physics server listening on http://{}", listener.local_addr()?);
    log::info!("  - positions: http://{addr}/get_positions");
    log::info!("  - step:      http://{addr}/step?dt=1.0");
    log::info!("  - reset:     http://{addr}/reset");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("physics server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
