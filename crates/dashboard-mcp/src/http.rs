//! Streamable HTTP transport for the MCP server.
//!
//! Serves the rmcp `StreamableHttpService` at `/mcp` and a plain `/health`
//! probe from one axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::server::DashboardMcpServer;

/// Path the MCP endpoint is mounted at.
pub const MCP_PATH: &str = "/mcp";

/// Build the router: MCP service plus health probe.
pub fn router(server: DashboardMcpServer) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        Default::default(),
    );

    Router::new()
        .nest_service(MCP_PATH, service)
        .route("/health", axum::routing::get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve in a background task.
///
/// Returns the bound address (useful with port 0) and the server task handle;
/// abort the handle to stop serving.
pub async fn start_http_server(
    server: DashboardMcpServer,
    addr: SocketAddr,
) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let app = router(server);

    tracing::info!("Dashboard MCP HTTP server listening on http://{local_addr}{MCP_PATH}");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Dashboard MCP HTTP server error: {}", e);
        }
    });

    Ok((local_addr, handle))
}

/// Serve until Ctrl-C.
pub async fn serve_http(server: DashboardMcpServer, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Dashboard MCP HTTP server listening on http://{}{MCP_PATH}",
        listener.local_addr()?
    );

    axum::serve(listener, router(server))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

/// Health check handler for the /health endpoint.
async fn health_check() -> &'static str {
    "OK"
}
