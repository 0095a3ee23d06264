//! Dashboard MCP Server
//!
//! Model Context Protocol server exposing KwickMetrics dashboard sales and
//! returns reports to LLM agents.

use clap::Parser;
use rmcp::ServiceExt;

use dashboard_client::Credentials;
use dashboard_mcp::cli::{Cli, TransportKind};
use dashboard_mcp::http;
use dashboard_mcp::logging::init_logging;
use dashboard_mcp::server::DashboardMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file())?;

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let credentials = Credentials::from_env();
    if !credentials.is_complete() {
        tracing::warn!("AUTH_TOKEN or AUTH_TENANT not set; report tools will return errors");
    }

    let server = DashboardMcpServer::from_config(cli.api_config(), credentials)?;

    match cli.transport {
        TransportKind::Http => {
            tracing::info!("dashboard-mcp starting (http transport)");
            http::serve_http(server, cli.bind_addr()).await?;
        }
        TransportKind::Stdio => {
            tracing::info!("dashboard-mcp starting (stdio transport)");
            let service = server.serve(rmcp::transport::io::stdio()).await?;
            service.waiting().await?;
        }
    }

    Ok(())
}
