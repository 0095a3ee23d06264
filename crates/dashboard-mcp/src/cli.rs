//! Command-line and environment configuration for the `dashboard-mcp` binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use dashboard_client::config::{DEFAULT_RETURNS_URL, DEFAULT_SALES_URL};
use dashboard_client::DashboardApiConfig;

use crate::logging::DEFAULT_LOG_FILE;

/// Default port for the HTTP transport.
pub const DEFAULT_PORT: u16 = 8000;

/// MCP transport to serve on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// Streamable HTTP at `/mcp`
    Http,
    /// JSON-RPC over stdin/stdout
    Stdio,
}

/// KwickMetrics dashboard reports as MCP tools.
///
/// Credentials come from AUTH_TOKEN and AUTH_TENANT; a `.env` file in the
/// working directory is loaded first when present.
#[derive(Debug, Parser)]
#[command(name = "dashboard-mcp", version, about)]
pub struct Cli {
    /// Transport to serve the MCP protocol on
    #[arg(long, env = "DASHBOARD_MCP_TRANSPORT", value_enum, default_value_t = TransportKind::Http)]
    pub transport: TransportKind,

    /// Interface to bind (HTTP transport)
    #[arg(long, env = "DASHBOARD_MCP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind (HTTP transport)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Debug log file capturing request and response bodies
    #[arg(long, env = "DASHBOARD_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable the debug log file
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Per-request timeout for dashboard API calls, in milliseconds
    #[arg(long, env = "DASHBOARD_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// Sales detail report endpoint
    #[arg(long, env = "DASHBOARD_SALES_URL", default_value = DEFAULT_SALES_URL)]
    pub sales_url: String,

    /// Returns detail report endpoint
    #[arg(long, env = "DASHBOARD_RETURNS_URL", default_value = DEFAULT_RETURNS_URL)]
    pub returns_url: String,
}

impl Cli {
    /// Upstream configuration derived from the flags.
    pub fn api_config(&self) -> DashboardApiConfig {
        DashboardApiConfig {
            sales_url: self.sales_url.clone(),
            returns_url: self.returns_url.clone(),
            timeout_ms: self.request_timeout_ms,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log file path, unless disabled.
    pub fn log_file(&self) -> Option<&Path> {
        (!self.no_log_file).then_some(self.log_file.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "dashboard-mcp",
            "--transport",
            "stdio",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--request-timeout-ms",
            "1500",
            "--sales-url",
            "http://localhost:1/sales",
            "--returns-url",
            "http://localhost:1/returns",
            "--no-log-file",
        ])
        .unwrap();

        assert_eq!(cli.transport, TransportKind::Stdio);
        assert_eq!(cli.bind_addr(), "127.0.0.1:9100".parse().unwrap());
        assert!(cli.log_file().is_none());

        let config = cli.api_config();
        assert_eq!(config.sales_url, "http://localhost:1/sales");
        assert_eq!(config.returns_url, "http://localhost:1/returns");
        assert_eq!(config.timeout_ms, Some(1500));
    }

    #[test]
    fn test_log_file_enabled_by_default() {
        let cli = Cli::try_parse_from(["dashboard-mcp", "--log-file", "logs/debug.log"]).unwrap();
        assert_eq!(cli.log_file(), Some(Path::new("logs/debug.log")));
    }

    #[test]
    fn test_rejects_unknown_transport() {
        assert!(Cli::try_parse_from(["dashboard-mcp", "--transport", "websocket"]).is_err());
    }
}
