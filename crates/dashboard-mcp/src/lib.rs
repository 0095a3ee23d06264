//! Dashboard MCP Server library.
//!
//! Provides the [`DashboardMcpServer`](server::DashboardMcpServer) handler, its
//! HTTP transport, and tool parameter types. Used by the `dashboard-mcp`
//! binary and available for integration testing.

pub mod cli;
pub mod http;
pub mod logging;
pub mod server;
pub mod tools;
