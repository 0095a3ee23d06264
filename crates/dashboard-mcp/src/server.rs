//! MCP ServerHandler implementation for the dashboard reports.
//!
//! **Report Tools (read-only, require AUTH_TOKEN / AUTH_TENANT)**
//! - `sales_overview`: Orders, units, revenue, profit and margin for a period
//! - `return_overview`: Returns, return value/rate and refunds for a period
//!
//! Every tool answers with JSON text: the dashboard body on success, or
//! `{"error": "..."}` on any failure. Tool failures are never protocol errors.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use tracing::{info, warn};

use dashboard_client::date_range::{CUSTOM_LABEL, CUSTOM_TOKEN};
use dashboard_client::{
    Credentials, DashboardApiConfig, DashboardClient, DashboardResult, DateRangePreset,
    ReportKind, ReportQuery,
};

use crate::tools::*;

/// Dashboard MCP server handler.
///
/// Cheap to clone: the HTTP transport builds one handler per session and
/// they all share the same [`DashboardClient`].
#[derive(Debug, Clone)]
pub struct DashboardMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<DashboardClient>,
}

impl DashboardMcpServer {
    /// Create a server around an existing client.
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    /// Build the client from config + credentials and wrap it.
    pub fn from_config(
        config: DashboardApiConfig,
        credentials: Credentials,
    ) -> DashboardResult<Self> {
        Ok(Self::new(Arc::new(DashboardClient::new(config, credentials)?)))
    }

    /// Get a reference to the shared dashboard client.
    pub fn client(&self) -> &Arc<DashboardClient> {
        &self.client
    }

    async fn run_report(&self, kind: ReportKind, query: ReportQuery) -> String {
        info!(
            report = %kind,
            date = %query.date_token,
            currency = %query.currency,
            is_walmart = query.is_walmart,
            "Report requested"
        );
        let result = self.client.fetch_report(kind, &query).await;
        if let Err(e) = &result {
            if e.is_validation() {
                warn!(report = %kind, kind = e.kind(), error = %e, "Report request rejected");
            }
        }
        report_json(result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DashboardMcpServer {
    fn get_info(&self) -> ServerInfo {
        let periods = DateRangePreset::ALL
            .iter()
            .map(|p| format!("{} ({})", p.as_str(), p.label()))
            .collect::<Vec<_>>()
            .join(", ");
        let instructions = format!(
            "Dashboard exposes KwickMetrics sales and returns reports.\n\
             sales_overview: orders, units, revenue, net profit and profit margin, each compared \
             to the previous period.\n\
             return_overview: returns, return value and rate, refund units, amount and percentage, \
             each compared to the previous period.\n\
             Periods: {periods}, or {CUSTOM_TOKEN} ({CUSTOM_LABEL}) with date_from and date_to \
             (YYYY-MM-DD).\n\
             Map the user's question to the period (or explicit dates), an ISO currency code \
             (default USD) and is_walmart (default false)."
        );

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dashboard-mcp".to_string(),
                title: Some("Dashboard MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing KwickMetrics dashboard sales and returns reports"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[tool_router(router = tool_router)]
impl DashboardMcpServer {
    /// Sales performance summary for a period, currency and channel.
    #[tool(
        name = "sales_overview",
        description = "Retrieve a detailed summary of sales performance from the KwickMetrics dashboard for a time range, currency, and channel (Walmart or not). Returns total_orders, total_units, total_amount, total_net_profit, total_profit_margin and period, each with a comparison to the previous period and % change. Use purchase_date for a preset period, or purchase_date=\"custom\" with date_from and date_to (YYYY-MM-DD)."
    )]
    pub async fn sales_overview(
        &self,
        Parameters(params): Parameters<SalesOverviewParams>,
    ) -> String {
        self.run_report(ReportKind::Sales, params.into()).await
    }

    /// Returns and refunds summary for a period, currency and channel.
    #[tool(
        name = "return_overview",
        description = "Retrieve a detailed summary of return performance from the KwickMetrics dashboard for a time range, currency, and channel (Walmart or not). Returns total_returns, return_value, return_rate, refund_units, refund_amount, refund_percentage and period, each with a comparison to the previous period and % change. Use return_date for a preset period, or return_date=\"custom\" with date_from and date_to (YYYY-MM-DD)."
    )]
    pub async fn return_overview(
        &self,
        Parameters(params): Parameters<ReturnOverviewParams>,
    ) -> String {
        self.run_report(ReportKind::Returns, params.into()).await
    }
}
