//! Shared helper functions for MCP tool implementations.

use dashboard_client::DashboardResult;
use serde_json::Value;

/// Build the `{"error": "<message>"}` object every tool failure returns.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Render a report outcome as tool output text.
///
/// Successful bodies are re-serialized as-is; any error becomes
/// [`error_json`] with the error's display text.
pub fn report_json(result: DashboardResult<Value>) -> String {
    match result {
        Ok(body) => serde_json::to_string_pretty(&body)
            .unwrap_or_else(|e| error_json(&format!("serialization error: {e}"))),
        Err(e) => error_json(&e.to_string()),
    }
}
