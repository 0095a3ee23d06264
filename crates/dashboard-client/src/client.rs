//! # Dashboard Report Client
//!
//! Relays validated report requests to the dashboard API. One POST per call,
//! credentials as cookies, response body returned untouched.

use std::time::Duration;

use reqwest::header::COOKIE;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::{Credentials, DashboardApiConfig};
use crate::error::{DashboardError, DashboardResult};
use crate::report::{ReportKind, ReportPayload, ReportQuery};

/// HTTP client for the dashboard report endpoints.
///
/// Holds the pooled `reqwest::Client` plus the immutable config and
/// credentials. Share it behind an `Arc`; calls need only `&self`.
#[derive(Debug)]
pub struct DashboardClient {
    http: reqwest::Client,
    config: DashboardApiConfig,
    credentials: Credentials,
}

impl DashboardClient {
    /// Build a client. Fails only if the TLS backend cannot initialize.
    pub fn new(config: DashboardApiConfig, credentials: Credentials) -> DashboardResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().map_err(DashboardError::from_reqwest)?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &DashboardApiConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Validate `query` and fetch the report.
    ///
    /// Validation failures return before any network I/O.
    pub async fn fetch_report(&self, kind: ReportKind, query: &ReportQuery) -> DashboardResult<Value> {
        let payload = query.validate(kind, &self.credentials)?;
        self.post_report(kind, &payload).await
    }

    /// POST an already-built payload to the report endpoint.
    pub async fn post_report(&self, kind: ReportKind, payload: &ReportPayload) -> DashboardResult<Value> {
        let url = self.config.endpoint(kind);
        let cookie = self.credentials.cookie_header()?;

        debug!(
            report = %kind,
            token = "[REDACTED]",
            tenant = self.credentials.tenant().unwrap_or_default(),
            "Request Cookies"
        );
        debug!(
            report = %kind,
            payload = %serde_json::to_string(payload).unwrap_or_default(),
            "{} Payload",
            kind.label()
        );

        let result = async {
            let response = self
                .http
                .post(url)
                .header(COOKIE, cookie)
                .json(payload)
                .send()
                .await?
                .error_for_status()?;
            response.json::<Value>().await
        }
        .await
        .map_err(DashboardError::from_reqwest);

        match result {
            Ok(body) => {
                debug!(report = %kind, body = %body, "{} Response", kind.label());
                Ok(body)
            }
            Err(e) => {
                error!(report = %kind, kind = e.kind(), error = %e, "{} API request failed", kind.label());
                Err(e)
            }
        }
    }
}
