//! Client configuration: upstream endpoints, request timeout, and credentials.
//!
//! Both values are built once at startup and handed to
//! [`DashboardClient::new`](crate::DashboardClient::new); nothing here is read
//! per call.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{DashboardError, DashboardResult};
use crate::report::ReportKind;

/// Environment variable holding the dashboard auth token.
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

/// Environment variable holding the tenant identifier.
pub const AUTH_TENANT_ENV: &str = "AUTH_TENANT";

/// Default sales detail report endpoint.
pub const DEFAULT_SALES_URL: &str = "https://s1-account-api.dev.kwickmetrics.com/api/v1/account/mallow-int-test/reports/dashboard/details";

/// Default returns detail report endpoint.
pub const DEFAULT_RETURNS_URL: &str = "https://s1-account-api.dev.kwickmetrics.com/api/v2/account/mallow-int-test/reports/dashboard/returns/details";

/// Upstream endpoints and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardApiConfig {
    pub sales_url: String,
    pub returns_url: String,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout_ms: Option<u64>,
}

impl Default for DashboardApiConfig {
    fn default() -> Self {
        Self {
            sales_url: DEFAULT_SALES_URL.to_string(),
            returns_url: DEFAULT_RETURNS_URL.to_string(),
            timeout_ms: None,
        }
    }
}

impl DashboardApiConfig {
    /// Config pointing both reports at explicit URLs.
    pub fn with_endpoints(sales_url: impl Into<String>, returns_url: impl Into<String>) -> Self {
        Self {
            sales_url: sales_url.into(),
            returns_url: returns_url.into(),
            timeout_ms: None,
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Endpoint serving the given report.
    pub fn endpoint(&self, kind: ReportKind) -> &str {
        match kind {
            ReportKind::Sales => &self.sales_url,
            ReportKind::Returns => &self.returns_url,
        }
    }
}

/// Auth token and tenant id sent as cookies on every report request.
///
/// Either value may be absent; that is not an error until a report is
/// requested, at which point [`Credentials::require`] fails with
/// [`DashboardError::Configuration`].
#[derive(Debug, Default)]
pub struct Credentials {
    token: Option<SecretString>,
    tenant: Option<String>,
}

impl Credentials {
    /// Credentials with both values present.
    pub fn new(token: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self::from_parts(Some(token.into()), Some(tenant.into()))
    }

    /// Credentials from optional parts; empty strings count as missing.
    pub fn from_parts(token: Option<String>, tenant: Option<String>) -> Self {
        Self {
            token: token
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            tenant: tenant.filter(|t| !t.is_empty()),
        }
    }

    /// Read `AUTH_TOKEN` and `AUTH_TENANT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var(AUTH_TOKEN_ENV).ok(),
            std::env::var(AUTH_TENANT_ENV).ok(),
        )
    }

    /// True when both token and tenant are set.
    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.tenant.is_some()
    }

    /// Tenant id, if configured.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    /// Borrow both values or fail with a configuration error.
    pub fn require(&self) -> DashboardResult<(&SecretString, &str)> {
        match (&self.token, &self.tenant) {
            (Some(token), Some(tenant)) => Ok((token, tenant.as_str())),
            _ => Err(DashboardError::Configuration),
        }
    }

    /// `Cookie` header value carrying both credentials.
    pub(crate) fn cookie_header(&self) -> DashboardResult<String> {
        let (token, tenant) = self.require()?;
        Ok(format!("token={}; X-Tenant={}", token.expose_secret(), tenant))
    }
}
