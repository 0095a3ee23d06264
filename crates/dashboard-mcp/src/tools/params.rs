//! Parameter structs for the report tools.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

use dashboard_client::report::DEFAULT_CURRENCY;
use dashboard_client::{ReportKind, ReportQuery};

use super::serde_helpers;

// ── sales_overview ──

/// Parameters for the `sales_overview` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SalesOverviewParams {
    /// Predefined reporting window, or "custom" with `date_from`/`date_to`.
    #[schemars(
        description = "Predefined time period: today, yesterday, last_seven_days, last_thirty_days, this_week, last_week, this_month, last_month, last_6_months, last_12_months, this_year, last_year, or custom (requires date_from and date_to). Defaults to last_year."
    )]
    #[serde(default = "default_purchase_date", deserialize_with = "purchase_date_or_default")]
    pub purchase_date: String,
    /// ISO currency code.
    #[schemars(description = "ISO currency code, e.g. USD, INR, EUR. Defaults to USD.")]
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,
    /// Restrict to Walmart sales.
    #[schemars(description = "Set to true for Walmart-only sales data. Defaults to false.")]
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub is_walmart: bool,
    /// Custom range start.
    #[schemars(description = "Start date YYYY-MM-DD (only used when purchase_date is custom)")]
    pub date_from: Option<String>,
    /// Custom range end.
    #[schemars(description = "End date YYYY-MM-DD (only used when purchase_date is custom)")]
    pub date_to: Option<String>,
}

impl Default for SalesOverviewParams {
    fn default() -> Self {
        Self {
            purchase_date: default_purchase_date(),
            currency: default_currency(),
            is_walmart: false,
            date_from: None,
            date_to: None,
        }
    }
}

impl From<SalesOverviewParams> for ReportQuery {
    fn from(p: SalesOverviewParams) -> Self {
        ReportQuery {
            date_token: p.purchase_date,
            date_from: p.date_from,
            date_to: p.date_to,
            currency: p.currency,
            is_walmart: p.is_walmart,
        }
    }
}

// ── return_overview ──

/// Parameters for the `return_overview` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReturnOverviewParams {
    /// Predefined reporting window, or "custom" with `date_from`/`date_to`.
    #[schemars(
        description = "Predefined time period: today, yesterday, last_seven_days, last_thirty_days, this_week, last_week, this_month, last_month, last_6_months, last_12_months, this_year, last_year, or custom (requires date_from and date_to). Defaults to last_6_months."
    )]
    #[serde(default = "default_return_date", deserialize_with = "return_date_or_default")]
    pub return_date: String,
    /// ISO currency code.
    #[schemars(description = "ISO currency code, e.g. USD, INR, EUR. Defaults to USD.")]
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,
    /// Restrict to Walmart returns.
    #[schemars(description = "Set to true for Walmart-only return data. Defaults to false.")]
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub is_walmart: bool,
    /// Custom range start.
    #[schemars(description = "Start date YYYY-MM-DD (only used when return_date is custom)")]
    pub date_from: Option<String>,
    /// Custom range end.
    #[schemars(description = "End date YYYY-MM-DD (only used when return_date is custom)")]
    pub date_to: Option<String>,
}

impl Default for ReturnOverviewParams {
    fn default() -> Self {
        Self {
            return_date: default_return_date(),
            currency: default_currency(),
            is_walmart: false,
            date_from: None,
            date_to: None,
        }
    }
}

impl From<ReturnOverviewParams> for ReportQuery {
    fn from(p: ReturnOverviewParams) -> Self {
        ReportQuery {
            date_token: p.return_date,
            date_from: p.date_from,
            date_to: p.date_to,
            currency: p.currency,
            is_walmart: p.is_walmart,
        }
    }
}

fn default_purchase_date() -> String {
    ReportKind::Sales.default_range().as_str().to_string()
}

fn default_return_date() -> String {
    ReportKind::Returns.default_range().as_str().to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn purchase_date_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    serde_helpers::string_or(d, default_purchase_date)
}

fn return_date_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    serde_helpers::string_or(d, default_return_date)
}

fn currency_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    serde_helpers::string_or(d, default_currency)
}
