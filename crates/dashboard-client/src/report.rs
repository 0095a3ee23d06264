//! Report kinds, query validation, and outbound payload shape.
//!
//! Sales and returns reports share one request shape; a [`ReportKind`]
//! supplies the parts that differ (filter key, default window, endpoint).

use std::fmt;

use serde::Serialize;

use crate::config::Credentials;
use crate::date_range::{DateRange, DateRangePreset};
use crate::error::DashboardResult;

/// Filter key for the channel restriction.
pub const SALES_CHANNEL_KEY: &str = "sales_channel";

/// Sales channels included in every report. Order is significant upstream.
pub const SALES_CHANNEL_IDS: [u32; 19] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17, 18, 19, 23, 26,
];

/// Default currency when the caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// The dashboard reports exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Orders, revenue and profit (`sales_overview`).
    Sales,
    /// Returns and refunds (`return_overview`).
    Returns,
}

impl ReportKind {
    /// Filter key carrying the date range.
    pub fn date_filter_key(&self) -> &'static str {
        match self {
            Self::Sales => "purchase_date",
            Self::Returns => "return_date",
        }
    }

    /// Window used when the caller omits the date selector.
    pub fn default_range(&self) -> DateRangePreset {
        match self {
            Self::Sales => DateRangePreset::LastYear,
            Self::Returns => DateRangePreset::LastSixMonths,
        }
    }

    /// Name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales Overview",
            Self::Returns => "Return Overview",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sales => write!(f, "sales"),
            Self::Returns => write!(f, "returns"),
        }
    }
}

/// Raw report parameters as a tool caller supplies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub date_token: String,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// ISO currency code, passed through unvalidated.
    pub currency: String,
    pub is_walmart: bool,
}

impl ReportQuery {
    /// Query with the report's default window, USD, all channels.
    pub fn for_kind(kind: ReportKind) -> Self {
        Self {
            date_token: kind.default_range().as_str().to_string(),
            date_from: None,
            date_to: None,
            currency: DEFAULT_CURRENCY.to_string(),
            is_walmart: false,
        }
    }

    #[must_use]
    pub fn with_date_token(mut self, token: impl Into<String>) -> Self {
        self.date_token = token.into();
        self
    }

    #[must_use]
    pub fn with_custom_range(
        mut self,
        date_from: impl Into<String>,
        date_to: impl Into<String>,
    ) -> Self {
        self.date_token = crate::date_range::CUSTOM_TOKEN.to_string();
        self.date_from = Some(date_from.into());
        self.date_to = Some(date_to.into());
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_walmart(mut self, is_walmart: bool) -> Self {
        self.is_walmart = is_walmart;
        self
    }

    /// Validate against the credentials and build the outbound payload.
    ///
    /// Credentials are checked before the date selector so a misconfigured
    /// process fails identically for every call.
    pub fn validate(
        &self,
        kind: ReportKind,
        credentials: &Credentials,
    ) -> DashboardResult<ReportPayload> {
        credentials.require()?;
        let range = DateRange::resolve(
            kind.date_filter_key(),
            &self.date_token,
            self.date_from.as_deref(),
            self.date_to.as_deref(),
        )?;
        Ok(ReportPayload::new(kind, range, &self.currency, self.is_walmart))
    }
}

/// JSON body POSTed to a report endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub filters: Vec<ReportFilter>,
    pub currency: String,
    pub is_walmart: bool,
}

/// One `{key, value}` entry of the payload's filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFilter {
    pub key: &'static str,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    DateRange(DateRange),
    Channels(&'static [u32]),
}

impl ReportPayload {
    /// Payload with the date filter first and the fixed channel filter second.
    pub fn new(kind: ReportKind, range: DateRange, currency: &str, is_walmart: bool) -> Self {
        Self {
            filters: vec![
                ReportFilter {
                    key: kind.date_filter_key(),
                    value: FilterValue::DateRange(range),
                },
                ReportFilter {
                    key: SALES_CHANNEL_KEY,
                    value: FilterValue::Channels(&SALES_CHANNEL_IDS),
                },
            ],
            currency: currency.to_string(),
            is_walmart,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DashboardError;

    fn creds() -> Credentials {
        Credentials::new("tok", "tenant")
    }

    #[test]
    fn test_defaults_per_kind() {
        let sales = ReportQuery::for_kind(ReportKind::Sales);
        assert_eq!(sales.date_token, "last_year");
        assert_eq!(sales.currency, "USD");
        assert!(!sales.is_walmart);

        let returns = ReportQuery::for_kind(ReportKind::Returns);
        assert_eq!(returns.date_token, "last_6_months");
    }

    #[test]
    fn test_sales_payload_shape() {
        let payload = ReportQuery::for_kind(ReportKind::Sales)
            .with_currency("EUR")
            .with_walmart(true)
            .validate(ReportKind::Sales, &creds())
            .unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "filters": [
                    {"key": "purchase_date", "value": "last_year"},
                    {"key": "sales_channel", "value": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17, 18, 19, 23, 26]}
                ],
                "currency": "EUR",
                "is_walmart": true
            })
        );
    }

    #[test]
    fn test_returns_payload_uses_return_date_key() {
        let payload = ReportQuery::for_kind(ReportKind::Returns)
            .with_custom_range("2024-01-01", "2024-06-30")
            .validate(ReportKind::Returns, &creds())
            .unwrap();

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["filters"][0]["key"], "return_date");
        assert_eq!(
            value["filters"][0]["value"],
            json!({"date_from": "2024-01-01", "date_to": "2024-06-30"})
        );
    }

    #[test]
    fn test_channel_filter_identical_across_kinds() {
        let sales = ReportPayload::new(
            ReportKind::Sales,
            DateRange::Preset(DateRangePreset::Today),
            "USD",
            false,
        );
        let returns = ReportPayload::new(
            ReportKind::Returns,
            DateRange::Preset(DateRangePreset::Today),
            "USD",
            false,
        );
        assert_eq!(sales.filters.len(), 2);
        assert_eq!(sales.filters[1], returns.filters[1]);
        assert_eq!(
            sales.filters[1].value,
            FilterValue::Channels(&SALES_CHANNEL_IDS)
        );
    }

    #[test]
    fn test_credentials_checked_before_selector() {
        let err = ReportQuery::for_kind(ReportKind::Sales)
            .with_date_token("next_week")
            .validate(ReportKind::Sales, &Credentials::default())
            .unwrap_err();
        assert!(matches!(err, DashboardError::Configuration));
    }

    #[test]
    fn test_invalid_selector_names_the_report_field() {
        let err = ReportQuery::for_kind(ReportKind::Returns)
            .with_date_token("next_week")
            .validate(ReportKind::Returns, &creds())
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid 'return_date'."));
    }

    #[test]
    fn test_currency_passed_through_unvalidated() {
        let payload = ReportQuery::for_kind(ReportKind::Sales)
            .with_currency("not-a-currency")
            .validate(ReportKind::Sales, &creds())
            .unwrap();
        assert_eq!(payload.currency, "not-a-currency");
    }
}
