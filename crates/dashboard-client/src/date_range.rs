//! Date-range selectors accepted by the dashboard report endpoints.
//!
//! A selector is either a named preset (`last_year`, `this_week`, ...) or the
//! `custom` token plus an explicit `date_from`/`date_to` pair. Resolution turns
//! the raw tool input into a [`DateRange`] ready to drop into a report filter.

use std::fmt;

use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// Token selecting an explicit start/end pair instead of a preset.
pub const CUSTOM_TOKEN: &str = "custom";

/// Display label for [`CUSTOM_TOKEN`].
pub const CUSTOM_LABEL: &str = "Custom Range";

/// Named reporting windows understood by the dashboard API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateRangePreset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "yesterday")]
    Yesterday,
    #[serde(rename = "last_seven_days")]
    LastSevenDays,
    #[serde(rename = "last_thirty_days")]
    LastThirtyDays,
    #[serde(rename = "this_week")]
    ThisWeek,
    #[serde(rename = "last_week")]
    LastWeek,
    #[serde(rename = "this_month")]
    ThisMonth,
    #[serde(rename = "last_month")]
    LastMonth,
    #[serde(rename = "last_6_months")]
    LastSixMonths,
    #[serde(rename = "last_12_months")]
    LastTwelveMonths,
    #[serde(rename = "this_year")]
    ThisYear,
    #[serde(rename = "last_year")]
    LastYear,
}

impl DateRangePreset {
    /// Every preset, in the order the dashboard lists them.
    pub const ALL: [DateRangePreset; 12] = [
        Self::Today,
        Self::Yesterday,
        Self::LastSevenDays,
        Self::LastThirtyDays,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::LastSixMonths,
        Self::LastTwelveMonths,
        Self::ThisYear,
        Self::LastYear,
    ];

    /// Wire token for this preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::LastSevenDays => "last_seven_days",
            Self::LastThirtyDays => "last_thirty_days",
            Self::ThisWeek => "this_week",
            Self::LastWeek => "last_week",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::LastSixMonths => "last_6_months",
            Self::LastTwelveMonths => "last_12_months",
            Self::ThisYear => "this_year",
            Self::LastYear => "last_year",
        }
    }

    /// Dashboard display label, e.g. `Last 7 Days (7D)`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today (TD)",
            Self::Yesterday => "Yesterday (YD)",
            Self::LastSevenDays => "Last 7 Days (7D)",
            Self::LastThirtyDays => "Last 30 Days (30D)",
            Self::ThisWeek => "This Week (TW)",
            Self::LastWeek => "Last Week (LW)",
            Self::ThisMonth => "This Month (TM)",
            Self::LastMonth => "Last Month (LM)",
            Self::LastSixMonths => "Last 6 Months (6M)",
            Self::LastTwelveMonths => "Last 12 Months (12M)",
            Self::ThisYear => "Year To Date (YTD)",
            Self::LastYear => "Last Year (LYR)",
        }
    }

    /// Look up a preset by its wire token. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == token)
    }

    /// All accepted selector tokens: the presets followed by `custom`.
    pub fn valid_tokens() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(DateRangePreset::as_str)
            .chain(std::iter::once(CUSTOM_TOKEN))
            .collect()
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized date range, serialized as the filter `value`.
///
/// Presets serialize as the bare token; custom ranges as
/// `{"date_from": ..., "date_to": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateRange {
    Preset(DateRangePreset),
    Custom { date_from: String, date_to: String },
}

impl DateRange {
    /// Resolve a raw selector into a normalized range.
    ///
    /// `field` names the tool parameter (`purchase_date`, `return_date`) and
    /// only shapes the error message. Dates are ignored unless `token` is
    /// `custom`; when it is, both must be present and non-empty. Date strings
    /// are passed through without calendar validation.
    pub fn resolve(
        field: &str,
        token: &str,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> DashboardResult<Self> {
        if token == CUSTOM_TOKEN {
            return match (non_empty(date_from), non_empty(date_to)) {
                (Some(from), Some(to)) => Ok(Self::Custom {
                    date_from: from.to_string(),
                    date_to: to.to_string(),
                }),
                _ => Err(DashboardError::missing_range(field)),
            };
        }

        DateRangePreset::from_token(token)
            .map(Self::Preset)
            .ok_or_else(|| {
                DashboardError::invalid_selector(field, token, DateRangePreset::valid_tokens())
            })
    }

    /// True for an explicit start/end pair.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_resolves_to_itself() {
        for preset in DateRangePreset::ALL {
            let range = DateRange::resolve("purchase_date", preset.as_str(), None, None).unwrap();
            assert_eq!(range, DateRange::Preset(preset));
            assert_eq!(
                serde_json::to_value(&range).unwrap(),
                serde_json::json!(preset.as_str())
            );
        }
    }

    #[test]
    fn test_presets_ignore_explicit_dates() {
        let range = DateRange::resolve(
            "purchase_date",
            "last_month",
            Some("2024-01-01"),
            Some("2024-06-30"),
        )
        .unwrap();
        assert_eq!(range, DateRange::Preset(DateRangePreset::LastMonth));
    }

    #[test]
    fn test_unknown_token_lists_every_valid_option() {
        let err = DateRange::resolve("purchase_date", "next_week", None, None).unwrap_err();
        match &err {
            DashboardError::InvalidSelector { field, token, valid } => {
                assert_eq!(field, "purchase_date");
                assert_eq!(token, "next_week");
                assert_eq!(valid.len(), 13);
                assert_eq!(valid.last(), Some(&"custom"));
            }
            other => panic!("Expected InvalidSelector, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid 'purchase_date'. Valid options are: today, yesterday, last_seven_days, \
             last_thirty_days, this_week, last_week, this_month, last_month, last_6_months, \
             last_12_months, this_year, last_year, custom"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let err = DateRange::resolve("return_date", "Last_Year", None, None).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSelector { .. }));
    }

    #[test]
    fn test_custom_range_with_both_bounds() {
        let range = DateRange::resolve(
            "purchase_date",
            "custom",
            Some("2024-01-01"),
            Some("2024-06-30"),
        )
        .unwrap();
        assert!(range.is_custom());
        assert_eq!(
            range,
            DateRange::Custom {
                date_from: "2024-01-01".to_string(),
                date_to: "2024-06-30".to_string(),
            }
        );
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            serde_json::json!({"date_from": "2024-01-01", "date_to": "2024-06-30"})
        );
    }

    #[test]
    fn test_custom_range_missing_or_empty_bound() {
        let cases = [
            (None, Some("2024-06-30")),
            (Some("2024-01-01"), None),
            (Some(""), Some("2024-06-30")),
            (Some("2024-01-01"), Some("")),
            (None, None),
        ];
        for (from, to) in cases {
            let err = DateRange::resolve("return_date", "custom", from, to).unwrap_err();
            assert!(
                matches!(err, DashboardError::MissingRange { ref field } if field == "return_date"),
                "from={from:?} to={to:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_labels_match_dashboard() {
        assert_eq!(DateRangePreset::ThisYear.label(), "Year To Date (YTD)");
        assert_eq!(DateRangePreset::LastTwelveMonths.label(), "Last 12 Months (12M)");
        assert_eq!(DateRangePreset::LastYear.to_string(), "last_year");
    }
}
