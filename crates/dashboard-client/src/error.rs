//! # Dashboard Error Types
//!
//! Every failure a report request can hit, from parameter validation through
//! the upstream round-trip. The `Display` text is what tool callers see.

use thiserror::Error;

/// Dashboard operation result type
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error kinds for report requests
#[derive(Debug, Error)]
pub enum DashboardError {
    /// `AUTH_TOKEN` or `AUTH_TENANT` was not set when the call was made.
    #[error("Missing AUTH_TOKEN or AUTH_TENANT in environment variables.")]
    Configuration,

    /// Date-range token outside the recognized set.
    #[error("Invalid '{field}'. Valid options are: {}", .valid.join(", "))]
    InvalidSelector {
        field: String,
        token: String,
        valid: Vec<&'static str>,
    },

    /// `custom` range without both bounds.
    #[error(
        "Both 'date_from' and 'date_to' must be provided for custom {}date range.",
        range_subject(.field)
    )]
    MissingRange { field: String },

    /// Upstream answered with a 4xx/5xx status.
    #[error("{message}")]
    RemoteService { status: u16, message: String },

    /// Upstream could not be reached (connect, DNS, TLS, timeout).
    #[error("{0}")]
    Transport(String),

    /// Upstream answered 2xx but the body was not JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidResponse(String),
}

impl DashboardError {
    /// Create an invalid selector error listing every accepted token
    pub fn invalid_selector(
        field: impl Into<String>,
        token: impl Into<String>,
        valid: Vec<&'static str>,
    ) -> Self {
        Self::InvalidSelector {
            field: field.into(),
            token: token.into(),
            valid,
        }
    }

    /// Create a missing range error for a `custom` selector
    pub fn missing_range(field: impl Into<String>) -> Self {
        Self::MissingRange {
            field: field.into(),
        }
    }

    /// Create a remote service error from an HTTP status and description
    pub fn remote_service(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteService {
            status,
            message: message.into(),
        }
    }

    /// Classify a reqwest failure.
    ///
    /// Status errors (from `error_for_status`) become `RemoteService`; decode
    /// errors become `InvalidResponse`; everything else is a transport failure.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::remote_service(status.as_u16(), err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Stable snake_case code for logs and assertions.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration_error",
            Self::InvalidSelector { .. } => "invalid_selector",
            Self::MissingRange { .. } => "missing_range",
            Self::RemoteService { .. } => "remote_service_error",
            Self::Transport(_) => "transport_error",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }

    /// True for failures raised before any network I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Configuration | Self::InvalidSelector { .. } | Self::MissingRange { .. }
        )
    }
}

/// Qualifier in the missing-range message; the returns report names itself.
fn range_subject(field: &str) -> &'static str {
    match field {
        "return_date" => "return ",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let err = DashboardError::Configuration;
        assert_eq!(
            err.to_string(),
            "Missing AUTH_TOKEN or AUTH_TENANT in environment variables."
        );
    }

    #[test]
    fn test_display_invalid_selector_lists_valid_tokens() {
        let err = DashboardError::invalid_selector("purchase_date", "next_week", vec!["a", "b"]);
        assert_eq!(
            err.to_string(),
            "Invalid 'purchase_date'. Valid options are: a, b"
        );
    }

    #[test]
    fn test_display_missing_range() {
        let err = DashboardError::missing_range("purchase_date");
        assert_eq!(
            err.to_string(),
            "Both 'date_from' and 'date_to' must be provided for custom date range."
        );
    }

    #[test]
    fn test_display_missing_range_for_returns() {
        let err = DashboardError::missing_range("return_date");
        assert_eq!(
            err.to_string(),
            "Both 'date_from' and 'date_to' must be provided for custom return date range."
        );
    }

    #[test]
    fn test_remote_service_constructor() {
        let err = DashboardError::remote_service(502, "bad gateway");
        match err {
            DashboardError::RemoteService { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            _ => panic!("Expected RemoteService variant"),
        }
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(DashboardError::Configuration.kind(), "configuration_error");
        assert_eq!(
            DashboardError::missing_range("purchase_date").kind(),
            "missing_range"
        );
        assert_eq!(
            DashboardError::Transport("refused".into()).kind(),
            "transport_error"
        );
        assert_eq!(
            DashboardError::remote_service(500, "boom").kind(),
            "remote_service_error"
        );
    }

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(DashboardError::Configuration.is_validation());
        assert!(DashboardError::missing_range("x").is_validation());
        assert!(!DashboardError::Transport("down".into()).is_validation());
        assert!(!DashboardError::remote_service(404, "nope").is_validation());
    }
}
