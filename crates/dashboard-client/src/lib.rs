//! # Dashboard Client
//!
//! Validates report parameters and relays sales / returns report requests to
//! the KwickMetrics dashboard API.
//!
//! ```no_run
//! use dashboard_client::{Credentials, DashboardApiConfig, DashboardClient, ReportKind, ReportQuery};
//!
//! # async fn example() -> dashboard_client::DashboardResult<()> {
//! let client = DashboardClient::new(DashboardApiConfig::default(), Credentials::from_env())?;
//! let query = ReportQuery::for_kind(ReportKind::Sales).with_currency("EUR");
//! let report = client.fetch_report(ReportKind::Sales, &query).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod date_range;
pub mod error;
pub mod report;

pub use client::DashboardClient;
pub use config::{Credentials, DashboardApiConfig};
pub use date_range::{DateRange, DateRangePreset};
pub use error::{DashboardError, DashboardResult};
pub use report::{ReportKind, ReportPayload, ReportQuery, SALES_CHANNEL_IDS};
