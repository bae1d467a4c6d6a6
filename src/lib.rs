//! ga4-report: ergonomic Google Analytics 4 reporting client.
//!
//! Build a report from dimensions, metrics, a date range and at most one
//! filter, run it through the Analytics Data API, and get the result back as a
//! table with text dimension columns and numeric metric columns.
//!
//! ```no_run
//! # use ga4_report::{GaClient, ReportBuilder};
//! # #[tokio::main]
//! # async fn main() -> Result<(), ga4_report::GaError> {
//! let client = GaClient::builder()
//!     .service_account_file("credentials.json")
//!     .build()?;
//!
//! let table = ReportBuilder::new(&client, "123456789")
//!     .dimensions(["pagePath"])
//!     .metrics(["screenPageViews"])
//!     .date_range("7daysAgo", "today")
//!     .fetch()
//!     .await?;
//!
//! for row in table.rows() {
//!     println!("{row:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod report;

pub use crate::core::{Credentials, GaClient, GaClientBuilder, GaError};
pub use report::{
    Cell, ColumnValues, DateBound, DateRange, Filter, FilterKind, MatchType, NumericValue,
    Operation, RawReport, ReportBuilder, ReportColumn, ReportSpec, ReportTable, RunReportRequest,
    build_request, flatten,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
