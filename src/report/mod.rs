mod api;
mod flatten;
mod model;
mod request;
mod table;
mod wire;

pub use flatten::{RawReport, flatten};
pub use model::{
    DateBound, DateRange, Filter, FilterKind, MatchType, NumericValue, Operation, ReportSpec,
};
pub use request::build_request;
pub use table::{Cell, ColumnValues, ReportColumn, ReportTable};
pub use wire::{
    BetweenFilter, FilterExpression, InListFilter, NamedField, NumericFilter, RunReportRequest,
    StringFilter, WireDateRange, WireFilter, WireNumericValue,
};

use crate::core::{GaClient, GaError};

/// A builder for running a report against one property.
///
/// # Example
///
/// ```no_run
/// # use ga4_report::{Filter, GaClient, MatchType, ReportBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GaClient::default();
/// let table = ReportBuilder::new(&client, "123456789")
///     .dimensions(["pagePath", "pageTitle"])
///     .metrics(["screenPageViews", "activeUsers"])
///     .date_range("2023-02-01", "today")
///     .filter(Filter::string_match("pagePath", "/Page/1", MatchType::Exact, true))
///     .fetch()
///     .await?;
/// println!("{} rows", table.height());
/// # Ok(())
/// # }
/// ```
pub struct ReportBuilder<'a> {
    client: &'a GaClient,
    property_id: String,
    dimensions: Vec<String>,
    metrics: Vec<String>,
    start: String,
    end: String,
    filter: Option<Filter>,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a builder covering the last 28 days up to today.
    pub fn new(client: &'a GaClient, property_id: impl Into<String>) -> Self {
        Self {
            client,
            property_id: property_id.into(),
            dimensions: Vec::new(),
            metrics: Vec::new(),
            start: "28daysAgo".into(),
            end: "today".into(),
            filter: None,
        }
    }

    /// Dimensions to group by, in output column order.
    pub fn dimensions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Metrics to compute, in output column order.
    pub fn metrics<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = names.into_iter().map(Into::into).collect();
        self
    }

    /// Inclusive bounds: `YYYY-MM-DD`, `NdaysAgo`, `yesterday` or `today`.
    pub fn date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Sets the report's single filter, replacing any earlier one.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Validates the collected parameters into an immutable [`ReportSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidArgument`] or [`GaError::InvalidDates`] for unusable parameters.
    pub fn spec(&self) -> Result<ReportSpec, GaError> {
        let range = DateRange::parse(&self.start, &self.end)?;
        let spec = ReportSpec::new(
            self.property_id.clone(),
            self.dimensions.clone(),
            self.metrics.clone(),
            range,
        )?;
        Ok(match &self.filter {
            Some(f) => spec.with_filter(f.clone()),
            None => spec,
        })
    }

    /// Runs the report and returns the flattened table.
    ///
    /// # Errors
    ///
    /// Fails on invalid parameters, on any remote error, or with
    /// [`GaError::Conversion`] if a metric value is not numeric.
    pub async fn fetch(self) -> Result<ReportTable, GaError> {
        let spec = self.spec()?;
        self.client.run_report(&spec).await
    }
}

impl GaClient {
    /// Runs a pre-built report specification.
    ///
    /// # Errors
    ///
    /// See [`ReportBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, spec), err, fields(property = %spec.property_id())))]
    pub async fn run_report(&self, spec: &ReportSpec) -> Result<ReportTable, GaError> {
        api::run_report(self, spec).await
    }

    /// Runs a report and returns the unflattened response, for callers that
    /// want to reshape it themselves.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, spec), err, fields(property = %spec.property_id())))]
    pub async fn run_report_raw(&self, spec: &ReportSpec) -> Result<RawReport, GaError> {
        api::fetch_raw(self, spec).await
    }

    /// Report restricted to the given page paths (the part of the URL between
    /// host and query string, e.g. `/store/contact-us`).
    ///
    /// # Errors
    ///
    /// See [`ReportBuilder::fetch`]; an empty `page_paths` list is rejected.
    #[allow(clippy::too_many_arguments)]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, page_paths, dimensions, metrics), err))]
    pub async fn page_path_report<P, D, M>(
        &self,
        property_id: &str,
        page_paths: P,
        dimensions: D,
        metrics: M,
        case_sensitive: bool,
        start: &str,
        end: &str,
    ) -> Result<ReportTable, GaError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let spec = ReportSpec::new(property_id, dimensions, metrics, DateRange::parse(start, end)?)?
            .with_filter(Filter::in_list("pagePath", page_paths, case_sensitive));
        self.run_report(&spec).await
    }
}
