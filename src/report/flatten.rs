//! Columnar response → row-oriented table.
//!
//! The service returns each row as a tuple of dimension values followed by a
//! tuple of metric values. Concatenating those tuples over all rows gives two
//! flat, row-major vectors; column `i` of either is then every `count`-th
//! element starting at offset `i`.

use crate::core::GaError;
use crate::report::table::{ColumnValues, ReportColumn, ReportTable};
use crate::report::wire::RunReportResponse;

/// A report response reduced to headers plus flat, row-major value vectors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawReport {
    pub dimension_headers: Vec<String>,
    pub metric_headers: Vec<String>,
    /// All dimension values, row after row.
    pub dimension_values: Vec<String>,
    /// All metric values, row after row.
    pub metric_values: Vec<String>,
    /// Total rows matching the query as reported by the service, which may
    /// exceed the rows returned.
    pub row_count: Option<i64>,
}

impl RawReport {
    pub(crate) fn from_response(resp: RunReportResponse) -> Self {
        let mut dimension_values = Vec::new();
        let mut metric_values = Vec::new();
        for row in resp.rows {
            dimension_values.extend(row.dimension_values.into_iter().map(|v| v.value));
            metric_values.extend(row.metric_values.into_iter().map(|v| v.value));
        }
        Self {
            dimension_headers: resp.dimension_headers.into_iter().map(|h| h.name).collect(),
            metric_headers: resp.metric_headers.into_iter().map(|h| h.name).collect(),
            dimension_values,
            metric_values,
            row_count: resp.row_count,
        }
    }
}

/// Every `stride`-th element starting at `offset`.
fn strided<T>(values: &[T], offset: usize, stride: usize) -> impl Iterator<Item = &T> {
    values.iter().skip(offset).step_by(stride)
}

fn parse_metric(column: &str, row: usize, raw: &str) -> Result<f64, GaError> {
    raw.trim().parse::<f64>().map_err(|_| GaError::Conversion {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

/// Reshapes `raw` into a table of `dimension_count` text columns followed by
/// `metric_count` numeric columns, labelled with the response headers.
///
/// # Errors
///
/// - [`GaError::InvalidArgument`] if either count is zero.
/// - [`GaError::Data`] if the headers or value vectors do not fit the counts.
/// - [`GaError::Conversion`] if a metric value is not numeric.
pub fn flatten(
    raw: &RawReport,
    dimension_count: usize,
    metric_count: usize,
) -> Result<ReportTable, GaError> {
    if dimension_count == 0 || metric_count == 0 {
        return Err(GaError::InvalidArgument(format!(
            "flatten needs at least one dimension and one metric, got {dimension_count} and {metric_count}"
        )));
    }
    if raw.dimension_headers.len() != dimension_count {
        return Err(GaError::Data(format!(
            "expected {dimension_count} dimension headers, got {}",
            raw.dimension_headers.len()
        )));
    }
    if raw.metric_headers.len() != metric_count {
        return Err(GaError::Data(format!(
            "expected {metric_count} metric headers, got {}",
            raw.metric_headers.len()
        )));
    }
    if raw.dimension_values.len() % dimension_count != 0 {
        return Err(GaError::Data(format!(
            "{} dimension values do not divide into rows of {dimension_count}",
            raw.dimension_values.len()
        )));
    }
    let rows = raw.dimension_values.len() / dimension_count;
    if raw.metric_values.len() != rows * metric_count {
        return Err(GaError::Data(format!(
            "{rows} rows need {} metric values, got {}",
            rows * metric_count,
            raw.metric_values.len()
        )));
    }

    let mut columns = Vec::with_capacity(dimension_count + metric_count);

    for (i, name) in raw.dimension_headers.iter().enumerate() {
        let values = strided(&raw.dimension_values, i, dimension_count)
            .cloned()
            .collect();
        columns.push(ReportColumn {
            name: name.clone(),
            values: ColumnValues::Text(values),
        });
    }

    for (j, name) in raw.metric_headers.iter().enumerate() {
        let values = strided(&raw.metric_values, j, metric_count)
            .enumerate()
            .map(|(row, v)| parse_metric(name, row, v))
            .collect::<Result<Vec<f64>, _>>()?;
        columns.push(ReportColumn {
            name: name.clone(),
            values: ColumnValues::Numeric(values),
        });
    }

    Ok(ReportTable::from_columns(columns))
}
