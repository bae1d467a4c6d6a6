use crate::core::GaError;
use crate::report::model::{Filter, NumericValue, ReportSpec};
use crate::report::wire::{
    BetweenFilter, FilterExpression, InListFilter, NamedField, NumericFilter, RunReportRequest,
    StringFilter, WireDateRange, WireFilter, WireNumericValue,
};

/// Translates a report specification into the `runReport` request body.
///
/// Pure: nothing is sent. When the spec carries no filter the request has no
/// `dimension_filter` at all, which the service treats differently from an
/// empty filter expression.
///
/// # Errors
///
/// Returns [`GaError::InvalidArgument`] if the filter is unusable on the wire
/// (an empty field name, or an empty `InList` value set).
pub fn build_request(spec: &ReportSpec) -> Result<RunReportRequest, GaError> {
    let range = spec.date_range();
    let dimension_filter = spec.filter().map(build_filter).transpose()?;

    Ok(RunReportRequest {
        property: format!("properties/{}", spec.property_id()),
        dimensions: named(spec.dimensions()),
        metrics: named(spec.metrics()),
        date_ranges: vec![WireDateRange {
            start_date: range.start().to_string(),
            end_date: range.end().to_string(),
        }],
        dimension_filter,
    })
}

fn named(names: &[String]) -> Vec<NamedField> {
    names
        .iter()
        .map(|name| NamedField { name: name.clone() })
        .collect()
}

fn build_filter(filter: &Filter) -> Result<FilterExpression, GaError> {
    if filter.field().trim().is_empty() {
        return Err(GaError::InvalidArgument(format!(
            "{} has an empty field name",
            filter.kind()
        )));
    }

    let mut wire = WireFilter {
        field_name: filter.field().to_string(),
        string_filter: None,
        in_list_filter: None,
        numeric_filter: None,
        between_filter: None,
    };

    match filter {
        Filter::StringMatch {
            value,
            match_type,
            case_sensitive,
            ..
        } => {
            wire.string_filter = Some(StringFilter {
                match_type: *match_type,
                value: value.clone(),
                case_sensitive: *case_sensitive,
            });
        }
        Filter::InList {
            values,
            case_sensitive,
            ..
        } => {
            if values.is_empty() {
                return Err(GaError::InvalidArgument(format!(
                    "in_list_filter on '{}' needs at least one value",
                    filter.field()
                )));
            }
            wire.in_list_filter = Some(InListFilter {
                values: values.clone(),
                case_sensitive: *case_sensitive,
            });
        }
        Filter::Numeric {
            operation, value, ..
        } => {
            wire.numeric_filter = Some(NumericFilter {
                operation: *operation,
                value: numeric(filter.field(), *value)?,
            });
        }
        Filter::Between { from, to, .. } => {
            wire.between_filter = Some(BetweenFilter {
                from_value: numeric(filter.field(), *from)?,
                to_value: numeric(filter.field(), *to)?,
            });
        }
    }

    Ok(FilterExpression { filter: wire })
}

// JSON has no NaN or infinity; serde_json would send them as null.
fn numeric(field: &str, v: NumericValue) -> Result<WireNumericValue, GaError> {
    match v {
        NumericValue::Int64(i) => Ok(WireNumericValue {
            int64_value: Some(i.to_string()),
            double_value: None,
        }),
        NumericValue::Double(d) if d.is_finite() => Ok(WireNumericValue {
            int64_value: None,
            double_value: Some(d),
        }),
        NumericValue::Double(d) => Err(GaError::InvalidArgument(format!(
            "numeric operand for '{field}' must be finite, got {d}"
        ))),
    }
}
