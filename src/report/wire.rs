use serde::{Deserialize, Serialize};

use crate::report::model::{MatchType, Operation};

/* ---------------- request body ---------------- */

/// JSON body of `properties/{id}:runReport`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    /// `properties/{id}`; travels in the URL path, not the body.
    #[serde(skip)]
    pub property: String,
    pub dimensions: Vec<NamedField>,
    pub metrics: Vec<NamedField>,
    pub date_ranges: Vec<WireDateRange>,
    // absent means "no filter"; the key is never sent empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedField {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterExpression {
    pub filter: WireFilter,
}

/// Flat matcher: exactly one of the four `*_filter` slots is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFilter {
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_filter: Option<StringFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_list_filter: Option<InListFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_filter: Option<NumericFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub between_filter: Option<BetweenFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    pub match_type: MatchType,
    pub value: String,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InListFilter {
    pub values: Vec<String>,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericFilter {
    pub operation: Operation,
    pub value: WireNumericValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetweenFilter {
    pub from_value: WireNumericValue,
    pub to_value: WireNumericValue,
}

/// `int64Value` travels as a decimal string (proto3 JSON mapping).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNumericValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int64_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
}

/* ---------------- response body ---------------- */

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunReportResponse {
    #[serde(default)]
    pub(crate) dimension_headers: Vec<HeaderNode>,
    #[serde(default)]
    pub(crate) metric_headers: Vec<HeaderNode>,
    // omitted entirely when the report is empty
    #[serde(default)]
    pub(crate) rows: Vec<RowNode>,
    pub(crate) row_count: Option<i64>,
}

#[derive(Deserialize)]
pub(crate) struct HeaderNode {
    pub(crate) name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RowNode {
    #[serde(default)]
    pub(crate) dimension_values: Vec<ValueNode>,
    #[serde(default)]
    pub(crate) metric_values: Vec<ValueNode>,
}

#[derive(Deserialize)]
pub(crate) struct ValueNode {
    #[serde(default)]
    pub(crate) value: String,
}

/* ---------------- error envelope ---------------- */

#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorNode,
}

#[derive(Deserialize)]
pub(crate) struct ErrorNode {
    pub(crate) code: u16,
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) status: String,
}
