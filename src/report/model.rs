use crate::core::GaError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One end of a report date range.
///
/// Relative bounds are resolved by the service in the property's reporting time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBound {
    /// A calendar date, sent as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// `today`
    Today,
    /// `yesterday`
    Yesterday,
    /// `NdaysAgo`
    DaysAgo(u32),
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Today => f.write_str("today"),
            Self::Yesterday => f.write_str("yesterday"),
            Self::DaysAgo(n) => write!(f, "{n}daysAgo"),
        }
    }
}

impl FromStr for DateBound {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "today" => return Ok(Self::Today),
            "yesterday" => return Ok(Self::Yesterday),
            _ => {}
        }
        if let Some(n) = s.strip_suffix("daysAgo")
            && !n.is_empty()
            && n.bytes().all(|b| b.is_ascii_digit())
        {
            return n
                .parse()
                .map(Self::DaysAgo)
                .map_err(|_| GaError::InvalidArgument(format!("day offset out of range: '{s}'")));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::Date)
            .map_err(|_| {
                GaError::InvalidArgument(format!(
                    "date must be YYYY-MM-DD, NdaysAgo, yesterday or today, got '{s}'"
                ))
            })
    }
}

impl From<NaiveDate> for DateBound {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// An inclusive report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateBound,
    end: DateBound,
}

impl DateRange {
    /// Creates a range. Only literal dates can be ordered locally; relative
    /// bounds are accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidDates`] if both bounds are dates and `start > end`.
    pub fn new(start: impl Into<DateBound>, end: impl Into<DateBound>) -> Result<Self, GaError> {
        let (start, end) = (start.into(), end.into());
        if let (DateBound::Date(s), DateBound::Date(e)) = (start, end)
            && s > e
        {
            return Err(GaError::InvalidDates);
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds from their wire form (`2023-02-01`, `7daysAgo`, `today`, ...).
    pub fn parse(start: &str, end: &str) -> Result<Self, GaError> {
        Self::new(start.parse::<DateBound>()?, end.parse::<DateBound>()?)
    }

    pub fn start(&self) -> DateBound {
        self.start
    }

    pub fn end(&self) -> DateBound {
        self.end
    }
}

/// How a string filter compares dimension values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    Exact,
    BeginsWith,
    EndsWith,
    Contains,
    /// The whole value must match the regular expression.
    FullRegexp,
    /// Any part of the value may match the regular expression.
    PartialRegexp,
}

impl MatchType {
    pub const ALL: [MatchType; 6] = [
        Self::Exact,
        Self::BeginsWith,
        Self::EndsWith,
        Self::Contains,
        Self::FullRegexp,
        Self::PartialRegexp,
    ];

    /// The wire name (`EXACT`, `BEGINS_WITH`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::BeginsWith => "BEGINS_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::Contains => "CONTAINS",
            Self::FullRegexp => "FULL_REGEXP",
            Self::PartialRegexp => "PARTIAL_REGEXP",
        }
    }
}

impl FromStr for MatchType {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == tag)
            .ok_or_else(|| GaError::InvalidArgument(format!("unknown match type '{s}'")))
    }
}

/// Comparison applied by a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    #[default]
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::Equal,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
        }
    }
}

impl FromStr for Operation {
    type Err = GaError;

    /// Accepts the wire name or a short alias (`eq`, `<`, `ge`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        let alias = match tag.as_str() {
            "EQ" | "=" | "==" => Some(Self::Equal),
            "LT" | "<" => Some(Self::LessThan),
            "LE" | "<=" => Some(Self::LessThanOrEqual),
            "GT" | ">" => Some(Self::GreaterThan),
            "GE" | ">=" => Some(Self::GreaterThanOrEqual),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|op| op.as_str() == tag))
            .ok_or_else(|| GaError::InvalidArgument(format!("unknown numeric operation '{s}'")))
    }
}

fn normalize_tag(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}

/// A numeric operand; the service keeps integers and doubles apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int64(i64),
    Double(f64),
}

impl From<i64> for NumericValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<i32> for NumericValue {
    fn from(v: i32) -> Self {
        Self::Int64(i64::from(v))
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl FromStr for NumericValue {
    type Err = GaError;

    /// Integers parse as `Int64`, anything else numeric as `Double`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::Int64(i));
        }
        s.parse::<f64>()
            .map(Self::Double)
            .map_err(|_| GaError::InvalidArgument(format!("not a number: '{s}'")))
    }
}

/// The four filter shapes, by their conventional tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    StringFilter,
    InListFilter,
    NumericFilter,
    BetweenFilter,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        Self::StringFilter,
        Self::InListFilter,
        Self::NumericFilter,
        Self::BetweenFilter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StringFilter => "string_filter",
            Self::InListFilter => "in_list_filter",
            Self::NumericFilter => "numeric_filter",
            Self::BetweenFilter => "between_filter",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                GaError::InvalidArgument(format!(
                    "filter kind must be 'string_filter', 'in_list_filter', 'numeric_filter' \
                     or 'between_filter', got '{s}'"
                ))
            })
    }
}

/// A single predicate restricting which dimension values a report includes.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    StringMatch {
        field: String,
        value: String,
        match_type: MatchType,
        case_sensitive: bool,
    },
    InList {
        field: String,
        values: Vec<String>,
        case_sensitive: bool,
    },
    Numeric {
        field: String,
        operation: Operation,
        value: NumericValue,
    },
    /// Inclusive on both ends.
    Between {
        field: String,
        from: NumericValue,
        to: NumericValue,
    },
}

impl Filter {
    pub fn string_match(
        field: impl Into<String>,
        value: impl Into<String>,
        match_type: MatchType,
        case_sensitive: bool,
    ) -> Self {
        Self::StringMatch {
            field: field.into(),
            value: value.into(),
            match_type,
            case_sensitive,
        }
    }

    pub fn in_list<I, S>(field: impl Into<String>, values: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InList {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            case_sensitive,
        }
    }

    pub fn numeric(
        field: impl Into<String>,
        operation: Operation,
        value: impl Into<NumericValue>,
    ) -> Self {
        Self::Numeric {
            field: field.into(),
            operation,
            value: value.into(),
        }
    }

    pub fn between(
        field: impl Into<String>,
        from: impl Into<NumericValue>,
        to: impl Into<NumericValue>,
    ) -> Self {
        Self::Between {
            field: field.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// The dimension this filter applies to.
    pub fn field(&self) -> &str {
        match self {
            Self::StringMatch { field, .. }
            | Self::InList { field, .. }
            | Self::Numeric { field, .. }
            | Self::Between { field, .. } => field,
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::StringMatch { .. } => FilterKind::StringFilter,
            Self::InList { .. } => FilterKind::InListFilter,
            Self::Numeric { .. } => FilterKind::NumericFilter,
            Self::Between { .. } => FilterKind::BetweenFilter,
        }
    }
}

/// Everything needed to run one report. Built once, then consumed by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSpec {
    property_id: String,
    dimensions: Vec<String>,
    metrics: Vec<String>,
    date_range: DateRange,
    filter: Option<Filter>,
}

impl ReportSpec {
    /// Validates and assembles a report specification without a filter.
    ///
    /// `property_id` may be given bare (`123456789`) or prefixed (`properties/123456789`).
    ///
    /// # Errors
    ///
    /// Returns [`GaError::InvalidArgument`] if the property id is blank, or if
    /// the dimension or metric list is empty or contains a blank name.
    pub fn new<D, M>(
        property_id: impl Into<String>,
        dimensions: D,
        metrics: M,
        date_range: DateRange,
    ) -> Result<Self, GaError>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let property_id: String = property_id.into();
        let property_id = property_id
            .trim()
            .trim_start_matches("properties/")
            .to_string();
        if property_id.is_empty() {
            return Err(GaError::InvalidArgument("property id is empty".into()));
        }
        let dimensions = collect_names("dimension", dimensions)?;
        let metrics = collect_names("metric", metrics)?;

        Ok(Self {
            property_id,
            dimensions,
            metrics,
            date_range,
            filter: None,
        })
    }

    /// Returns the spec with `filter` in its single filter slot, replacing any previous one.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }
}

fn collect_names<I>(what: &str, names: I) -> Result<Vec<String>, GaError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return Err(GaError::InvalidArgument(format!("at least one {what} is required")));
    }
    if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
        return Err(GaError::InvalidArgument(format!("{what} #{pos} has an empty name")));
    }
    Ok(names)
}
