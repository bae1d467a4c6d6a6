use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Values of one table column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Dimension values, kept as returned.
    Text(Vec<String>),
    /// Metric values, parsed.
    Numeric(Vec<f64>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(v) => v.len(),
            Self::Numeric(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, row: usize) -> Option<Cell> {
        match self {
            Self::Text(v) => v.get(row).map(|s| Cell::Text(s.clone())),
            Self::Numeric(v) => v.get(row).map(|n| Cell::Number(*n)),
        }
    }
}

/// A labelled column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportColumn {
    pub name: String,
    pub values: ColumnValues,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// Row-oriented report result: dimension columns first, then metric columns.
///
/// Serializes as a list of records, e.g. `[{"pagePath": "/", "screenPageViews": 10.0}]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportTable {
    columns: Vec<ReportColumn>,
    height: usize,
}

impl ReportTable {
    /// Columns must all have the same length.
    pub(crate) fn from_columns(columns: Vec<ReportColumn>) -> Self {
        let height = columns.first().map_or(0, |c| c.values.len());
        debug_assert!(columns.iter().all(|c| c.values.len() == height));
        Self { columns, height }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn columns(&self) -> &[ReportColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ReportColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// A dimension column by name; `None` if missing or numeric.
    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        match &self.column(name)?.values {
            ColumnValues::Text(v) => Some(v),
            ColumnValues::Numeric(_) => None,
        }
    }

    /// A metric column by name; `None` if missing or text.
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        match &self.column(name)?.values {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }

    pub fn row(&self, index: usize) -> Option<Vec<Cell>> {
        if index >= self.height {
            return None;
        }
        self.columns.iter().map(|c| c.values.cell(index)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.height).filter_map(|i| self.row(i))
    }
}

struct Record<'a> {
    table: &'a ReportTable,
    row: usize,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.width()))?;
        for col in &self.table.columns {
            match &col.values {
                ColumnValues::Text(v) => map.serialize_entry(&col.name, &v[self.row])?,
                ColumnValues::Numeric(v) => map.serialize_entry(&col.name, &v[self.row])?,
            }
        }
        map.end()
    }
}

impl Serialize for ReportTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in 0..self.height {
            seq.serialize_element(&Record { table: self, row })?;
        }
        seq.end()
    }
}

#[cfg(feature = "dataframe")]
mod dataframe_impl {
    use super::{ColumnValues, ReportTable};
    use crate::core::dataframe::ToDataFrame;
    use polars::prelude::*;

    impl ToDataFrame for ReportTable {
        fn to_dataframe(&self) -> PolarsResult<DataFrame> {
            let columns: Vec<Column> = self
                .columns
                .iter()
                .map(|c| {
                    let series = match &c.values {
                        ColumnValues::Text(v) => Series::new(c.name.as_str().into(), v.as_slice()),
                        ColumnValues::Numeric(v) => {
                            Series::new(c.name.as_str().into(), v.as_slice())
                        }
                    };
                    series.into()
                })
                .collect();
            DataFrame::new(columns)
        }

        fn schema(&self) -> Vec<(String, DataType)> {
            self.columns
                .iter()
                .map(|c| {
                    let dtype = match c.values {
                        ColumnValues::Text(_) => DataType::String,
                        ColumnValues::Numeric(_) => DataType::Float64,
                    };
                    (c.name.clone(), dtype)
                })
                .collect()
        }
    }
}
