use polars::prelude::*;

/// Trait for converting report results into Polars DataFrames.
///
/// Column order and names are preserved; text columns become `String`
/// series and numeric columns `Float64`.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Returns the column names and Polars types this value converts to.
    fn schema(&self) -> Vec<(String, DataType)>;
}
