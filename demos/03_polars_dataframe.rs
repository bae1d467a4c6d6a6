//! Example demonstrating Polars `DataFrame` integration with ga4-report.
//!
//! Run with: cargo run --example 03_polars_dataframe --features dataframe -- <property-id>

use ga4_report::{GaClient, ToDataFrame};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let property = std::env::args()
        .nth(1)
        .ok_or("usage: 03_polars_dataframe <property-id>")?;

    let client = GaClient::default();
    let page_paths = ["/Page/1", "/Page/2", "/Page/3"];

    let table = client
        .page_path_report(
            &property,
            page_paths,
            ["pagePath", "pageTitle"],
            ["screenPageViews", "activeUsers", "averageSessionDuration"],
            false,
            "2023-02-01",
            "today",
        )
        .await?;

    let df = table.to_dataframe()?;
    println!("DataFrame shape: {:?}", df.shape());
    println!("{}", df.head(Some(10)));
    Ok(())
}
