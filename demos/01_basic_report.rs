//! Run a plain report (no filter) and print it row by row.
//!
//! Run with: cargo run --example 01_basic_report -- <property-id> [credentials.json]

use ga4_report::{Credentials, GaClient, ReportBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let property = args.next().ok_or("usage: 01_basic_report <property-id> [credentials.json]")?;
    let creds = Credentials::from_path_or_env(args.next().map(Into::into));

    let client = GaClient::builder().credentials(creds).build()?;

    let table = ReportBuilder::new(&client, property)
        .dimensions(["pagePath", "pageTitle"])
        .metrics(["screenPageViews", "activeUsers", "averageSessionDuration"])
        .date_range("2023-02-01", "today")
        .fetch()
        .await?;

    println!("{}", table.column_names().join("\t"));
    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|c| match c {
                ga4_report::Cell::Text(s) => s.clone(),
                ga4_report::Cell::Number(n) => n.to_string(),
            })
            .collect();
        println!("{}", cells.join("\t"));
    }
    println!("\n{} rows", table.height());
    Ok(())
}
