#![cfg(feature = "dataframe")]

use crate::common;
use ga4_report::{ReportBuilder, ToDataFrame};
use httpmock::Method::POST;
use polars::prelude::*;

#[tokio::test]
async fn report_converts_to_typed_dataframe() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(POST).path(common::report_path("987654321"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "987654321", "json"));
    });

    let client = common::client(&server);
    let table = ReportBuilder::new(&client, "987654321")
        .dimensions(["pagePath", "pageTitle"])
        .metrics(["screenPageViews", "activeUsers", "averageSessionDuration"])
        .fetch()
        .await
        .unwrap();

    let df = table.to_dataframe().unwrap();
    assert_eq!(df.shape(), (4, 5));
    assert_eq!(df.column("pagePath").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("activeUsers").unwrap().dtype(), &DataType::Float64);
    assert_eq!(
        table.schema(),
        vec![
            ("pagePath".to_string(), DataType::String),
            ("pageTitle".to_string(), DataType::String),
            ("screenPageViews".to_string(), DataType::Float64),
            ("activeUsers".to_string(), DataType::Float64),
            ("averageSessionDuration".to_string(), DataType::Float64),
        ]
    );
}

#[tokio::test]
async fn empty_report_converts_to_empty_dataframe_with_columns() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(POST).path(common::report_path("555"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "555", "json"));
    });

    let client = common::client(&server);
    let df = ReportBuilder::new(&client, "555")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews", "activeUsers"])
        .fetch()
        .await
        .unwrap()
        .to_dataframe()
        .unwrap();

    assert_eq!(df.shape(), (0, 3));
    assert_eq!(df.column("screenPageViews").unwrap().dtype(), &DataType::Float64);
}
