use crate::common;
use ga4_report::{GaError, ReportBuilder};
use httpmock::Method::POST;

#[tokio::test]
async fn api_error_envelope_is_passed_through() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path(common::report_path("123456789"));
        then.status(403)
            .header("content-type", "application/json")
            .body(common::fixture("error", "permission_denied", "json"));
    });

    let client = common::client(&server);
    let err = ReportBuilder::new(&client, "123456789")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        GaError::Api {
            code,
            status,
            message,
        } => {
            assert_eq!(code, 403);
            assert_eq!(status, "PERMISSION_DENIED");
            assert!(message.contains("sufficient permissions"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_failure_becomes_status_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path(common::report_path("1"));
        then.status(502).body("<html>bad gateway</html>");
    });

    let client = common::client(&server);
    let err = ReportBuilder::new(&client, "1")
        .dimensions(["date"])
        .metrics(["sessions"])
        .fetch()
        .await
        .unwrap_err();

    // a single attempt, no retry
    mock.assert_hits(1);
    match err {
        GaError::Status { status, url } => {
            assert_eq!(status, 502);
            assert!(url.contains("/v1beta/properties/1:runReport"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_metric_aborts_table_construction() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(POST).path(common::report_path("777"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "777", "json"));
    });

    let client = common::client(&server);
    let err = ReportBuilder::new(&client, "777")
        .dimensions(["country"])
        .metrics(["activeUsers"])
        .fetch()
        .await
        .unwrap_err();

    match err {
        GaError::Conversion { column, row, value } => {
            assert_eq!(column, "activeUsers");
            assert_eq!(row, 1);
            assert_eq!(value, "N/A");
        }
        other => panic!("expected Conversion error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_parameters_never_reach_the_service() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).body("{}");
    });

    let client = common::client(&server);

    let no_metrics = ReportBuilder::new(&client, "1")
        .dimensions(["pagePath"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(no_metrics, GaError::InvalidArgument(_)));

    let reversed = ReportBuilder::new(&client, "1")
        .dimensions(["pagePath"])
        .metrics(["sessions"])
        .date_range("2024-01-31", "2024-01-01")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(reversed, GaError::InvalidDates));

    let bad_date = ReportBuilder::new(&client, "1")
        .dimensions(["pagePath"])
        .metrics(["sessions"])
        .date_range("last week", "today")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(bad_date, GaError::InvalidArgument(_)));

    mock.assert_hits(0);
}

#[test]
fn unknown_filter_kind_is_an_invalid_argument() {
    let err = "regexp_filter".parse::<ga4_report::FilterKind>().unwrap_err();
    match err {
        GaError::InvalidArgument(msg) => assert!(msg.contains("'regexp_filter'")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}
