use crate::common;
use ga4_report::{Credentials, GaClient, GaError, ReportBuilder};
use httpmock::Method::{GET, POST};
use url::Url;

const METADATA_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";

fn base(server: &httpmock::MockServer) -> Url {
    Url::parse(&format!("{}/v1beta/", server.base_url())).unwrap()
}

#[tokio::test]
async fn service_account_assertion_is_exchanged_for_bearer_token() {
    let server = common::setup_server();

    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/token")
            .header("content-type", "application/x-www-form-urlencoded");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"sa-token","expires_in":3599,"token_type":"Bearer"}"#);
    });
    let report_mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::report_path("123456789"))
            .header("authorization", "Bearer sa-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "123456789", "json"));
    });

    let client = GaClient::builder()
        .base_url(base(&server))
        .token_url(Url::parse(&server.url("/token")).unwrap())
        .service_account_file(common::fixture_path("service_account.json"))
        .build()
        .unwrap();

    let table = ReportBuilder::new(&client, "123456789")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .fetch()
        .await
        .unwrap();

    token_mock.assert();
    report_mock.assert();
    assert_eq!(table.height(), 2);
}

#[tokio::test]
async fn rejected_assertion_surfaces_auth_error() {
    let server = common::setup_server();

    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"error":"invalid_grant","error_description":"Invalid JWT Signature."}"#);
    });
    let report_mock = server.mock(|when, then| {
        when.method(POST).path(common::report_path("1"));
        then.status(200).body("{}");
    });

    let client = GaClient::builder()
        .base_url(base(&server))
        .token_url(Url::parse(&server.url("/token")).unwrap())
        .service_account_file(common::fixture_path("service_account.json"))
        .build()
        .unwrap();

    let err = ReportBuilder::new(&client, "1")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .fetch()
        .await
        .unwrap_err();

    token_mock.assert();
    report_mock.assert_hits(0);
    match err {
        GaError::Auth(msg) => {
            assert!(msg.contains("invalid_grant"), "{msg}");
            assert!(msg.contains("400"), "{msg}");
        }
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_file_is_an_io_error() {
    let server = common::setup_server();

    let client = GaClient::builder()
        .base_url(base(&server))
        .service_account_file(common::fixture_path("does_not_exist.json"))
        .build()
        .unwrap();

    let err = ReportBuilder::new(&client, "1")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, GaError::Io(_)), "{err:?}");
}

#[tokio::test]
async fn metadata_server_token_is_used_for_ambient_credentials() {
    let server = common::setup_server();

    let metadata_mock = server.mock(|when, then| {
        when.method(GET)
            .path(METADATA_PATH)
            .header("metadata-flavor", "Google")
            .query_param("scopes", "https://www.googleapis.com/auth/analytics.readonly");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"md-token","expires_in":3599,"token_type":"Bearer"}"#);
    });
    let report_mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::report_path("123456789"))
            .header("authorization", "Bearer md-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "123456789", "json"));
    });

    let client = GaClient::builder()
        .base_url(base(&server))
        .metadata_url(Url::parse(&server.url(METADATA_PATH)).unwrap())
        .credentials(Credentials::Metadata)
        .build()
        .unwrap();

    let table = ReportBuilder::new(&client, "123456789")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .fetch()
        .await
        .unwrap();

    metadata_mock.assert();
    report_mock.assert();
    assert_eq!(table.text_column("pagePath").unwrap(), ["/Page/1", "/Page/2"]);
}

#[tokio::test]
async fn each_run_resolves_its_own_token() {
    let server = common::setup_server();

    let metadata_mock = server.mock(|when, then| {
        when.method(GET).path(METADATA_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"md-token","expires_in":3599,"token_type":"Bearer"}"#);
    });
    server.mock(|when, then| {
        when.method(POST).path(common::report_path("123456789"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("run_report", "123456789", "json"));
    });

    let client = GaClient::builder()
        .base_url(base(&server))
        .metadata_url(Url::parse(&server.url(METADATA_PATH)).unwrap())
        .credentials(Credentials::Metadata)
        .build()
        .unwrap();
    let spec = ReportBuilder::new(&client, "123456789")
        .dimensions(["pagePath"])
        .metrics(["screenPageViews"])
        .spec()
        .unwrap();

    client.run_report(&spec).await.unwrap();
    client.run_report(&spec).await.unwrap();

    metadata_mock.assert_hits(2);
}
