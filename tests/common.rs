#![allow(dead_code)]

use ga4_report::GaClient;
use httpmock::MockServer;
use std::{fs, path::Path, path::PathBuf};
use url::Url;

pub const TOKEN: &str = "test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn fixture(endpoint: &str, property: &str, ext: &str) -> String {
    let path = fixture_path(&format!("{endpoint}_{property}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn report_path(property: &str) -> String {
    format!("/v1beta/properties/{property}:runReport")
}

/// Client pointed at the mock server, authenticating with a fixed bearer token.
pub fn client(server: &MockServer) -> GaClient {
    GaClient::builder()
        .base_url(Url::parse(&format!("{}/v1beta/", server.base_url())).unwrap())
        .access_token(TOKEN)
        .build()
        .unwrap()
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("GA_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("GA_RECORD").ok().as_deref() == Some("1")
}
