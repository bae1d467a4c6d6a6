use crate::core::{GaClient, GaError, net};
use crate::report::{
    flatten::{RawReport, flatten},
    model::ReportSpec,
    request::build_request,
    table::ReportTable,
    wire::{ErrorEnvelope, RunReportResponse},
};

/// One build → send → flatten cycle. A single attempt; remote errors are returned as-is.
pub(super) async fn run_report(client: &GaClient, spec: &ReportSpec) -> Result<ReportTable, GaError> {
    let raw = fetch_raw(client, spec).await?;
    flatten(&raw, spec.dimensions().len(), spec.metrics().len())
}

pub(super) async fn fetch_raw(client: &GaClient, spec: &ReportSpec) -> Result<RawReport, GaError> {
    let body = build_request(spec)?;
    let url = client.run_report_url(spec.property_id())?;
    let token = client.access_token().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        %url,
        dimensions = spec.dimensions().len(),
        metrics = spec.metrics().len(),
        filtered = body.dimension_filter.is_some(),
        "sending runReport"
    );

    let resp = client
        .http()
        .post(url.clone())
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    let text = net::get_text(resp, "run_report", spec.property_id()).await?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(env) => GaError::Api {
                code: env.error.code,
                status: env.error.status,
                message: env.error.message,
            },
            Err(_) => GaError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
        });
    }

    let parsed: RunReportResponse = serde_json::from_str(&text)
        .map_err(|e| GaError::Data(format!("runReport json parse: {e}")))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = parsed.rows.len(), row_count = ?parsed.row_count, "runReport answered");

    Ok(RawReport::from_response(parsed))
}
