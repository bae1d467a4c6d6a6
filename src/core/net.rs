/// Reads a response body as text.
///
/// With the `test-mode` feature and `GA_RECORD=1` the body is also stored as
/// the `{endpoint}_{property}.json` fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _property: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if let Some(recorder) = crate::core::fixtures::Recorder::from_env()
            && let Err(e) = recorder.record(_endpoint, _property, &text)
        {
            eprintln!("GA_RECORD: failed to write fixture for property {_property}: {e}");
        }
    }

    Ok(text)
}
