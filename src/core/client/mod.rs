//! Public client surface + builder.
//! Internals are split into `auth` (credentials, token exchange) and `constants` (endpoints + defaults).

mod auth;
mod constants;

pub use auth::Credentials;

use crate::core::GaError;
use constants::{DEFAULT_BASE_URL, DEFAULT_METADATA_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Handle to the Analytics Data API.
///
/// Cheap to clone; each report call resolves its own access token, so clones
/// share nothing but the connection pool.
#[derive(Debug, Clone)]
pub struct GaClient {
    http: Client,
    base_url: Url,
    token_url: Option<Url>,
    metadata_url: Url,
    credentials: Credentials,
    timeout: Duration,
}

impl Default for GaClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl GaClient {
    /// Create a new builder.
    pub fn builder() -> GaClientBuilder {
        GaClientBuilder::default()
    }

    /// The credential source this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The overall timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// `{base}/properties/{id}:runReport`
    pub(crate) fn run_report_url(&self, property_id: &str) -> Result<Url, GaError> {
        Ok(self
            .base_url
            .join(&format!("properties/{property_id}:runReport"))?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct GaClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    token_url: Option<Url>,
    metadata_url: Option<Url>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GaClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Data API base (e.g., `https://analyticsdata.googleapis.com/v1beta/`).
    /// Keep the trailing slash: report paths are joined onto it.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the OAuth2 token endpoint used for service-account keys.
    pub fn token_url(mut self, url: Url) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Override the metadata server token endpoint.
    pub fn metadata_url(mut self, url: Url) -> Self {
        self.metadata_url = Some(url);
        self
    }

    /// Set the credential source. Default: [`Credentials::from_env`].
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Shorthand for [`Credentials::ServiceAccountFile`].
    pub fn service_account_file(self, path: impl Into<std::path::PathBuf>) -> Self {
        self.credentials(Credentials::ServiceAccountFile(path.into()))
    }

    /// Shorthand for [`Credentials::AccessToken`].
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.credentials(Credentials::AccessToken(token.into()))
    }

    /// Set a global request timeout (overall). Default: two hours.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<GaClient, GaError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let metadata_url = match self.metadata_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_METADATA_URL)?,
        };
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(GaClient {
            http,
            base_url,
            token_url: self.token_url,
            metadata_url,
            credentials: self.credentials.unwrap_or_else(Credentials::from_env),
            timeout,
        })
    }
}
