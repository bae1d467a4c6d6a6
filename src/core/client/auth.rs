//! Credential sources and bearer-token acquisition.
//!
//! A service-account key is turned into a short-lived access token by signing
//! an RS256 assertion and exchanging it at the OAuth2 token endpoint. Ambient
//! credentials come from the Google Cloud metadata server.

use super::constants::{ANALYTICS_SCOPE, CREDENTIALS_ENV, DEFAULT_TOKEN_URL, JWT_LIFETIME_SECS};
use crate::core::GaError;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Where the client gets its access token from.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A pre-issued OAuth2 bearer token, used as-is.
    AccessToken(String),
    /// Path to a service-account JSON key file.
    ServiceAccountFile(PathBuf),
    /// Ambient credentials from the Google Cloud metadata server.
    Metadata,
}

impl Credentials {
    /// Picks a key file from `GOOGLE_APPLICATION_CREDENTIALS` when it is set,
    /// falling back to the metadata server.
    pub fn from_env() -> Self {
        match std::env::var_os(CREDENTIALS_ENV) {
            Some(path) if !path.is_empty() => Self::ServiceAccountFile(PathBuf::from(path)),
            _ => Self::Metadata,
        }
    }

    /// Uses `creds_path` when given, otherwise whatever the environment provides.
    pub fn from_path_or_env(creds_path: Option<PathBuf>) -> Self {
        creds_path.map_or_else(Self::from_env, Self::ServiceAccountFile)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Self::ServiceAccountFile(p) => f.debug_tuple("ServiceAccountFile").field(p).finish(),
            Self::Metadata => f.write_str("Metadata"),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct ServiceAccountKey {
    pub(crate) client_email: String,
    pub(crate) private_key: String,
    pub(crate) private_key_id: Option<String>,
    pub(crate) token_uri: Option<String>,
}

impl ServiceAccountKey {
    pub(crate) fn from_file(path: &Path) -> Result<Self, GaError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            GaError::Auth(format!("service account key {}: {e}", path.display()))
        })
    }
}

#[derive(Serialize)]
struct JwtClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Builds a signed RS256 assertion for the token endpoint `audience`.
pub(crate) fn signed_assertion(
    key: &ServiceAccountKey,
    audience: &str,
    issued_at: i64,
) -> Result<String, GaError> {
    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| GaError::Auth(format!("private key rejected: {e}")))?;
    let header = Header {
        kid: key.private_key_id.clone(),
        ..Header::new(Algorithm::RS256)
    };
    let claims = JwtClaims {
        iss: &key.client_email,
        scope: ANALYTICS_SCOPE,
        aud: audience,
        iat: issued_at,
        exp: issued_at + JWT_LIFETIME_SECS,
    };
    encode(&header, &claims, &signing_key).map_err(|e| GaError::Auth(format!("jwt signing failed: {e}")))
}

async fn read_token(resp: reqwest::Response, source: &str) -> Result<String, GaError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        let detail = serde_json::from_str::<TokenError>(&text)
            .map(|e| format!("{} {}", e.error, e.error_description).trim().to_string())
            .unwrap_or(text);
        return Err(GaError::Auth(format!(
            "{source} returned {}: {detail}",
            status.as_u16()
        )));
    }
    let token: TokenResponse = serde_json::from_str(&text)
        .map_err(|e| GaError::Auth(format!("{source} token parse: {e}")))?;
    Ok(token.access_token)
}

impl super::GaClient {
    /// Resolves a bearer token for one report call.
    pub(crate) async fn access_token(&self) -> Result<String, GaError> {
        match &self.credentials {
            Credentials::AccessToken(token) => Ok(token.clone()),
            Credentials::ServiceAccountFile(path) => {
                let key = ServiceAccountKey::from_file(path)?;
                self.exchange_assertion(&key).await
            }
            Credentials::Metadata => self.metadata_token().await,
        }
    }

    async fn exchange_assertion(&self, key: &ServiceAccountKey) -> Result<String, GaError> {
        // an explicit override wins over the key's own token_uri
        let token_url = match (&self.token_url, &key.token_uri) {
            (Some(url), _) => url.clone(),
            (None, Some(uri)) => Url::parse(uri)?,
            (None, None) => Url::parse(DEFAULT_TOKEN_URL)?,
        };
        let assertion = signed_assertion(key, token_url.as_str(), chrono::Utc::now().timestamp())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(client_email = %key.client_email, %token_url, "exchanging service account assertion");

        let resp = self
            .http
            .post(token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        read_token(resp, "token endpoint").await
    }

    async fn metadata_token(&self) -> Result<String, GaError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.metadata_url, "requesting metadata server token");

        let resp = self
            .http
            .get(self.metadata_url.clone())
            .query(&[("scopes", ANALYTICS_SCOPE)])
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;
        read_token(resp, "metadata server").await
    }
}
