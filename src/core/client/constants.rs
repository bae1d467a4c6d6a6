//! Centralized constants for default endpoints, scopes and timeouts.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("ga4-report/", env!("CARGO_PKG_VERSION"));

/// Analytics Data API base (`properties/{id}:runReport` is appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://analyticsdata.googleapis.com/v1beta/";

/// OAuth2 token endpoint used when a service-account key does not name one.
pub(crate) const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Metadata server endpoint for ambient credentials on Google Cloud.
pub(crate) const DEFAULT_METADATA_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// OAuth2 scope granting read access to analytics reports.
pub(crate) const ANALYTICS_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";

/// Environment variable naming a service-account key file.
pub(crate) const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Upper bound for a single report call. Large reports can run for a long time
/// server-side, so this is intentionally far beyond typical latencies.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Lifetime requested for self-signed assertion JWTs (the maximum Google accepts).
pub(crate) const JWT_LIFETIME_SECS: i64 = 3600;
