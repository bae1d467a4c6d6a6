use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GaError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A credential file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied argument was rejected before any request was built
    /// (unknown filter kind, empty dimension list, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,

    /// A metric value in the response could not be parsed as a number.
    #[error("conversion error: metric '{column}' row {row}: cannot parse '{value}' as a number")]
    Conversion {
        /// The metric header name.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// The raw value as returned by the service.
        value: String,
    },

    /// The service answered with a structured error envelope.
    #[error("analytics API error {code} ({status}): {message}")]
    Api {
        /// The HTTP-equivalent error code (e.g. 403).
        code: u16,
        /// The canonical status name (e.g. `PERMISSION_DENIED`).
        status: String,
        /// Human readable message from the service.
        message: String,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Credentials could not be loaded or exchanged for an access token.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
