//! Query client error types.

/// Errors from fetching left-ticket records.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// HTTP request failed (network error, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The envelope carried no `data` (12306 answers this way when the
    /// endpoint name has moved, naming the new one in `c_url`)
    #[error("query rejected: {message}")]
    Rejected {
        message: String,
        redirect: Option<String>,
    },

    /// A saved response could not be read
    #[error("failed to read saved response {path}: {message}")]
    Mock { path: String, message: String },
}
