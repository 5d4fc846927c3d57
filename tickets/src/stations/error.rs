//! Station directory error types.

/// Errors that can occur while loading or querying the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("station list request failed with status {status}")]
    Api { status: u16 },

    /// Reading a station list file failed
    #[error("failed to read station list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The list contained no usable entries
    #[error("station list contains no stations")]
    Empty,

    /// No station has this name
    #[error("unknown station name: {0}")]
    UnknownName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::UnknownName("火星".into());
        assert_eq!(err.to_string(), "unknown station name: 火星");

        let err = StationError::Api { status: 502 };
        assert_eq!(err.to_string(), "station list request failed with status 502");
    }
}
