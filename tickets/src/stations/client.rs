//! Fetches the live `station_name.js` list from 12306.

use tracing::info;

use super::directory::StationDirectory;
use super::error::StationError;

/// Default URL of the 12306 station list.
const DEFAULT_URL: &str = "https://kyfw.12306.cn/otn/resources/js/framework/station_name.js";

/// Configuration for the station list client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// URL of the `station_name.js` resource
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl StationClientConfig {
    /// Create a config pointing at 12306.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }

    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Skip TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the 12306 station list.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new station list client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Download and parse the station list.
    pub async fn fetch(&self) -> Result<StationDirectory, StationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StationError::Api {
                status: status.as_u16(),
            });
        }

        // Always UTF-8, whatever charset the headers claim.
        let body = String::from_utf8_lossy(&response.bytes().await?).into_owned();
        let directory = StationDirectory::parse(&body)?;
        info!(stations = directory.len(), "fetched station list");

        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StationClientConfig::new();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn config_builder() {
        let config = StationClientConfig::new()
            .with_url("http://localhost:8080/station_name.js")
            .with_timeout(5)
            .with_accept_invalid_certs(true);

        assert_eq!(config.url, "http://localhost:8080/station_name.js");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn client_creation() {
        assert!(StationClient::new(StationClientConfig::default()).is_ok());
    }
}
