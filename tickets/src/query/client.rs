//! 12306 left-ticket HTTP client.

use tracing::{debug, info};

use crate::domain::{Telecode, TravelDate};

use super::error::QueryError;
use super::types::{LeftTicketResponse, LeftTickets};

/// Default query endpoint.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn/otn/leftTicket/queryO";

/// Passenger type sent with every query.
const DEFAULT_PURPOSE_CODES: &str = "ADULT";

/// 12306 turns away requests without a browser-like user agent.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Configuration for the query client.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Query endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Value of the `purpose_codes` parameter
    pub purpose_codes: String,
}

impl QueryConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            purpose_codes: DEFAULT_PURPOSE_CODES.to_string(),
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
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

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One left-ticket query: which day, from where, to where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuery {
    pub date: TravelDate,
    pub from: Telecode,
    pub to: Telecode,
}

/// Something that can answer a left-ticket query with raw records.
///
/// This abstraction allows the runner to be tested without the network.
pub trait TicketSource {
    /// Raw `|`-separated train records for `query` in response order, with
    /// the station names the response carries.
    fn left_tickets(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = Result<LeftTickets, QueryError>> + Send;
}

/// Left-ticket API client.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    base_url: String,
    purpose_codes: String,
}

impl TicketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: QueryConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            purpose_codes: config.purpose_codes,
        })
    }

    /// Build the GET request for `query`.
    ///
    /// Parameters are sent in the order the endpoint documents them.
    pub fn request(&self, query: &TicketQuery) -> reqwest::RequestBuilder {
        self.http.get(&self.base_url).query(&[
            ("leftTicketDTO.train_date", query.date.as_query_value()),
            ("leftTicketDTO.from_station", query.from.to_string()),
            ("leftTicketDTO.to_station", query.to.to_string()),
            ("purpose_codes", self.purpose_codes.clone()),
        ])
    }
}

impl TicketSource for TicketClient {
    async fn left_tickets(&self, query: &TicketQuery) -> Result<LeftTickets, QueryError> {
        let request = self.request(query).build()?;
        debug!(url = %request.url(), "querying left tickets");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(QueryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Always UTF-8, whatever charset the headers claim.
        let body = String::from_utf8_lossy(&response.bytes().await?).into_owned();
        let tickets = LeftTicketResponse::from_json(&body)?.into_left_tickets()?;

        info!(
            from = %query.from,
            to = %query.to,
            date = %query.date,
            trains = tickets.records.len(),
            "received left tickets"
        );
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn query() -> TicketQuery {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        TicketQuery {
            date: TravelDate::parse("2024-03-15", today).unwrap(),
            from: Telecode::parse("BJP").unwrap(),
            to: Telecode::parse("SHH").unwrap(),
        }
    }

    #[test]
    fn config_defaults() {
        let config = QueryConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.purpose_codes, "ADULT");
    }

    #[test]
    fn config_builder() {
        let config = QueryConfig::new()
            .with_base_url("http://localhost:8080/query")
            .with_timeout(5)
            .with_accept_invalid_certs(true)
            .with_user_agent("tickets-test");

        assert_eq!(config.base_url, "http://localhost:8080/query");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.accept_invalid_certs);
        assert_eq!(config.user_agent, "tickets-test");
    }

    #[test]
    fn request_url_carries_query_parameters() {
        let client = TicketClient::new(QueryConfig::new()).unwrap();
        let request = client.request(&query()).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://kyfw.12306.cn/otn/leftTicket/queryO?\
             leftTicketDTO.train_date=2024-03-15&\
             leftTicketDTO.from_station=BJP&\
             leftTicketDTO.to_station=SHH&\
             purpose_codes=ADULT"
        );
    }

    #[test]
    fn client_creation_with_insecure_tls() {
        let config = QueryConfig::new().with_accept_invalid_certs(true);
        assert!(TicketClient::new(config).is_ok());
    }
}
