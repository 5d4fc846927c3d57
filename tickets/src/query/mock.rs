//! Replays a saved left-ticket response instead of calling 12306.

use std::path::Path;

use tracing::debug;

use super::client::{TicketQuery, TicketSource};
use super::error::QueryError;
use super::types::{LeftTicketResponse, LeftTickets};

/// Ticket source backed by a JSON file holding a full response envelope.
///
/// Useful for working on the table output without network access. The
/// query is ignored; the same records come back every time.
#[derive(Debug, Clone)]
pub struct MockTicketClient {
    tickets: LeftTickets,
}

impl MockTicketClient {
    /// Load and validate the saved response at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| QueryError::Mock {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let tickets = LeftTicketResponse::from_json(&body)?.into_left_tickets()?;
        Ok(Self { tickets })
    }

    /// Wrap records and station names directly.
    pub fn from_tickets(tickets: LeftTickets) -> Self {
        Self { tickets }
    }
}

impl TicketSource for MockTicketClient {
    async fn left_tickets(&self, query: &TicketQuery) -> Result<LeftTickets, QueryError> {
        debug!(from = %query.from, to = %query.to, "serving saved left tickets");
        Ok(self.tickets.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_saved_response() {
        let file = write_temp(
            r#"{"data":{"result":["x|y|z|G1"],"map":{"BJP":"北京"}},"status":true}"#,
        );
        let mock = MockTicketClient::new(file.path()).unwrap();
        assert_eq!(mock.tickets.records, ["x|y|z|G1"]);
        assert_eq!(mock.tickets.stations.len(), 1);
    }

    #[test]
    fn rejected_response_fails_to_load() {
        let file = write_temp(r#"{"status":false,"c_url":"leftTicket/queryZ"}"#);
        assert!(matches!(
            MockTicketClient::new(file.path()),
            Err(QueryError::Rejected { .. })
        ));
    }

    #[test]
    fn missing_file_fails() {
        let err = MockTicketClient::new("/nonexistent/left_ticket.json").unwrap_err();
        assert!(matches!(err, QueryError::Mock { .. }));
        assert!(err.to_string().contains("/nonexistent/left_ticket.json"));
    }
}
