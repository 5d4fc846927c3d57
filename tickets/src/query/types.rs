//! Left-ticket response DTOs.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::Telecode;

use super::error::QueryError;

/// Envelope of a left-ticket query response.
///
/// A successful answer looks like
/// `{"httpstatus":200,"data":{"result":["...|..."],"flag":"1","map":{"VNP":"北京南"}},"messages":"","status":true}`.
/// When 12306 renames the endpoint it answers `{"status":false,"c_url":"leftTicket/queryZ"}`
/// without `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketResponse {
    /// Payload; absent when the query was rejected.
    pub data: Option<LeftTicketData>,

    /// Server messages: either a string or an array of strings.
    #[serde(default)]
    pub messages: Value,

    /// Replacement endpoint path when the query endpoint has moved.
    pub c_url: Option<String>,
}

/// The `data` object of a left-ticket response.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketData {
    /// One `|`-separated record per train.
    #[serde(default)]
    pub result: Vec<String>,

    /// Telecode → name for every station the records mention.
    #[serde(default)]
    pub map: HashMap<String, String>,
}

/// What a successful query yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeftTickets {
    /// Raw records in response order.
    pub records: Vec<String>,

    /// Station names sent along with the records.
    pub stations: HashMap<Telecode, String>,
}

impl LeftTicketResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, QueryError> {
        serde_json::from_str(body).map_err(|e| {
            let snippet: String = body.chars().take(500).collect();
            debug!(body = %snippet, "unparsable left-ticket response");
            QueryError::Json {
                message: e.to_string(),
            }
        })
    }

    /// The records and station names, or why there are none.
    pub fn into_left_tickets(self) -> Result<LeftTickets, QueryError> {
        if let Some(data) = self.data {
            let stations = data
                .map
                .into_iter()
                .filter_map(|(code, name)| match Telecode::parse(&code) {
                    Ok(code) => Some((code, name)),
                    Err(e) => {
                        debug!(error = %e, "ignoring station map entry");
                        None
                    }
                })
                .collect();
            return Ok(LeftTickets {
                records: data.result,
                stations,
            });
        }

        let mut message = messages_text(&self.messages);
        if message.is_empty() {
            message = "response has no data".to_string();
        }
        if let Some(url) = &self.c_url {
            message = format!("{message} (endpoint moved to {url})");
        }

        Err(QueryError::Rejected {
            message,
            redirect: self.c_url,
        })
    }
}

fn messages_text(messages: &Value) -> String {
    match messages {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    }
}
