//! Travel date type.

use std::fmt;

use chrono::NaiveDate;

/// Date format used on the command line and in the query string.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from parsing a travel date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Not a `YYYY-MM-DD` calendar date
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    Malformed(String),

    /// The date is before today
    #[error("date {date} is in the past (today is {today})")]
    InPast { date: NaiveDate, today: NaiveDate },
}

/// A travel date on or after today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a `YYYY-MM-DD` date, rejecting anything before `today`.
    pub fn parse(s: &str, today: NaiveDate) -> Result<Self, DateError> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|_| DateError::Malformed(s.to_string()))?;

        if date < today {
            return Err(DateError::InPast { date, today });
        }

        Ok(TravelDate(date))
    }

    /// The date as sent in `leftTicketDTO.train_date`.
    pub fn as_query_value(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
