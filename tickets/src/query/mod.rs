//! 12306 left-ticket query client.
//!
//! One GET request per run: the endpoint takes the travel date and the two
//! station telecodes and answers with a JSON envelope whose `data.result`
//! array holds one `|`-separated record per train.
//!
//! [`TicketSource`] is the seam between the runner and where the records
//! come from: [`TicketClient`] talks to 12306, [`MockTicketClient`] replays
//! a saved response.

mod client;
mod error;
mod mock;
mod types;

pub use client::{QueryConfig, TicketClient, TicketQuery, TicketSource};
pub use error::QueryError;
pub use mock::MockTicketClient;
pub use types::{LeftTicketData, LeftTicketResponse, LeftTickets};
