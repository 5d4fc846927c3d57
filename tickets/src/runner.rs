//! One query, start to finish: fetch records, filter, decode, lay out.

use tracing::info;

use crate::domain::CategoryFilter;
use crate::query::{QueryError, TicketQuery, TicketSource};
use crate::render::{Table, render_trains};
use crate::stations::{Layered, StationLookup};
use crate::trains::{DecodeError, TrainCollection};

/// Errors from running a query.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Fetch the trains for `query` and build the table of those matching `filter`.
///
/// Station names come from the response's own map first and from
/// `stations` after that. Every listed record is decoded before the table
/// is returned, so a malformed record yields an error rather than a partial
/// table.
pub async fn run_query<T, S>(
    source: &T,
    stations: &S,
    query: &TicketQuery,
    filter: &CategoryFilter,
) -> Result<Table, RunError>
where
    T: TicketSource,
    S: StationLookup + ?Sized,
{
    let tickets = source.left_tickets(query).await?;
    let lookup = Layered::new(&tickets.stations, stations);
    let rows = TrainCollection::new(&tickets.records, filter, &lookup).collect_rows()?;

    info!(
        received = tickets.records.len(),
        listed = rows.len(),
        "filtered trains"
    );
    Ok(render_trains(&rows))
}
