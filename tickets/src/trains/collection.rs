//! Category selection over a batch of raw records.

use crate::domain::CategoryFilter;
use crate::stations::StationLookup;

use super::record::{DecodeError, ParsedTrainRow, RawTrainRecord};

/// The trains of one query response, viewed through a category filter.
///
/// Records are filtered on their train code before decoding, so a record
/// that fails to decode only matters if it would have been listed.
pub struct TrainCollection<'a, R, S: ?Sized> {
    raw_trains: &'a [R],
    filter: &'a CategoryFilter,
    stations: &'a S,
}

impl<'a, R, S> TrainCollection<'a, R, S>
where
    R: AsRef<str>,
    S: StationLookup + ?Sized,
{
    pub fn new(raw_trains: &'a [R], filter: &'a CategoryFilter, stations: &'a S) -> Self {
        Self {
            raw_trains,
            filter,
            stations,
        }
    }

    /// Matching trains in response order.
    ///
    /// The iterator is lazy; call again to start over.
    pub fn trains(&self) -> impl Iterator<Item = Result<ParsedTrainRow, DecodeError>> + '_ {
        self.raw_trains.iter().filter_map(move |line| {
            let record = RawTrainRecord::split(line.as_ref());
            match record.train_code() {
                Ok(code) if !self.filter.matches(code) => None,
                Ok(_) => Some(record.decode(self.stations)),
                Err(e) => Some(Err(e)),
            }
        })
    }

    /// Decode every matching train, stopping at the first failure.
    pub fn collect_rows(&self) -> Result<Vec<ParsedTrainRow>, DecodeError> {
        self.trains().collect()
    }
}
