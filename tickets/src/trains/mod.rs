//! Decoding and filtering of left-ticket records.
//!
//! The query endpoint returns each train as one `|`-separated line with a
//! fixed field layout. [`RawTrainRecord`] names the positions we read,
//! [`TrainCollection`] selects trains by category and decodes them lazily.

mod collection;
mod record;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::TrainCollection;
pub use record::{
    DecodeError, FIELD_SEPARATOR, MIN_FIELDS, NOT_OFFERED, ParsedTrainRow, RawTrainRecord,
    SeatAvailability,
};
