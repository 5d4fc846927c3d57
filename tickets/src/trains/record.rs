//! Field layout of a left-ticket record and its decoder.

use crate::domain::{InvalidTelecode, Telecode, TrainCode};
use crate::stations::StationLookup;

/// Separator between fields of a raw record.
pub const FIELD_SEPARATOR: char = '|';

/// Minimum number of fields a record must have (the no-seat field is the
/// highest position read).
pub const MIN_FIELDS: usize = field::NO_SEAT + 1;

/// Shown for a seat class the train does not offer.
pub const NOT_OFFERED: &str = "--";

/// Positions of the fields we read. This is the only place offsets appear.
mod field {
    pub const TRAIN_CODE: usize = 3;
    pub const FROM_TELECODE: usize = 6;
    pub const TO_TELECODE: usize = 7;
    pub const DEPARTURE_TIME: usize = 8;
    pub const ARRIVAL_TIME: usize = 9;
    pub const DURATION: usize = 10;
    pub const SOFT_SLEEPER: usize = 23;
    pub const SOFT_SEAT: usize = 24;
    pub const HARD_SLEEPER: usize = 28;
    pub const HARD_SEAT: usize = 29;
    pub const SECOND_CLASS: usize = 30;
    pub const FIRST_CLASS: usize = 31;
    pub const NO_SEAT: usize = 33;
}

/// Errors from decoding a raw record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The record does not reach the last field we read
    #[error("malformed record: {found} fields, need at least {required}")]
    TooShort { found: usize, required: usize },

    /// The train code field is empty
    #[error("malformed record: empty train code")]
    MissingTrainCode,

    /// A station field is not a telecode
    #[error("malformed record: {0}")]
    InvalidTelecode(#[from] InvalidTelecode),

    /// The station directory has no entry for a telecode
    #[error("unknown station telecode {0}")]
    UnknownStation(Telecode),
}

/// One record split into its positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrainRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawTrainRecord<'a> {
    /// Split a raw line on [`FIELD_SEPARATOR`].
    pub fn split(line: &'a str) -> Self {
        Self {
            fields: line.split(FIELD_SEPARATOR).collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields (never true for a split line).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, index: usize) -> Result<&'a str, DecodeError> {
        self.fields
            .get(index)
            .copied()
            .ok_or(DecodeError::TooShort {
                found: self.fields.len(),
                required: MIN_FIELDS,
            })
    }

    /// The train code field, as used by the category filter.
    pub fn train_code(&self) -> Result<&'a str, DecodeError> {
        self.field(field::TRAIN_CODE)
    }

    /// Decode into a display row, resolving station names via `stations`.
    pub fn decode<S>(&self, stations: &S) -> Result<ParsedTrainRow, DecodeError>
    where
        S: StationLookup + ?Sized,
    {
        if self.fields.len() < MIN_FIELDS {
            return Err(DecodeError::TooShort {
                found: self.fields.len(),
                required: MIN_FIELDS,
            });
        }

        let train_code =
            TrainCode::parse(self.field(field::TRAIN_CODE)?).ok_or(DecodeError::MissingTrainCode)?;

        let resolve = |index| -> Result<String, DecodeError> {
            let code = Telecode::parse(self.field(index)?)?;
            stations
                .name_of(&code)
                .map(str::to_string)
                .ok_or(DecodeError::UnknownStation(code))
        };

        Ok(ParsedTrainRow {
            train_code,
            from_station_name: resolve(field::FROM_TELECODE)?,
            to_station_name: resolve(field::TO_TELECODE)?,
            departure_time: self.field(field::DEPARTURE_TIME)?.to_string(),
            arrival_time: self.field(field::ARRIVAL_TIME)?.to_string(),
            duration: self.field(field::DURATION)?.to_string(),
            seats: SeatAvailability {
                first_class: self.seat(field::FIRST_CLASS)?,
                second_class: self.seat(field::SECOND_CLASS)?,
                soft_sleeper: self.seat(field::SOFT_SLEEPER)?,
                hard_sleeper: self.seat(field::HARD_SLEEPER)?,
                soft_seat: self.seat(field::SOFT_SEAT)?,
                hard_seat: self.seat(field::HARD_SEAT)?,
                no_seat: self.seat(field::NO_SEAT)?,
            },
        })
    }

    fn seat(&self, index: usize) -> Result<String, DecodeError> {
        let raw = self.field(index)?;
        let value = if raw.is_empty() { NOT_OFFERED } else { raw };
        Ok(value.to_string())
    }
}

/// Remaining tickets per seat class.
///
/// Values are passed through as sent: counts (`"12"`), `"有"` (available),
/// `"无"` (sold out), `"候补"`, and so on. [`NOT_OFFERED`] marks a class the
/// train does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAvailability {
    pub first_class: String,
    pub second_class: String,
    pub soft_sleeper: String,
    pub hard_sleeper: String,
    pub soft_seat: String,
    pub hard_seat: String,
    pub no_seat: String,
}

/// A decoded, display-ready train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTrainRow {
    pub train_code: TrainCode,
    pub from_station_name: String,
    pub to_station_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub seats: SeatAvailability,
}
