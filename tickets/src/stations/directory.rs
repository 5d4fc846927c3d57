//! Station name lookup.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::Telecode;

use super::error::StationError;

/// Station list compiled into the binary.
const BUNDLED_STATION_NAMES: &str = include_str!("../../data/station_name.js");

/// Telecode → station name resolution used by the record decoder.
pub trait StationLookup {
    /// Name of the station with this telecode, if known.
    fn name_of(&self, code: &Telecode) -> Option<&str>;
}

impl StationLookup for HashMap<Telecode, String> {
    fn name_of(&self, code: &Telecode) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

/// Two lookups stacked: names come from `primary` when it has them and
/// from `fallback` otherwise.
pub struct Layered<'a, A: ?Sized, B: ?Sized> {
    primary: &'a A,
    fallback: &'a B,
}

impl<'a, A: ?Sized, B: ?Sized> Layered<'a, A, B> {
    pub fn new(primary: &'a A, fallback: &'a B) -> Self {
        Self { primary, fallback }
    }
}

impl<A, B> StationLookup for Layered<'_, A, B>
where
    A: StationLookup + ?Sized,
    B: StationLookup + ?Sized,
{
    fn name_of(&self, code: &Telecode) -> Option<&str> {
        self.primary
            .name_of(code)
            .or_else(|| self.fallback.name_of(code))
    }
}

/// Two-way station lookup.
///
/// Names resolve by their Chinese form (`北京南`) or by full pinyin
/// (`beijingnan`, case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: HashMap<Telecode, String>,
    codes: HashMap<String, Telecode>,
}

impl StationDirectory {
    /// Parse a `station_name.js` payload.
    ///
    /// Entries are `@`-separated, each of the form
    /// `abbr|name|TELECODE|pinyin|short|index`. Entries with fewer than three
    /// fields or an invalid telecode are skipped.
    pub fn parse(source: &str) -> Result<Self, StationError> {
        let mut directory = Self::default();

        for entry in source.split('@').skip(1) {
            let entry = entry.trim_end().trim_end_matches(';').trim_end_matches('\'');
            let fields: Vec<&str> = entry.split('|').collect();

            let (Some(name), Some(code)) = (fields.get(1), fields.get(2)) else {
                debug!(entry, "skipping short station entry");
                continue;
            };

            let code = match Telecode::parse(code) {
                Ok(code) => code,
                Err(e) => {
                    warn!(name, error = %e, "skipping station with bad telecode");
                    continue;
                }
            };

            directory.insert(name, code, fields.get(3).copied());
        }

        if directory.is_empty() {
            return Err(StationError::Empty);
        }

        debug!(stations = directory.len(), "parsed station list");
        Ok(directory)
    }

    /// The station list bundled with the binary.
    pub fn bundled() -> Result<Self, StationError> {
        Self::parse(BUNDLED_STATION_NAMES)
    }

    /// Read a `station_name.js` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source)
    }

    fn insert(&mut self, name: &str, code: Telecode, pinyin: Option<&str>) {
        self.names.entry(code).or_insert_with(|| name.to_string());
        self.codes.entry(name.to_string()).or_insert(code);
        if let Some(pinyin) = pinyin.filter(|p| !p.is_empty()) {
            self.codes.entry(pinyin.to_lowercase()).or_insert(code);
        }
    }

    /// Look up the telecode for a station name or its pinyin.
    pub fn telecode(&self, name: &str) -> Result<Telecode, StationError> {
        let name = name.trim();
        self.codes
            .get(name)
            .or_else(|| self.codes.get(&name.to_lowercase()))
            .copied()
            .ok_or_else(|| StationError::UnknownName(name.to_string()))
    }

    /// Number of distinct telecodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl StationLookup for StationDirectory {
    fn name_of(&self, code: &Telecode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }
}
