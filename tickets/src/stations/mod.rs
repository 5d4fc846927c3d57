//! Station directory: name ↔ telecode lookup.
//!
//! The directory is built from 12306's `station_name.js` list. A copy is
//! bundled into the binary; a fresher one can be read from disk or fetched
//! from 12306 at startup.

mod client;
mod directory;
mod error;

pub use client::{StationClient, StationClientConfig};
pub use directory::{Layered, StationDirectory, StationLookup};
pub use error::StationError;
