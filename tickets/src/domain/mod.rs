//! Domain types for the ticket query.
//!
//! Values here are validated at construction, so the decoder, the filter,
//! and the HTTP client can take them at face value.

mod category;
mod date;
mod telecode;
mod train_code;

pub use category::{CategoryFilter, TrainCategory};
pub use date::{DateError, TravelDate};
pub use telecode::{InvalidTelecode, Telecode};
pub use train_code::TrainCode;
