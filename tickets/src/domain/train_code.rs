//! Train code (车次) type.

use std::fmt;

/// A train code as printed on the ticket, e.g. `G103`, `D2281`, `K205`.
///
/// The leading character identifies the service class: `G` high-speed,
/// `D` EMU, `Z` direct express, `T` express, `K` fast. Ordinary trains
/// carry purely numeric codes such as `1461`. The only structural
/// requirement is that the code is non-empty, so `TrainCode::parse`
/// returns `None` for an empty string.
///
/// # Examples
///
/// ```
/// use tickets::domain::TrainCode;
///
/// let code = TrainCode::parse("G103").unwrap();
/// assert_eq!(code.as_str(), "G103");
/// assert!(TrainCode::parse("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainCode(String);

impl TrainCode {
    /// Parse a train code, rejecting the empty string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            None
        } else {
            Some(TrainCode(s.to_string()))
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lower-cased first character of `code`, if it has one.
pub(crate) fn category_of(code: &str) -> Option<char> {
    code.chars().next().and_then(|c| c.to_lowercase().next())
}

impl fmt::Debug for TrainCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainCode({})", self.0)
    }
}

impl fmt::Display for TrainCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
