//! Station telecode type.

use std::fmt;

/// Error returned when parsing an invalid telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid telecode {input:?}: {reason}")]
pub struct InvalidTelecode {
    input: String,
    reason: &'static str,
}

/// A valid 3-letter 12306 station telecode (e.g. `BJP` for 北京).
///
/// Telecodes are always 3 uppercase ASCII letters. Any `Telecode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use tickets::domain::Telecode;
///
/// let bjp = Telecode::parse("BJP").unwrap();
/// assert_eq!(bjp.as_str(), "BJP");
///
/// assert!(Telecode::parse("bjp").is_err());
/// assert!(Telecode::parse("BJ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Telecode([u8; 3]);

impl Telecode {
    /// Parse a telecode from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidTelecode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidTelecode {
                input: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidTelecode {
                input: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Telecode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the telecode as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Telecode({})", self.as_str())
    }
}

impl fmt::Display for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
