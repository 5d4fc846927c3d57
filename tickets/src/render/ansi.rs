//! ANSI escape codes used by the table output.

/// Origin station and departure time.
pub const FG_GREEN: &str = "\x1b[32m";
/// Destination station and arrival time.
pub const FG_RED: &str = "\x1b[31m";
/// Restore the terminal's default foreground colour.
pub const FG_DEFAULT: &str = "\x1b[39m";

/// Introduces a control sequence (`ESC [`).
pub const ESC: char = '\x1b';
