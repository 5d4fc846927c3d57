//! Terminal output: the two-colour cells and the framed table.

mod ansi;
mod cell;
mod table;

pub use cell::{two_tone_cell, visible_width};
pub use table::{HEADERS, Table, render_trains};
