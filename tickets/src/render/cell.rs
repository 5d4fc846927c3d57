//! Cell formatting helpers.

use super::ansi::{ESC, FG_DEFAULT, FG_GREEN, FG_RED};

/// A two-line cell: `first` in green above `second` in red.
///
/// Used for the station and time columns, where the first line belongs to
/// the origin and the second to the destination.
pub fn two_tone_cell(first: &str, second: &str) -> String {
    format!("{FG_GREEN}{first}{FG_DEFAULT}\n{FG_RED}{second}{FG_DEFAULT}")
}

/// Terminal columns taken by `line`.
///
/// Escape sequences take no space and wide (CJK, full-width) characters
/// take two columns.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            // CSI: ESC '[' params... final byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        if ch.is_control() {
            continue;
        }
        width += if is_wide(ch) { 2 } else { 1 };
    }

    width
}

fn is_wide(ch: char) -> bool {
    let code = ch as u32;
    (0x1100..=0x115F).contains(&code) // Hangul Jamo
        || (0x2E80..=0x303E).contains(&code) // CJK radicals, symbols and punctuation
        || (0x3040..=0x30FF).contains(&code) // Hiragana, Katakana
        || (0x3400..=0x4DBF).contains(&code) // CJK Extension A
        || (0x4E00..=0x9FFF).contains(&code) // CJK Unified Ideographs
        || (0xAC00..=0xD7AF).contains(&code) // Hangul syllables
        || (0xF900..=0xFAFF).contains(&code) // CJK Compatibility Ideographs
        || (0xFF01..=0xFF60).contains(&code) // Full-width forms
        || (0xFFE0..=0xFFE6).contains(&code)
        || (0x20000..=0x2FFFD).contains(&code) // CJK Extension B onwards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tone_cell_colours_each_line() {
        let cell = two_tone_cell("北京南", "上海虹桥");
        let lines: Vec<&str> = cell.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "\x1b[32m北京南\x1b[39m");
        assert_eq!(lines[1], "\x1b[31m上海虹桥\x1b[39m");
    }

    #[test]
    fn two_tone_cell_uses_different_colours() {
        let cell = two_tone_cell("08:00", "13:28");
        let (first, second) = cell.split_once('\n').unwrap();
        assert!(first.starts_with(FG_GREEN));
        assert!(second.starts_with(FG_RED));
        assert_ne!(FG_GREEN, FG_RED);
    }

    #[test]
    fn width_of_ascii() {
        assert_eq!(visible_width("G103"), 4);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn width_of_cjk() {
        assert_eq!(visible_width("北京南"), 6);
        assert_eq!(visible_width("有"), 2);
        assert_eq!(visible_width("一等座"), 6);
    }

    #[test]
    fn escapes_take_no_space() {
        assert_eq!(visible_width("\x1b[32m08:00\x1b[39m"), 5);
        assert_eq!(visible_width("\x1b[31m上海\x1b[0m"), 4);
    }

    #[test]
    fn cell_lines_measure_their_text() {
        let cell = two_tone_cell("北京", "13:28");
        let widths: Vec<usize> = cell.lines().map(visible_width).collect();
        assert_eq!(widths, [4, 5]);
    }
}
