// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Tokens, declarations and diagnostics carry a `Position` so the editor can
//! point at the right place. Positions are line/column pairs, not byte
//! offsets; the helpers below convert between the two when needed.

use std::fmt;

/// A position in source text.
///
/// Both fields are 1-based. `column` counts characters (not bytes) from the
/// start of the line.
///
/// # Examples
///
/// ```
/// use javalite_core::source_analysis::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.to_string(), "2:5");
/// assert_eq!(pos.to_byte_offset("abc\n1234567"), Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number in characters (1-based).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The first position of any source text.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Converts this position into a byte offset into `source`.
    ///
    /// A column one past the end of a line maps to the line terminator, which
    /// is where diagnostics such as "missing semicolon" point. Returns `None`
    /// if the line does not exist or the column lies beyond that.
    #[must_use]
    pub fn to_byte_offset(self, source: &str) -> Option<usize> {
        if self.line == 0 || self.column == 0 {
            return None;
        }

        let mut line_start = 0;
        let mut current_line = 1;
        while current_line < self.line {
            let newline = source[line_start..].find('\n')?;
            line_start += newline + 1;
            current_line += 1;
        }

        let line_text = source[line_start..].split('\n').next().unwrap_or("");
        let wanted = (self.column - 1) as usize;
        let mut chars_seen = 0;
        for (offset, _) in line_text.char_indices() {
            if chars_seen == wanted {
                return Some(line_start + offset);
            }
            chars_seen += 1;
        }
        (chars_seen == wanted).then_some(line_start + line_text.len())
    }

    /// Computes the position of a byte offset into `source`.
    ///
    /// Returns `None` if `offset` is out of bounds or not on a char boundary.
    #[must_use]
    pub fn from_byte_offset(source: &str, offset: usize) -> Option<Self> {
        let prefix = source.get(..offset)?;
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        Some(Self::new(
            u32::try_from(line).ok()?,
            u32::try_from(column).ok()?,
        ))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(Position::default(), Position::start());
    }

    #[test]
    fn position_ordering_is_line_major() {
        assert!(Position::new(1, 20) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
    }

    #[test]
    fn to_byte_offset_first_line() {
        let source = "int x;";
        assert_eq!(Position::new(1, 1).to_byte_offset(source), Some(0));
        assert_eq!(Position::new(1, 5).to_byte_offset(source), Some(4));
        // One past the end of the line is allowed.
        assert_eq!(Position::new(1, 7).to_byte_offset(source), Some(6));
        assert_eq!(Position::new(1, 8).to_byte_offset(source), None);
    }

    #[test]
    fn to_byte_offset_later_lines() {
        let source = "a\nbc\ndef";
        assert_eq!(Position::new(2, 2).to_byte_offset(source), Some(3));
        assert_eq!(Position::new(3, 1).to_byte_offset(source), Some(5));
        assert_eq!(Position::new(4, 1).to_byte_offset(source), None);
    }

    #[test]
    fn to_byte_offset_counts_chars_not_bytes() {
        let source = "é = 1;";
        // 'é' is two bytes but one column.
        assert_eq!(Position::new(1, 2).to_byte_offset(source), Some(2));
    }

    #[test]
    fn to_byte_offset_rejects_zero() {
        assert_eq!(Position::new(0, 1).to_byte_offset("x"), None);
        assert_eq!(Position::new(1, 0).to_byte_offset("x"), None);
    }

    #[test]
    fn from_byte_offset_round_trips() {
        let source = "class A {\n  int é;\n}";
        for (offset, _) in source.char_indices() {
            let pos = Position::from_byte_offset(source, offset).expect("in bounds");
            assert_eq!(pos.to_byte_offset(source), Some(offset), "offset {offset}");
        }
    }

    #[test]
    fn from_byte_offset_out_of_bounds() {
        assert_eq!(Position::from_byte_offset("ab", 3), None);
        assert_eq!(Position::from_byte_offset("ab", 2), Some(Position::new(1, 3)));
    }
}
