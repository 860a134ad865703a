// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Line views over a source buffer.
//!
//! Every pass is line oriented, and most of them must not be fooled by a
//! keyword inside a comment or a brace inside a string. [`SourceText`] splits
//! the buffer once and keeps three views of each line:
//!
//! - `raw`: the line as written (without its terminator)
//! - `code`: comments replaced by spaces
//! - `bare`: comments, and the contents of string and char literals, replaced
//!   by spaces; the quotes themselves stay
//!
//! Masking replaces one char with one space, so char columns agree across
//! the three views.

use crate::source_analysis::Position;

/// A source buffer split into masked lines.
#[derive(Debug, Clone)]
pub struct SourceText<'src> {
    lines: Vec<Line<'src>>,
}

/// One physical line.
#[derive(Debug, Clone)]
pub struct Line<'src> {
    pub number: u32,
    pub raw: &'src str,
    pub code: String,
    pub bare: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mask {
    Code,
    BlockComment,
}

impl<'src> SourceText<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut state = Mask::Code;
        let lines = source
            .split('\n')
            .zip(1u32..)
            .map(|(raw, number)| {
                let raw = raw.strip_suffix('\r').unwrap_or(raw);
                let (code, bare) = mask_line(raw, &mut state);
                Line {
                    number,
                    raw,
                    code,
                    bare,
                }
            })
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line<'src>] {
        &self.lines
    }

    /// The first non-blank line after index `index`, with its index.
    #[must_use]
    pub fn next_significant(&self, index: usize) -> Option<(usize, &Line<'src>)> {
        self.lines
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, line)| !line.is_blank())
    }
}

impl Line<'_> {
    /// The bare view with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.bare.trim()
    }

    /// Returns `true` if the line holds nothing but whitespace and comments.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// The 1-based column of byte offset `byte` in the bare view.
    #[must_use]
    pub fn column_at(&self, byte: usize) -> u32 {
        let prefix = self.bare.get(..byte).unwrap_or(&self.bare);
        u32::try_from(prefix.chars().count() + 1).unwrap_or(u32::MAX)
    }

    /// The position of byte offset `byte` in the bare view.
    #[must_use]
    pub fn position_at(&self, byte: usize) -> Position {
        Position::new(self.number, self.column_at(byte))
    }

    /// The position of the first non-blank char.
    #[must_use]
    pub fn indent_position(&self) -> Position {
        let indent = self.bare.len() - self.bare.trim_start().len();
        self.position_at(indent)
    }

    /// The text of the code view covering the bare-view byte range.
    #[must_use]
    pub fn code_slice(&self, start: usize, end: usize) -> &str {
        let skip = self.bare.get(..start).map_or(0, |s| s.chars().count());
        let take = self.bare.get(start..end).map_or(0, |s| s.chars().count());
        let mut indices = self.code.char_indices().map(|(i, _)| i).skip(skip);
        let from = indices.next().unwrap_or(self.code.len());
        let to = indices.nth(take.saturating_sub(1)).unwrap_or(self.code.len());
        let to = if take == 0 { from } else { to };
        &self.code[from..to]
    }
}

fn mask_line(raw: &str, state: &mut Mask) -> (String, String) {
    let mut code = String::with_capacity(raw.len());
    let mut bare = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if *state == Mask::BlockComment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                code.push_str("  ");
                bare.push_str("  ");
                *state = Mask::Code;
            } else {
                code.push(' ');
                bare.push(' ');
            }
            continue;
        }

        match ch {
            '/' if chars.peek() == Some(&'/') => {
                let rest = 1 + chars.count();
                code.extend(std::iter::repeat_n(' ', rest));
                bare.extend(std::iter::repeat_n(' ', rest));
                break;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                code.push_str("  ");
                bare.push_str("  ");
                *state = Mask::BlockComment;
            }
            '"' | '\'' => {
                code.push(ch);
                bare.push(ch);
                while let Some(inner) = chars.next() {
                    code.push(inner);
                    if inner == ch {
                        bare.push(ch);
                        break;
                    }
                    bare.push(' ');
                    if inner == '\\' {
                        if let Some(escaped) = chars.next() {
                            code.push(escaped);
                            bare.push(' ');
                        }
                    }
                }
            }
            _ => {
                code.push(ch);
                bare.push(ch);
            }
        }
    }

    (code, bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(source: &str) -> Vec<(String, String)> {
        SourceText::new(source)
            .lines()
            .iter()
            .map(|line| (line.code.clone(), line.bare.clone()))
            .collect()
    }

    #[test]
    fn line_comment_is_blanked_in_both_views() {
        let lines = views("int x = 1; // note");
        assert_eq!(lines[0].0, "int x = 1;        ");
        assert_eq!(lines[0].1, "int x = 1;        ");
    }

    #[test]
    fn string_contents_are_blanked_in_bare_only() {
        let lines = views(r#"s = "a;b" + 'c';"#);
        assert_eq!(lines[0].0, r#"s = "a;b" + 'c';"#);
        assert_eq!(lines[0].1, r#"s = "   " + ' ';"#);
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let lines = views(r#"s = "a\"b";"#);
        assert_eq!(lines[0].1, r#"s = "    ";"#);
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        let lines = views(r#"url = "http://x";"#);
        assert_eq!(lines[0].0, r#"url = "http://x";"#);
    }

    #[test]
    fn block_comment_spans_lines() {
        let lines = views("a /* one\ntwo */ b\nc");
        assert_eq!(lines[0].1, "a       ");
        assert_eq!(lines[1].1, "       b");
        assert_eq!(lines[2].1, "c");
    }

    #[test]
    fn views_preserve_char_counts() {
        let source = "String s = \"héllo\"; /* ü */ int y;";
        let text = SourceText::new(source);
        let line = &text.lines()[0];
        assert_eq!(line.raw.chars().count(), line.code.chars().count());
        assert_eq!(line.raw.chars().count(), line.bare.chars().count());
    }

    #[test]
    fn crlf_is_stripped() {
        let text = SourceText::new("a;\r\nb;\r\n");
        assert_eq!(text.lines()[0].raw, "a;");
        assert_eq!(text.lines()[1].raw, "b;");
        assert_eq!(text.lines().len(), 3);
    }

    #[test]
    fn columns_count_chars() {
        let text = SourceText::new("  é = 1;");
        let line = &text.lines()[0];
        let eq = line.bare.find('=').unwrap();
        assert_eq!(line.column_at(eq), 5);
        assert_eq!(line.indent_position(), Position::new(1, 3));
    }

    #[test]
    fn code_slice_maps_bare_ranges() {
        let text = SourceText::new(r#"String s = "héllo";"#);
        let line = &text.lines()[0];
        let start = line.bare.find('"').unwrap();
        let end = line.bare.rfind('"').unwrap() + 1;
        assert_eq!(line.code_slice(start, end), "\"héllo\"");
        assert_eq!(line.code_slice(start, start), "");
    }

    #[test]
    fn next_significant_skips_blank_and_comment_lines() {
        let text = SourceText::new("return x;\n\n  // gone\nfoo();");
        let (index, line) = text.next_significant(0).unwrap();
        assert_eq!(index, 3);
        assert_eq!(line.trimmed(), "foo();");
        assert!(text.next_significant(3).is_none());
    }
}
