// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token-based syntax highlighting.
//!
//! Tokens know their line and column but not their byte offset, so each
//! token is found again by searching for its text forward from the end of
//! the previous one. Whatever lies between two matches is copied through
//! unstyled, which keeps the output a faithful copy of the input. Input
//! with repeated substrings in unusual places can still put a style on the
//! wrong occurrence.

use std::fmt;

use tracing::{instrument, trace};

use crate::source_analysis::{TokenKind, lex_with_trivia};

/// The style a highlighted span is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Keyword,
    String,
    Number,
    Identifier,
    Operator,
    Delimiter,
    Comment,
}

impl HighlightCategory {
    /// The category for a token kind, or `None` for layout.
    #[must_use]
    pub const fn for_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Keyword | TokenKind::Boolean | TokenKind::Null => Some(Self::Keyword),
            TokenKind::String | TokenKind::Char => Some(Self::String),
            TokenKind::Number => Some(Self::Number),
            TokenKind::Identifier => Some(Self::Identifier),
            TokenKind::Operator => Some(Self::Operator),
            TokenKind::Delimiter => Some(Self::Delimiter),
            TokenKind::Comment => Some(Self::Comment),
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Eof => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::Comment => "comment",
        }
    }

    /// The CSS class used in [`highlight`] output.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("hl-{}", self.as_str())
    }
}

impl fmt::Display for HighlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of source text and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'src> {
    pub text: &'src str,
    pub category: Option<HighlightCategory>,
}

impl<'src> Segment<'src> {
    fn plain(text: &'src str) -> Self {
        Self {
            text,
            category: None,
        }
    }
}

/// Splits `source` into styled and unstyled segments.
///
/// Concatenating the segments' text always gives back `source`. When the
/// source does not lex, the whole of it is one unstyled segment.
#[must_use]
pub fn highlight_segments(source: &str) -> Vec<Segment<'_>> {
    let tokens = match lex_with_trivia(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            trace!(%error, "highlighting falls back to plain text");
            return if source.is_empty() {
                Vec::new()
            } else {
                vec![Segment::plain(source)]
            };
        }
    };

    let mut segments = Vec::with_capacity(tokens.len());
    let mut cursor = 0;
    for token in &tokens {
        let text = token.text();
        if text.is_empty() {
            continue;
        }
        let Some(found) = source[cursor..].find(text) else {
            continue;
        };
        let start = cursor + found;
        if start > cursor {
            segments.push(Segment::plain(&source[cursor..start]));
        }
        let end = start + text.len();
        segments.push(Segment {
            text: &source[start..end],
            category: HighlightCategory::for_kind(token.kind()),
        });
        cursor = end;
    }
    if cursor < source.len() {
        segments.push(Segment::plain(&source[cursor..]));
    }
    segments
}

/// Renders `source` as HTML with one `<span class="hl-...">` per styled
/// token. All text is escaped.
#[must_use]
#[instrument(skip_all, fields(len = source.len()))]
pub fn highlight(source: &str) -> String {
    let mut html = String::with_capacity(source.len() * 2);
    for segment in highlight_segments(source) {
        match segment.category {
            Some(category) => {
                html.push_str("<span class=\"");
                html.push_str(&category.css_class());
                html.push_str("\">");
                push_escaped(&mut html, segment.text);
                html.push_str("</span>");
            }
            None => push_escaped(&mut html, segment.text),
        }
    }
    html
}

/// Escapes `text` for use in HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text);
    escaped
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
