// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Javalite lexical analysis.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] naming its lexical category
//! - A decoded value (string and char literals are unescaped, without quotes)
//! - The raw source text it was lexed from
//! - The [`Position`] of its first character
//!
//! Layout (whitespace, newlines) and comments are tokens too, but only
//! [`lex_with_trivia`](super::lex_with_trivia) hands them out.

use ecow::EcoString;

use super::Position;

/// The words the lexer classifies as [`TokenKind::Keyword`].
///
/// `true`, `false` and `null` are absent: they get their own literal kinds.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
];

/// Returns `true` if `word` is a reserved keyword.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word: `class`, `int`, `return`
    Keyword,
    /// A name: `foo`, `_tmp`, `$value`
    Identifier,
    /// A decimal numeric literal: `42`, `3.14`
    Number,
    /// A double-quoted string literal: `"hello"`
    String,
    /// A single-quoted char literal: `'a'`
    Char,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// An operator: `+`, `>>>=`, `?`
    Operator,
    /// Punctuation: `( ) { } [ ] ; , .`
    Delimiter,
    /// A line or block comment, including its markers.
    Comment,
    /// Spaces, tabs, carriage returns and form feeds.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is a literal value.
    ///
    /// Identifiers are names that reference values, so they don't count.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::Char | Self::Boolean | Self::Null
        )
    }

    /// Returns `true` for tokens the parser never sees.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::Comment)
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// A short lowercase name, used in token dumps and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::Eof => "eof",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, value, source text and position.
///
/// # Examples
///
/// ```
/// use javalite_core::source_analysis::{Position, Token, TokenKind};
///
/// let token = Token::new(TokenKind::String, "a\tb", "\"a\\tb\"", Position::new(1, 1));
/// assert_eq!(token.value(), "a\tb");
/// assert_eq!(token.text(), "\"a\\tb\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: EcoString,
    text: EcoString,
    position: Position,
}

impl Token {
    /// Creates a token whose decoded value differs from its source text.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        value: impl Into<EcoString>,
        text: impl Into<EcoString>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            text: text.into(),
            position,
        }
    }

    /// Creates a token whose value is its source text.
    #[must_use]
    pub fn verbatim(kind: TokenKind, text: impl Into<EcoString>, position: Position) -> Self {
        let text = text.into();
        Self {
            kind,
            value: text.clone(),
            text,
            position,
        }
    }

    /// Creates the end-of-input marker.
    #[must_use]
    pub fn eof(position: Position) -> Self {
        Self::verbatim(TokenKind::Eof, "", position)
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the decoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the raw source lexeme.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the position of the first character.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the line of the first character.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the column of the first character.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Returns `true` if this token has the given kind and source text.
    #[must_use]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Returns `true` if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    /// Returns `true` if this token is the given operator.
    #[must_use]
    pub fn is_operator(&self, op: &str) -> bool {
        self.is(TokenKind::Operator, op)
    }

    /// Returns `true` if this token is the given delimiter.
    #[must_use]
    pub fn is_delimiter(&self, delim: &str) -> bool {
        self.is(TokenKind::Delimiter, delim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_sorted() {
        // `is_keyword` relies on binary search.
        let mut sorted = KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, KEYWORDS);
    }

    #[test]
    fn keyword_lookup() {
        assert!(is_keyword("class"));
        assert!(is_keyword("instanceof"));
        assert!(!is_keyword("true"));
        assert!(!is_keyword("null"));
        assert!(!is_keyword("String"));
    }

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::Keyword.to_string(), "keyword");
        assert_eq!(TokenKind::Eof.to_string(), "eof");
        assert_eq!(TokenKind::Newline.as_str(), "newline");
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::Number.is_literal());
        assert!(TokenKind::Null.is_literal());
        assert!(!TokenKind::Identifier.is_literal());

        assert!(TokenKind::Comment.is_trivia());
        assert!(TokenKind::Newline.is_trivia());
        assert!(!TokenKind::Delimiter.is_trivia());

        assert!(TokenKind::Eof.is_eof());
    }

    #[test]
    fn token_accessors() {
        let token = Token::verbatim(TokenKind::Identifier, "foo", Position::new(2, 3));
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.value(), "foo");
        assert_eq!(token.text(), "foo");
        assert_eq!(token.line(), 2);
        assert_eq!(token.column(), 3);
    }

    #[test]
    fn token_matchers() {
        let pos = Position::start();
        assert!(Token::verbatim(TokenKind::Keyword, "if", pos).is_keyword("if"));
        assert!(!Token::verbatim(TokenKind::Identifier, "if", pos).is_keyword("if"));
        assert!(Token::verbatim(TokenKind::Operator, "+=", pos).is_operator("+="));
        assert!(Token::verbatim(TokenKind::Delimiter, ";", pos).is_delimiter(";"));
    }

    #[test]
    fn eof_token_is_empty() {
        let eof = Token::eof(Position::new(4, 1));
        assert!(eof.kind().is_eof());
        assert!(eof.text().is_empty());
    }
}
