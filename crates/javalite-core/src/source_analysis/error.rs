// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for lexing and parsing.
//!
//! Both kinds are fatal for the invocation that raised them. They carry a
//! [`Position`] rather than a byte span; front ends that want a labelled
//! report convert it with [`Position::to_byte_offset`].

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::{Position, Token};

/// A lexical error encountered during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} at line {}, column {}", .position.line, .position.column)]
#[diagnostic(code(javalite::lex))]
pub struct LexError {
    /// The kind of lexical error.
    pub kind: LexErrorKind,
    /// Where the offending literal, comment or character starts.
    pub position: Position,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedChar(c), position)
    }

    /// Creates an "unterminated literal" error.
    #[must_use]
    pub fn unterminated_literal(position: Position) -> Self {
        Self::new(LexErrorKind::UnterminatedLiteral, position)
    }

    /// Creates an "unterminated comment" error.
    #[must_use]
    pub fn unterminated_comment(position: Position) -> Self {
        Self::new(LexErrorKind::UnterminatedComment, position)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A string or char literal reached end of input before its closing quote.
    #[error("unterminated literal")]
    UnterminatedLiteral,

    /// A block comment reached end of input before `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A character that starts no token.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// A grammar violation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "{message} at line {}, column {} (found {})",
    .token.line(),
    .token.column(),
    describe(.token)
)]
#[diagnostic(code(javalite::parse))]
pub struct ParseError {
    /// The token the parser could not accept.
    pub token: Token,
    /// What the parser expected.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error at `token`.
    #[must_use]
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }

    /// The position of the offending token.
    #[must_use]
    pub fn position(&self) -> Position {
        self.token.position()
    }
}

fn describe(token: &Token) -> String {
    if token.kind().is_eof() {
        "end of input".to_string()
    } else {
        format!("'{}'", token.text())
    }
}

/// Either failure of [`parse_source`](super::parse_source).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SourceError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SourceError {
    /// The position the error refers to.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Lex(err) => err.position,
            Self::Parse(err) => err.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::TokenKind;

    #[test]
    fn lex_error_display() {
        let err = LexError::unexpected_char('#', Position::new(1, 5));
        assert_eq!(err.to_string(), "unexpected character '#' at line 1, column 5");

        let err = LexError::unterminated_literal(Position::new(3, 9));
        assert_eq!(err.to_string(), "unterminated literal at line 3, column 9");
    }

    #[test]
    fn lex_error_code() {
        let err = LexError::unterminated_comment(Position::start());
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("javalite::lex"));
    }

    #[test]
    fn parse_error_display_names_token() {
        let token = Token::verbatim(TokenKind::Delimiter, "}", Position::new(2, 1));
        let err = ParseError::new(token, "expected ';'");
        assert_eq!(
            err.to_string(),
            "expected ';' at line 2, column 1 (found '}')"
        );
    }

    #[test]
    fn parse_error_display_at_eof() {
        let err = ParseError::new(Token::eof(Position::new(1, 10)), "expected '}'");
        assert!(err.to_string().ends_with("(found end of input)"));
    }

    #[test]
    fn source_error_position() {
        let lex: SourceError = LexError::unterminated_literal(Position::new(4, 2)).into();
        assert_eq!(lex.position(), Position::new(4, 2));
        let code = lex.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("javalite::lex"));
    }
}
