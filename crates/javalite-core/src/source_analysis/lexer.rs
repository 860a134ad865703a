// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Javalite source code.
//!
//! This module converts source text into a sequence of [`Token`]s. The lexer
//! is hand-written and stops at the first malformed literal or unknown
//! character with a [`LexError`].
//!
//! Whitespace is exactly space, tab, carriage return and form feed. A byte
//! order mark (`U+FEFF`) is not whitespace: callers reading files that may
//! carry one must strip it before lexing, or the lexer reports it as an
//! unexpected character at 1:1.
//!
//! # Example
//!
//! ```
//! use javalite_core::source_analysis::{Lexer, TokenKind};
//!
//! let kinds: Vec<_> = Lexer::new("x += 1.5;")
//!     .map(|t| t.map(|t| t.kind()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Whitespace,
//!         TokenKind::Operator,
//!         TokenKind::Whitespace,
//!         TokenKind::Number,
//!         TokenKind::Delimiter,
//!     ]
//! );
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::token::is_keyword;
use super::{LexError, Position, Token, TokenKind};

/// Operators, longest first so the first match is the longest match.
const OPERATORS: &[&str] = &[
    ">>>=", "<<=", ">>=", ">>>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+", "-", "*", "/", "%", "=", "<", ">",
    "!", "~", "&", "|", "^", "?", ":",
];

const DELIMITERS: &str = "(){}[];,.";

/// A lexer that tokenizes Javalite source code.
///
/// The lexer implements [`Iterator`], yielding every token including layout
/// and comments. The end-of-input marker is not yielded; iteration ends
/// after the first error.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte offset in source.
    offset: usize,
    /// Line/column of the next character.
    position: Position,
    /// Set once an error or end of input has been produced.
    finished: bool,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.offset..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            position: Position::start(),
            finished: false,
        }
    }

    /// Lexes the whole input, trivia included, terminated by an `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`]; no partial token list is produced.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind().is_eof();
            tokens.push(token);
            if is_eof {
                tracing::trace!(count = tokens.len(), "lexed source");
                return Ok(tokens);
            }
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks `n+1` characters ahead without consuming (n=0 is `peek_char`).
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, c)| c)
    }

    /// Consumes the next character, keeping line and column current.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.offset = pos + c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Source text from `start` to the current offset.
    fn text_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset]
    }

    /// Lexes the next token, trivia included.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for an unterminated literal or comment, or a
    /// character that starts no token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.offset;
        let position = self.position;

        let Some(c) = self.peek_char() else {
            return Ok(Token::eof(position));
        };

        let kind = match c {
            '\n' => {
                self.advance();
                TokenKind::Newline
            }
            ' ' | '\t' | '\r' | '\u{000C}' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\u{000C}'));
                TokenKind::Whitespace
            }
            '/' if self.peek_char_n(1) == Some('/') => {
                self.advance_while(|c| c != '\n');
                TokenKind::Comment
            }
            '/' if self.peek_char_n(1) == Some('*') => {
                self.lex_block_comment(position)?;
                TokenKind::Comment
            }
            '"' | '\'' => return self.lex_quoted(c, start, position),
            c if is_identifier_start(c) => {
                self.advance_while(is_identifier_continue);
                classify_word(self.text_from(start))
            }
            c if c.is_ascii_digit() => {
                self.lex_number();
                TokenKind::Number
            }
            c if DELIMITERS.contains(c) => {
                self.advance();
                TokenKind::Delimiter
            }
            c => {
                let rest = &self.source[start..];
                let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
                    return Err(LexError::unexpected_char(c, position));
                };
                for _ in 0..op.len() {
                    self.advance();
                }
                TokenKind::Operator
            }
        };

        Ok(Token::verbatim(kind, self.text_from(start), position))
    }

    /// Lexes a block comment: `/* ... */`
    fn lex_block_comment(&mut self, opened_at: Position) -> Result<(), LexError> {
        self.advance(); // /
        self.advance(); // *
        loop {
            match self.advance() {
                None => return Err(LexError::unterminated_comment(opened_at)),
                Some('*') if self.peek_char() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    /// Lexes digits, optionally followed by `.` and more digits.
    ///
    /// The `.` is only consumed when a digit follows it, so `1.toString`
    /// stays a number followed by member access.
    fn lex_number(&mut self) {
        self.advance_while(|c| c.is_ascii_digit());
        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // .
            self.advance_while(|c| c.is_ascii_digit());
        }
    }

    /// Lexes a string (`"..."`) or char (`'...'`) literal.
    ///
    /// The token value is the unescaped contents. Reaching end of input
    /// before the closing quote is reported at the opening quote.
    fn lex_quoted(
        &mut self,
        quote: char,
        start: usize,
        opened_at: Position,
    ) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut value = EcoString::new();
        loop {
            match self.advance() {
                None => return Err(LexError::unterminated_literal(opened_at)),
                Some(c) if c == quote => break,
                Some('\\') => {
                    let Some(escaped) = self.advance() else {
                        return Err(LexError::unterminated_literal(opened_at));
                    };
                    value.push(unescape(escaped));
                }
                Some(c) => value.push(c),
            }
        }
        let kind = if quote == '"' {
            TokenKind::String
        } else {
            TokenKind::Char
        };
        Ok(Token::new(kind, value, self.text_from(start), opened_at))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind().is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

fn classify_word(word: &str) -> TokenKind {
    match word {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        w if is_keyword(w) => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

/// Maps the character after a backslash to its literal value.
///
/// Unknown escapes pass the character through unchanged.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Lexes `source` into its significant tokens, terminated by `Eof`.
///
/// Whitespace, newline and comment tokens are dropped.
///
/// # Errors
///
/// Returns the first [`LexError`] in `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Lexer::new(source).tokenize()?;
    tokens.retain(|t| !t.kind().is_trivia());
    Ok(tokens)
}

/// Lexes `source` into every token including layout and comments,
/// terminated by `Eof`.
///
/// # Errors
///
/// Returns the first [`LexError`] in `source`.
pub fn lex_with_trivia(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
