// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Javalite source code.
//!
//! The parser builds a [`Program`] from a token stream with one token of
//! lookahead, plus bounded peeking where Java syntax is ambiguous.
//!
//! # Failure Model
//!
//! Parsing is fail-fast. The first grammar violation is returned as a
//! [`ParseError`] naming the offending token; there is no resynchronisation
//! and no partially built tree. Callers that want best-effort diagnostics
//! (the validator) work from the source text instead.
//!
//! # Expression Precedence
//!
//! Lowest to highest:
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | ternary | `? :` | Right |
//! | logical or | `\|\|` | Left |
//! | logical and | `&&` | Left |
//! | bitwise or | `\|` | Left |
//! | bitwise xor | `^` | Left |
//! | bitwise and | `&` | Left |
//! | assignment | `=` `+=` `>>>=` ... | Right |
//! | equality | `==` `!=` | Left |
//! | relational | `<` `>` `<=` `>=` `instanceof` | Left |
//! | shift | `<<` `>>` `>>>` | Left |
//! | additive | `+` `-` | Left |
//! | multiplicative | `*` `/` `%` | Left |
//! | unary | `!` `-` `+` `~` `++` `--` (prefix) | Right |
//! | postfix | `++` `--` | Left |
//! | access | call, `.member`, `[index]` | Left |
//!
//! Assignment binds tighter than the logical and bitwise operators, so
//! `a = b && c` parses as `(a = b) && c`.
//!
//! # Usage
//!
//! ```
//! use javalite_core::source_analysis::{lex, parse};
//!
//! let tokens = lex("class A { int x = 3 + 4; }").unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.declarations.len(), 1);
//! ```

use ecow::EcoString;

use crate::ast::Program;
use crate::source_analysis::{ParseError, SourceError, Token, TokenKind, lex};

mod declarations;
mod expressions;
mod statements;


/// Maximum nesting depth for expressions and statements.
///
/// Prevents stack overflow on deeply nested input (`((((...))))`,
/// `if (a) if (b) ...`). As a second line of defence, `stacker::maybe_grow`
/// is used at the recursive entry points so the stack is extended on the
/// heap if needed.
pub const MAX_NESTING_DEPTH: usize = 128;

pub(super) type ParseResult<T> = Result<T, ParseError>;

/// Names of the primitive types.
pub(super) const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short",
];

/// Parses a token stream into a [`Program`].
///
/// Whitespace, newline and comment tokens are ignored, so both [`lex`] and
/// [`lex_with_trivia`](super::lex_with_trivia) output are accepted. A
/// missing `Eof` terminator is tolerated.
///
/// # Errors
///
/// Returns the first grammar violation.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    tracing::trace!(declarations = program.declarations.len(), "parsed program");
    Ok(program)
}

/// Lexes and parses `source`.
///
/// # Errors
///
/// Returns the lexical error or the first grammar violation.
///
/// # Examples
///
/// ```
/// use javalite_core::source_analysis::{SourceError, parse_source};
///
/// assert!(parse_source("class A {}").is_ok());
/// assert!(matches!(parse_source("class A {"), Err(SourceError::Parse(_))));
/// assert!(matches!(parse_source("class \"A {}"), Err(SourceError::Lex(_))));
/// ```
pub fn parse_source(source: &str) -> Result<Program, SourceError> {
    let tokens = lex(source)?;
    Ok(parse(tokens)?)
}

/// The parser state.
pub(super) struct Parser {
    /// Significant tokens, always terminated by `Eof`.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Current nesting depth (guards against stack overflow).
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| !t.kind().is_trivia());
        if !tokens.last().is_some_and(|t| t.kind().is_eof()) {
            let end = tokens.last().map(Token::position).unwrap_or_default();
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            current: 0,
            nesting_depth: 0,
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    pub(super) fn current_token(&self) -> &Token {
        self.peek_at(0)
    }

    /// Returns the token `offset` places ahead, or `Eof` past the end.
    pub(super) fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.current + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Checks if we're at the end of input.
    pub(super) fn is_at_end(&self) -> bool {
        self.current_token().kind().is_eof()
    }

    /// Advances to the next token and returns the consumed one.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    pub(super) fn check_keyword(&self, keyword: &str) -> bool {
        self.current_token().is_keyword(keyword)
    }

    pub(super) fn check_operator(&self, op: &str) -> bool {
        self.current_token().is_operator(op)
    }

    pub(super) fn check_delimiter(&self, delim: &str) -> bool {
        self.current_token().is_delimiter(delim)
    }

    pub(super) fn check_kind(&self, kind: TokenKind) -> bool {
        self.current_token().kind() == kind
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn match_keyword(&mut self, keyword: &str) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given operator.
    pub(super) fn match_operator(&mut self, op: &str) -> bool {
        let matched = self.check_operator(op);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given delimiter.
    pub(super) fn match_delimiter(&mut self, delim: &str) -> bool {
        let matched = self.check_delimiter(delim);
        if matched {
            self.advance();
        }
        matched
    }

    pub(super) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected '{keyword}'")))
        }
    }

    pub(super) fn expect_operator(&mut self, op: &str) -> ParseResult<Token> {
        if self.check_operator(op) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected '{op}'")))
        }
    }

    pub(super) fn expect_delimiter(&mut self, delim: &str) -> ParseResult<Token> {
        if self.check_delimiter(delim) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected '{delim}'")))
        }
    }

    /// Expects an identifier, returning its token. `what` names the role
    /// in the error message, e.g. "method name".
    pub(super) fn expect_identifier(&mut self, what: &str) -> ParseResult<Token> {
        if self.check_kind(TokenKind::Identifier) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    /// Expects a dotted name: `a`, `a.b.C`.
    pub(super) fn parse_qualified_name(&mut self, what: &str) -> ParseResult<EcoString> {
        let mut name = EcoString::from(self.expect_identifier(what)?.value());
        while self.check_delimiter(".") && self.peek_at(1).kind() == TokenKind::Identifier {
            self.advance();
            name.push('.');
            name.push_str(self.advance().value());
        }
        Ok(name)
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Builds an error at the current token.
    pub(super) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.current_token().clone(), message)
    }

    /// Increments the nesting depth, failing once it exceeds
    /// [`MAX_NESTING_DEPTH`]. Pair every `Ok` with [`Self::leave_nesting`].
    pub(super) fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "nesting is too deep (maximum {MAX_NESTING_DEPTH} levels)"
            )));
        }
        self.nesting_depth += 1;
        Ok(())
    }

    /// Decrements the nesting depth (pair with [`Self::enter_nesting`]).
    pub(super) fn leave_nesting(&mut self) {
        debug_assert!(
            self.nesting_depth > 0,
            "leave_nesting called without matching enter_nesting"
        );
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    /// Runs `f` one nesting level deeper, on a grown stack if necessary.
    ///
    /// 32 KiB red zone, 256 KiB new segment; the depth cap bounds how many
    /// segments are ever needed.
    pub(super) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        stacker::maybe_grow(32 * 1024, 256 * 1024, || {
            self.enter_nesting()?;
            let result = f(self);
            self.leave_nesting();
            result
        })
    }
}
