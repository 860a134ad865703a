// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexing and parsing infrastructure for Javalite source code.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a list of [`Token`]s. Each token
//! carries its lexical category ([`TokenKind`]), its decoded value, the raw
//! source text it was lexed from, and the [`Position`] of its first character.
//!
//! ```
//! use javalite_core::source_analysis::{TokenKind, lex};
//!
//! let tokens = lex("x + 1").unwrap();
//! assert_eq!(tokens.len(), 4); // x, +, 1, EOF
//! assert_eq!(tokens[3].kind(), TokenKind::Eof);
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts tokens into a [`Program`](crate::ast::Program).
//! Parsing fails fast: the first grammar violation is returned as a
//! [`ParseError`] and no partial tree is ever handed back.
//!
//! # Error Handling
//!
//! Unlike a batch compiler front end, both phases are all-or-nothing. A
//! [`LexError`] or [`ParseError`] ends the invocation; callers such as the
//! validator and the highlighter degrade gracefully instead.

mod error;
mod lexer;
mod parser;
mod position;
mod token;


pub use error::{LexError, LexErrorKind, ParseError, SourceError};
pub use lexer::{Lexer, lex, lex_with_trivia};
pub use parser::{MAX_NESTING_DEPTH, parse, parse_source};
pub use position::Position;
pub use token::{KEYWORDS, Token, TokenKind, is_keyword};
