// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Javalite language core.
//!
//! This crate contains everything an embedded code editor needs to work with
//! Javalite, a small Java-like language:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction)
//! - Heuristic validation (lightweight, line-oriented diagnostics)
//! - Syntax highlighting behind a small plugin contract
//!
//! Everything here is synchronous and free of I/O. Each call works on one
//! editor-sized source string and returns plain data.
//!
//! ```
//! use javalite_core::language_service::{JavaLitePlugin, LanguagePlugin};
//!
//! let plugin = JavaLitePlugin::new();
//! let report = plugin.validate("class A { int x = 1; }");
//! assert!(!report.has_errors());
//! ```

pub mod ast;
pub mod config;
pub mod language_service;
pub mod source_analysis;
pub mod validation;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Declaration, Expression, Program, Statement};
    pub use crate::config::ValidatorConfig;
    pub use crate::language_service::{JavaLitePlugin, LanguagePlugin};
    pub use crate::source_analysis::{Position, Token, TokenKind, lex, parse_source};
    pub use crate::validation::{Diagnostic, Severity, ValidationReport, validate};
}
