// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `javalite tokens`: print the token stream of a file.

use std::fmt::Write as _;

use camino::Utf8Path;
use javalite_core::source_analysis::{SourceError, Token, lex, lex_with_trivia};
use miette::Result;

use crate::diagnostic::FileDiagnostic;
use crate::sources::read_source;

/// Prints one `line:column kind text` row per token, `Eof` included.
pub fn run(file: &Utf8Path, trivia: bool) -> Result<()> {
    let source = read_source(file)?;
    let tokens = if trivia {
        lex_with_trivia(&source)
    } else {
        lex(&source)
    };
    let tokens = tokens.map_err(|error| {
        FileDiagnostic::from_source_error(&SourceError::Lex(error), file.as_str(), &source)
    })?;
    print!("{}", render(&tokens));
    Ok(())
}

/// The listing for `tokens`. Token text is printed with Rust string
/// escapes, so layout tokens stay on one row.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}:{} {} {:?}",
            token.line(),
            token.column(),
            token.kind(),
            token.text()
        );
    }
    out
}
