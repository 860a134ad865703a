// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `javalite parse`: print the outline of a file.

use std::fmt::Write as _;

use camino::Utf8Path;
use javalite_core::language_service::{DocumentSymbol, JavaLitePlugin};
use miette::Result;

use crate::diagnostic::FileDiagnostic;
use crate::sources::read_source;

/// Parses `file` and prints its outline, or fails with the parse error.
pub fn run(file: &Utf8Path) -> Result<()> {
    let source = read_source(file)?;
    let symbols = JavaLitePlugin::new()
        .outline(&source)
        .map_err(|error| FileDiagnostic::from_source_error(&error, file.as_str(), &source))?;
    print!("{}", render(&symbols));
    Ok(())
}

/// One row per symbol, children indented under their parent.
#[must_use]
pub fn render(symbols: &[DocumentSymbol]) -> String {
    let mut out = String::new();
    render_into(&mut out, symbols, 0);
    out
}

fn render_into(out: &mut String, symbols: &[DocumentSymbol], depth: usize) {
    for symbol in symbols {
        let _ = writeln!(
            out,
            "{:indent$}{} {} ({})",
            "",
            symbol.kind.as_str(),
            symbol.detail,
            symbol.position,
            indent = depth * 2
        );
        render_into(out, &symbol.children, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_nested_outline() {
        let symbols = JavaLitePlugin::new()
            .outline("class A {\n  int x;\n  void f() {}\n}")
            .unwrap();
        assert_eq!(
            render(&symbols),
            "class class A (1:7)\n  field int x (2:7)\n  method void f() (3:8)\n"
        );
    }
}
