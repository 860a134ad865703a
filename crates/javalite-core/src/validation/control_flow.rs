// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statements after a `return`, and value-returning methods without one.

use std::sync::LazyLock;

use regex::Regex;

use super::patterns::method_declaration;
use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};

pub(super) struct ControlFlowPass;

static RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\breturn\b").expect("valid regex"));

impl ValidationPass for ControlFlowPass {
    fn kind(&self) -> PassKind {
        PassKind::ControlFlow
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        _config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        check_unreachable(source, diagnostics);
        check_missing_return(source, diagnostics);
    }
}

/// A line starting with `return ...;` must be the last in its block.
fn check_unreachable(source: &SourceText<'_>, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in source.lines().iter().enumerate() {
        let trimmed = line.trimmed();
        if !(RETURN.find(trimmed).is_some_and(|m| m.start() == 0) && trimmed.ends_with(';')) {
            continue;
        }
        let Some((_, next)) = source.next_significant(index) else {
            continue;
        };
        let next_trimmed = next.trimmed();
        let closes_block = next_trimmed.starts_with('}')
            || next_trimmed.starts_with("case ")
            || next_trimmed.starts_with("default");
        if !closes_block {
            diagnostics.push(Diagnostic::for_code(
                codes::UNREACHABLE_CODE,
                next.indent_position(),
                "Unreachable code after return statement",
            ));
        }
    }
}

fn check_missing_return(source: &SourceText<'_>, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in source.lines().iter().enumerate() {
        let Some(method) = method_declaration(&line.bare) else {
            continue;
        };
        if !method.returns_value()
            || method
                .modifiers
                .iter()
                .any(|m| matches!(*m, "abstract" | "native"))
        {
            continue;
        }
        let Some(body) = method_body(source, index, method.open_paren) else {
            continue;
        };
        if !RETURN.is_match(&body) {
            diagnostics.push(Diagnostic::for_code(
                codes::MISSING_RETURN,
                line.position_at(method.offset),
                format!(
                    "Method '{}' must return a value of type '{}'",
                    method.name, method.return_type
                ),
            ));
        }
    }
}

/// The bare text between a method's braces.
///
/// Scanning starts just inside the parameter list's `(`. Returns `None` for
/// a method without a body, or one whose braces never balance.
fn method_body(source: &SourceText<'_>, line_index: usize, from: usize) -> Option<String> {
    let mut parens = 1usize;
    let mut braces = 0usize;
    let mut body = String::new();

    for (index, line) in source.lines().iter().enumerate().skip(line_index) {
        let text = if index == line_index {
            line.bare.get(from..)?
        } else {
            body.push('\n');
            line.bare.as_str()
        };
        for ch in text.chars() {
            if braces > 0 {
                match ch {
                    '{' => braces += 1,
                    '}' => {
                        braces -= 1;
                        if braces == 0 {
                            return Some(body);
                        }
                    }
                    _ => {}
                }
                body.push(ch);
                continue;
            }
            match ch {
                '(' => parens += 1,
                ')' => parens = parens.saturating_sub(1),
                ';' if parens == 0 => return None,
                '{' if parens == 0 => braces = 1,
                _ => {}
            }
        }
    }
    None
}
