// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lines that look like statements but do not end in `;`.
//!
//! A line is suspect when it ends in something that can finish an
//! expression (an identifier, a literal, `)`, `]`, `++` or `--`) and neither
//! it nor the line after it suggests the statement carries on.

use super::patterns::{is_identifier_char, type_declarations};
use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};

pub(super) struct SyntaxPass;

/// Words that start a line which never needs a `;` of its own.
const BLOCK_KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "try",
    "catch",
    "finally",
    "case",
    "default",
    "class",
    "interface",
    "extends",
    "implements",
    "throws",
];

/// Leading chars of a line that continues the previous one.
const CONTINUATION_CHARS: &[char] = &[
    '{', '.', '+', '-', '*', '/', '%', '&', '|', '^', '?', ':', '=', '<', '>', ')', ']', ',',
];

impl ValidationPass for SyntaxPass {
    fn kind(&self) -> PassKind {
        PassKind::Syntax
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        _config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut paren_depth = 0usize;
        for (index, line) in source.lines().iter().enumerate() {
            for ch in line.bare.chars() {
                match ch {
                    '(' => paren_depth += 1,
                    ')' => paren_depth = paren_depth.saturating_sub(1),
                    _ => {}
                }
            }

            let trimmed = line.trimmed();
            if trimmed.is_empty() || paren_depth > 0 || !ends_like_statement(trimmed) {
                continue;
            }
            if starts_block(trimmed) || type_declarations(&line.bare).next().is_some() {
                continue;
            }
            let continued = source
                .next_significant(index)
                .is_some_and(|(_, next)| continues(next.trimmed()));
            if continued {
                continue;
            }

            let end = line.bare.trim_end().len();
            diagnostics.push(Diagnostic::for_code(
                codes::MISSING_SEMICOLON,
                line.position_at(end),
                "Missing semicolon at end of statement",
            ));
        }
    }
}

fn ends_like_statement(trimmed: &str) -> bool {
    if trimmed.ends_with("++") || trimmed.ends_with("--") {
        return true;
    }
    trimmed
        .chars()
        .next_back()
        .is_some_and(|ch| is_identifier_char(ch) || matches!(ch, ')' | ']' | '"' | '\''))
}

fn continues(next: &str) -> bool {
    next.starts_with(CONTINUATION_CHARS)
        || matches!(
            first_word(next),
            "extends" | "implements" | "throws" | "instanceof"
        )
}

fn first_word(trimmed: &str) -> &str {
    let end = trimmed
        .find(|ch: char| !is_identifier_char(ch))
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

fn starts_block(trimmed: &str) -> bool {
    let trimmed = trimmed.trim_start_matches(|ch: char| ch == '}' || ch.is_whitespace());
    if trimmed.starts_with('@') {
        return true;
    }
    BLOCK_KEYWORDS.contains(&first_word(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{located, run};

    fn missing(source: &str) -> Vec<(u32, u32)> {
        located(&run(&SyntaxPass, source))
            .into_iter()
            .map(|(_, line, column)| (line, column))
            .collect()
    }

    #[test]
    fn statement_without_semicolon() {
        assert_eq!(missing("int x = 1\nint y = 2;"), vec![(1, 10)]);
    }

    #[test]
    fn each_statement_ending_is_checked() {
        let source = "a = f()\nb = xs[0]\nc = \"s\"\nd = 'c'\ni++\nreturn x";
        assert_eq!(missing(source).len(), 6);
    }

    #[test]
    fn terminated_lines_are_fine() {
        let source = "class A {\n  void f() {\n    int x = 1;\n    g(x);\n  }\n}";
        assert!(missing(source).is_empty());
    }

    #[test]
    fn trailing_comment_does_not_hide_missing_semicolon() {
        assert_eq!(missing("int x = 1 // one"), vec![(1, 10)]);
    }

    #[test]
    fn comments_are_ignored() {
        assert!(missing("// int x = 1\n/* y = 2\n   z = 3 */").is_empty());
    }

    #[test]
    fn semicolon_inside_string_does_not_count() {
        assert_eq!(missing("s = \"a;\""), vec![(1, 9)]);
    }

    #[test]
    fn control_headers_are_skipped() {
        let source = "if (x)\n  y();\nelse\n  z();\nwhile (x)\n  x--;\nfor (;;)\n  f();\n} else if (y)\n  g();";
        assert!(missing(source).is_empty());
    }

    #[test]
    fn class_and_method_headers_are_skipped() {
        let source = "public class A\n    extends B\n    implements C\n{\n  void f()\n      throws E\n  {\n  }\n}";
        assert!(missing(source).is_empty());
    }

    #[test]
    fn continued_lines_are_skipped() {
        let source = "total = a\n    + b;\nname = user\n    .trim();\nok = cond\n    ? x\n    : y;";
        assert!(missing(source).is_empty());
    }

    #[test]
    fn open_argument_lists_are_skipped() {
        let source = "call(first,\n     second\n);";
        assert!(missing(source).is_empty());
    }

    #[test]
    fn blocks_and_labels_are_skipped() {
        assert!(missing("outer:\nfor (;;) {\n  break outer;\n}").is_empty());
    }
}
