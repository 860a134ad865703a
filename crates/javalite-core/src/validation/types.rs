// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Literal initialisers that cannot fit their declared type.
//!
//! Only `type name = literal;` with a primitive or `String` type is looked
//! at. Anything other than a lone literal on the right is skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};

pub(super) struct TypesPass;

static INITIALISED_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^\s*|[;{(]\s*)(?:(?:public|private|protected|static|final|transient|volatile)\s+)*(int|long|short|byte|double|float|boolean|char|String)\s+[A-Za-z_$][\w$]*\s*=\s*([^;]*[^;\s])",
    )
    .expect("valid regex")
});

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid regex"));

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").expect("valid regex"));

/// The shape of a literal initialiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
    String,
    Char,
    Integer,
    Decimal,
    Boolean,
    Null,
}

impl LiteralKind {
    fn classify(value: &str) -> Option<Self> {
        let quoted = |quote: char| {
            value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote)
        };
        if quoted('"') {
            Some(Self::String)
        } else if quoted('\'') {
            Some(Self::Char)
        } else if value == "true" || value == "false" {
            Some(Self::Boolean)
        } else if value == "null" {
            Some(Self::Null)
        } else if INTEGER.is_match(value) {
            Some(Self::Integer)
        } else if DECIMAL.is_match(value) {
            Some(Self::Decimal)
        } else {
            None
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Char => "a char",
            Self::Integer => "an integer",
            Self::Decimal => "a decimal",
            Self::Boolean => "a boolean",
            Self::Null => "null",
        }
    }
}

/// Returns `true` if a `ty` variable can be initialised with `literal`.
///
/// Widening from `char` and integer literals is allowed the way Java allows
/// it; narrowing checks such as `byte b = 300` are not attempted.
fn accepts(ty: &str, literal: LiteralKind) -> bool {
    use LiteralKind::{Boolean, Char, Decimal, Integer, Null, String};
    match ty {
        "int" | "long" | "short" | "byte" => matches!(literal, Integer | Char),
        "double" | "float" => matches!(literal, Integer | Decimal | Char),
        "char" => matches!(literal, Char | Integer),
        "boolean" => literal == Boolean,
        "String" => matches!(literal, String | Null),
        _ => true,
    }
}

impl ValidationPass for TypesPass {
    fn kind(&self) -> PassKind {
        PassKind::Types
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        _config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for line in source.lines() {
            for caps in INITIALISED_DECLARATION.captures_iter(&line.bare) {
                let (Some(ty), Some(value)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let text = line.code_slice(value.start(), value.end());
                let Some(literal) = LiteralKind::classify(text) else {
                    continue;
                };
                if accepts(ty.as_str(), literal) {
                    continue;
                }
                diagnostics.push(Diagnostic::for_code(
                    codes::TYPE_MISMATCH,
                    line.position_at(value.start()),
                    format!(
                        "Type mismatch: cannot assign {} to '{}'",
                        literal.describe(),
                        ty.as_str()
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{located, run};

    fn mismatches(source: &str) -> Vec<String> {
        run(&TypesPass, source)
            .iter()
            .map(|d| d.message().to_string())
            .collect()
    }

    #[test]
    fn string_into_int() {
        let diagnostics = run(&TypesPass, "int x = \"hello\";");
        assert_eq!(located(&diagnostics), vec![(codes::TYPE_MISMATCH, 1, 9)]);
        assert_eq!(
            diagnostics[0].message(),
            "Type mismatch: cannot assign a string to 'int'"
        );
    }

    #[test]
    fn compatible_literals() {
        let source = "int a = 1;\nlong b = -2;\ndouble c = 1.5;\ndouble d = 3;\nchar e = 'x';\nint f = 'x';\nboolean g = true;\nString h = \"s\";\nString i = null;";
        assert!(mismatches(source).is_empty(), "{:?}", mismatches(source));
    }

    #[test]
    fn incompatible_literals() {
        let source = "boolean a = 1;\nString b = 42;\nint c = 2.5;\nint d = null;\nchar e = \"e\";\ndouble f = false;";
        let found = mismatches(source);
        assert_eq!(found.len(), 6, "{found:?}");
        assert_eq!(found[1], "Type mismatch: cannot assign an integer to 'String'");
        assert_eq!(found[3], "Type mismatch: cannot assign null to 'int'");
    }

    #[test]
    fn modifiers_and_several_per_line() {
        let found = mismatches("private static final int A = \"1\"; boolean b = 0;");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn non_literal_initialisers_are_skipped() {
        let source = "int a = b;\nint c = f(\"x\");\nString s = \"a\" + 1;\nint n = s.length();";
        assert!(mismatches(source).is_empty());
    }

    #[test]
    fn literal_inside_string_is_not_a_declaration() {
        assert!(mismatches("String s = \"int x = \\\"y\\\";\";").is_empty());
    }

    #[test]
    fn string_with_semicolon_is_classified_whole() {
        assert_eq!(mismatches("int x = \"a;b\";").len(), 1);
    }
}
