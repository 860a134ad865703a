// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Access modifier checks.

use std::sync::LazyLock;

use regex::Regex;

use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};

pub(super) struct AccessibilityPass;

static ACCESS_MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:public|private|protected)\b").expect("valid regex"));

static MAIN_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*((?:[a-z]+\s+)*)void\s+(main)\s*\(").expect("valid regex")
});

impl ValidationPass for AccessibilityPass {
    fn kind(&self) -> PassKind {
        PassKind::Accessibility
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        _config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for line in source.lines() {
            let modifiers: Vec<_> = ACCESS_MODIFIER.find_iter(&line.bare).collect();
            if let [first, second, ..] = modifiers.as_slice() {
                diagnostics.push(Diagnostic::for_code(
                    codes::MULTIPLE_ACCESS_MODIFIERS,
                    line.position_at(second.start()),
                    format!(
                        "Multiple access modifiers: '{}' and '{}'",
                        first.as_str(),
                        second.as_str()
                    ),
                ));
            }

            let Some(caps) = MAIN_METHOD.captures(&line.bare) else {
                continue;
            };
            let (Some(prefix), Some(name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let words: Vec<_> = prefix.as_str().split_whitespace().collect();
            if !(words.contains(&"public") && words.contains(&"static")) {
                diagnostics.push(Diagnostic::for_code(
                    codes::INVALID_MAIN_SIGNATURE,
                    line.position_at(name.start()),
                    "Method 'main' must be declared 'public static' to be an entry point",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;
    use crate::validation::test_support::{located, run};

    #[test]
    fn two_access_modifiers() {
        let diagnostics = run(&AccessibilityPass, "  public private int x;");
        assert_eq!(
            located(&diagnostics),
            vec![(codes::MULTIPLE_ACCESS_MODIFIERS, 1, 10)]
        );
        assert_eq!(
            diagnostics[0].message(),
            "Multiple access modifiers: 'public' and 'private'"
        );
    }

    #[test]
    fn one_access_modifier_is_fine() {
        let source = "public class A {\n  private int x;\n  protected void f() {}\n  int y;\n}";
        assert!(run(&AccessibilityPass, source).is_empty());
    }

    #[test]
    fn modifier_words_in_strings_and_comments_are_ignored() {
        let source = "private String s = \"public\"; // protected";
        assert!(run(&AccessibilityPass, source).is_empty());
    }

    #[test]
    fn main_needs_public_static() {
        for source in [
            "static void main(String[] args) {",
            "public void main(String[] args) {",
            "void main(String[] args) {",
        ] {
            let diagnostics = run(&AccessibilityPass, source);
            assert_eq!(diagnostics.len(), 1, "{source}");
            assert_eq!(diagnostics[0].code(), codes::INVALID_MAIN_SIGNATURE);
            assert_eq!(diagnostics[0].severity(), Severity::Warning);
        }
    }

    #[test]
    fn proper_main_is_fine() {
        for source in [
            "public static void main(String[] args) {",
            "  static public final void main(String[] a) {",
        ] {
            assert!(run(&AccessibilityPass, source).is_empty(), "{source}");
        }
    }

    #[test]
    fn other_methods_named_like_main_are_ignored() {
        assert!(run(&AccessibilityPass, "int main(int x) { return x; }\nmainly();").is_empty());
    }
}
