// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Calls to methods the file never declares.
//!
//! The first sweep collects every declared method name and type name; the
//! second checks unqualified and `this.` calls against them. Calls through
//! any other receiver are not checked.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{is_identifier_char, is_member_access, method_declaration, type_declarations};
use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};
use crate::source_analysis::is_keyword;

pub(super) struct MethodCallsPass;

/// Methods every object has, callable without a receiver.
const BUILTIN_METHODS: &[&str] = &[
    "equals",
    "getClass",
    "hashCode",
    "notify",
    "notifyAll",
    "toString",
    "wait",
];

static CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*\(").expect("valid regex"));

static THIS_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bthis\s*\.\s*([A-Za-z_$][\w$]*)\s*\(").expect("valid regex")
});

static AFTER_NEW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bnew\s*$").expect("valid regex"));

impl ValidationPass for MethodCallsPass {
    fn kind(&self) -> PassKind {
        PassKind::MethodCalls
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut defined: HashSet<&str> = BUILTIN_METHODS.iter().copied().collect();
        defined.extend(config.known_methods.iter().map(String::as_str));
        for line in source.lines() {
            defined.extend(type_declarations(&line.bare).map(|d| d.name));
            if let Some(method) = method_declaration(&line.bare) {
                defined.insert(method.name);
            }
        }

        for line in source.lines() {
            let bare = line.bare.as_str();
            let mut calls: Vec<(usize, &str)> = Vec::new();
            for caps in CALL.captures_iter(bare) {
                let Some(name) = caps.get(1) else { continue };
                let starts_word = bare[..name.start()]
                    .chars()
                    .next_back()
                    .is_none_or(|ch| !is_identifier_char(ch));
                if starts_word
                    && !is_member_access(bare, name.start())
                    && !AFTER_NEW.is_match(&bare[..name.start()])
                    && !is_keyword(name.as_str())
                {
                    calls.push((name.start(), name.as_str()));
                }
            }
            for caps in THIS_CALL.captures_iter(bare) {
                if let Some(name) = caps.get(1) {
                    calls.push((name.start(), name.as_str()));
                }
            }
            calls.sort_unstable();

            for (offset, name) in calls {
                if defined.contains(name) {
                    continue;
                }
                diagnostics.push(Diagnostic::for_code(
                    codes::UNDEFINED_METHOD,
                    line.position_at(offset),
                    format!("Method '{name}' is not defined in this file"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;
    use crate::validation::test_support::{located, run, run_with};

    fn undefined(source: &str) -> Vec<String> {
        run(&MethodCallsPass, source)
            .iter()
            .map(|d| d.message().to_string())
            .collect()
    }

    #[test]
    fn unqualified_call_to_unknown_method() {
        let source = "class A {\n  void f() {\n    helper(1);\n  }\n}";
        let diagnostics = run(&MethodCallsPass, source);
        assert_eq!(located(&diagnostics), vec![(codes::UNDEFINED_METHOD, 3, 5)]);
        assert_eq!(diagnostics[0].severity(), Severity::Warning);
        assert_eq!(
            diagnostics[0].message(),
            "Method 'helper' is not defined in this file"
        );
    }

    #[test]
    fn declared_methods_are_known_even_when_declared_later() {
        let source = "class A {\n  void f() { g(); this.g(); }\n  int g() { return 1; }\n}";
        assert!(undefined(source).is_empty());
    }

    #[test]
    fn this_qualified_call_is_checked() {
        let source = "class A {\n  void f() { this.missing(); }\n}";
        assert_eq!(undefined(source), vec!["Method 'missing' is not defined in this file"]);
    }

    #[test]
    fn calls_through_other_receivers_are_not_checked() {
        let source = "class A {\n  void f(String s) { s.trim(); System.out.println(s.length()); }\n}";
        assert!(undefined(source).is_empty());
    }

    #[test]
    fn constructors_and_object_creation() {
        let source = "class Box {\n  Box(int v) { this(v, 0); }\n  Box(int v, int w) { super(); }\n  Box copy() { return new Box(1); }\n}";
        assert!(undefined(source).is_empty(), "{:?}", undefined(source));
    }

    #[test]
    fn control_keywords_are_not_calls() {
        let source = "class A {\n  void f(int x) {\n    if (x) { } while (x) { } for (;;) { }\n    switch (x) { }\n    synchronized (this) { }\n    return (x);\n  }\n}";
        assert!(undefined(source).is_empty(), "{:?}", undefined(source));
    }

    #[test]
    fn builtins_and_configured_methods() {
        let source = "class A {\n  void f() { toString(); nextInt(); }\n}";
        assert_eq!(undefined(source), vec!["Method 'nextInt' is not defined in this file"]);

        let config = ValidatorConfig {
            known_methods: vec!["nextInt".to_string()],
            ..ValidatorConfig::default()
        };
        assert!(run_with(&MethodCallsPass, source, &config).is_empty());
    }

    #[test]
    fn calls_in_strings_and_comments_are_ignored() {
        let source = "class A {\n  void f() { String s = \"go()\"; } // later()\n}";
        assert!(undefined(source).is_empty());
    }
}
