// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Names used where no declaration is in scope.
//!
//! Three kinds of use are checked: the target of an assignment that starts a
//! line, the receiver in front of a `.`, and the operand of `++` or `--`.
//! A name counts as declared when it is a local or parameter in an open
//! scope at that point, a field of any type in the file, a type declared in
//! the file, or one of a few well-known library types.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{is_identifier_char, is_member_access, type_declarations};
use super::scopes::{Step, walk};
use super::source_text::{Line, SourceText};
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};
use crate::source_analysis::is_keyword;

pub(super) struct ScopingPass;

/// Library types that may appear as receivers without a declaration.
const KNOWN_TYPES: &[&str] = &[
    "Arrays",
    "Boolean",
    "Character",
    "Double",
    "Integer",
    "Long",
    "Math",
    "Object",
    "Objects",
    "String",
    "StringBuilder",
    "System",
    "Thread",
];

static ASSIGNMENT_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][\w$]*)\s*(?:[-+*/%&|^]|<<|>>>?)?=").expect("valid regex")
});

static RECEIVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*\.").expect("valid regex"));

static POSTFIX_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*(?:\+\+|--)").expect("valid regex"));

static PREFIX_STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\+\+|--)\s*([A-Za-z_$][\w$]*)").expect("valid regex"));

impl ValidationPass for ScopingPass {
    fn kind(&self) -> PassKind {
        PassKind::Scoping
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut known = file_level_names(source);
        known.extend(KNOWN_TYPES.iter().map(ToString::to_string));
        known.extend(config.known_types.iter().cloned());

        walk(source, uses, |line, step, scopes| {
            let Step::Probe {
                offset,
                probe: name,
            } = step
            else {
                return;
            };
            if scopes.is_visible(&name) || known.contains(&name) {
                return;
            }
            diagnostics.push(Diagnostic::for_code(
                codes::UNDECLARED_VARIABLE,
                line.position_at(offset),
                format!("Variable '{name}' is not declared before use"),
            ));
        });
    }
}

/// Type names and fields, which are visible from anywhere in the file.
fn file_level_names(source: &SourceText<'_>) -> HashSet<String> {
    let mut names: HashSet<String> = source
        .lines()
        .iter()
        .flat_map(|line| type_declarations(&line.bare).map(|d| d.name.to_string()))
        .collect();
    walk(
        source,
        |_| Vec::<(usize, ())>::new(),
        |_, step, scopes| {
            if let Step::Declare {
                name,
                in_parens: false,
                ..
            } = step
            {
                if scopes.in_type_body() {
                    names.insert(name.to_string());
                }
            }
        },
    );
    names
}

/// The uses on `line` worth checking, by byte offset.
fn uses(line: &Line<'_>) -> Vec<(usize, String)> {
    let bare = line.bare.as_str();
    if matches!(
        bare.split_whitespace().next(),
        Some("package" | "import")
    ) {
        return Vec::new();
    }

    let mut found: Vec<(usize, &str)> = Vec::new();
    if let Some(caps) = ASSIGNMENT_TARGET.captures(bare) {
        if let (Some(name), Some(whole)) = (caps.get(1), caps.get(0)) {
            if !bare[whole.end()..].starts_with('=') {
                found.push((name.start(), name.as_str()));
            }
        }
    }
    for caps in RECEIVER.captures_iter(bare) {
        let (Some(name), Some(whole)) = (caps.get(1), caps.get(0)) else {
            continue;
        };
        let member_follows = bare[whole.end()..]
            .trim_start()
            .starts_with(|ch: char| ch.is_ascii_alphabetic() || ch == '_' || ch == '$');
        if member_follows {
            found.push((name.start(), name.as_str()));
        }
    }
    for regex in [&*POSTFIX_STEP, &*PREFIX_STEP] {
        for caps in regex.captures_iter(bare) {
            if let Some(name) = caps.get(1) {
                found.push((name.start(), name.as_str()));
            }
        }
    }

    found.sort_unstable();
    found.dedup();
    found
        .into_iter()
        .filter(|(offset, name)| {
            let starts_word = bare[..*offset]
                .chars()
                .next_back()
                .is_none_or(|ch| !is_identifier_char(ch));
            starts_word
                && !is_member_access(bare, *offset)
                && !is_keyword(name)
                && !matches!(*name, "true" | "false" | "null")
        })
        .map(|(offset, name)| (offset, name.to_string()))
        .collect()
}
