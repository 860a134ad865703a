// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Names declared twice.
//!
//! - A class or interface name anywhere in the file ([`codes::DUPLICATE_CLASS`])
//! - A method name within one type, overloads included, reported as a
//!   warning ([`codes::DUPLICATE_METHOD`])
//! - A variable name within the open scopes of one member
//!   ([`codes::DUPLICATE_VARIABLE`])

use std::collections::HashMap;

use super::patterns::{method_declaration, type_declarations};
use super::scopes::{Step, walk};
use super::source_text::SourceText;
use super::{Diagnostic, ValidationPass, codes};
use crate::config::{PassKind, ValidatorConfig};
use crate::source_analysis::Position;

pub(super) struct DeclarationsPass;

impl ValidationPass for DeclarationsPass {
    fn kind(&self) -> PassKind {
        PassKind::Declarations
    }

    fn check(
        &self,
        source: &SourceText<'_>,
        _config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        check_types_and_methods(source, diagnostics);
        check_variables(source, diagnostics);
    }
}

fn check_types_and_methods(source: &SourceText<'_>, diagnostics: &mut Vec<Diagnostic>) {
    let mut types: HashMap<&str, Position> = HashMap::new();
    let mut methods: HashMap<&str, Position> = HashMap::new();

    for line in source.lines() {
        for declaration in type_declarations(&line.bare) {
            let position = line.position_at(declaration.offset);
            // A new type starts a fresh set of method names.
            methods.clear();
            if let Some(first) = types.get(declaration.name) {
                diagnostics.push(Diagnostic::for_code(
                    codes::DUPLICATE_CLASS,
                    position,
                    format!(
                        "Duplicate class '{}' (first declared at line {})",
                        declaration.name, first.line
                    ),
                ));
            } else {
                types.insert(declaration.name, position);
            }
        }

        if let Some(method) = method_declaration(&line.bare) {
            let position = line.position_at(method.offset);
            if let Some(first) = methods.get(method.name) {
                diagnostics.push(Diagnostic::for_code(
                    codes::DUPLICATE_METHOD,
                    position,
                    format!(
                        "Method '{}' is already declared at line {}",
                        method.name, first.line
                    ),
                ));
            } else {
                methods.insert(method.name, position);
            }
        }
    }
}

fn check_variables(source: &SourceText<'_>, diagnostics: &mut Vec<Diagnostic>) {
    walk(
        source,
        |_| Vec::<(usize, ())>::new(),
        |line, step, scopes| {
            let Step::Declare {
                name,
                offset,
                in_parens,
            } = step
            else {
                return;
            };
            if let Some(first) = scopes.conflict(name, in_parens) {
                diagnostics.push(Diagnostic::for_code(
                    codes::DUPLICATE_VARIABLE,
                    line.position_at(offset),
                    format!(
                        "Variable '{name}' is already declared at line {}",
                        first.line
                    ),
                ));
            }
        },
    );
}
