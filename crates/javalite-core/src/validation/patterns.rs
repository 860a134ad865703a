// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Declaration shapes recognised on a single bare line.
//!
//! These are approximations of Java's grammar. They see generics, qualified
//! types and multi-line signatures poorly, and the passes inherit that.

use std::sync::LazyLock;

use regex::Regex;

use crate::source_analysis::is_keyword;

static TYPE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:class|interface)\s+([A-Za-z_$][\w$]*)").expect("valid regex")
});

static METHOD_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*((?:(?:public|private|protected|static|final|abstract|synchronized|native)\s+)*)([A-Za-z_$][\w$.]*(?:\s*\[\s*\])*)\s+([A-Za-z_$][\w$]*)\s*\(",
    )
    .expect("valid regex")
});

static VARIABLE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(int|long|short|byte|double|float|boolean|char|String|[A-Z][\w$]*)((?:\s*\[\s*\])*)\s+([A-Za-z_$][\w$]*)(?:\s*\[\s*\])*",
    )
    .expect("valid regex")
});

static DECLARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][\w$]*)(?:\s*\[\s*\])*\s*").expect("valid regex")
});

/// A `class` or `interface` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TypeDeclaration<'a> {
    pub name: &'a str,
    /// Byte offset of the name.
    pub offset: usize,
}

/// A method header: modifiers, return type and name, up to the `(`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MethodDeclaration<'a> {
    pub modifiers: Vec<&'a str>,
    pub return_type: &'a str,
    pub name: &'a str,
    /// Byte offset of the name.
    pub offset: usize,
    /// Byte offset just past the `(`.
    pub open_paren: usize,
}

impl MethodDeclaration<'_> {
    pub fn returns_value(&self) -> bool {
        self.return_type != "void"
    }
}

/// A variable name introduced by a typed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct VariableDeclaration<'a> {
    pub ty: &'a str,
    pub name: &'a str,
    /// Byte offset of the name.
    pub offset: usize,
}

/// Type headers on `line`.
pub(super) fn type_declarations(line: &str) -> impl Iterator<Item = TypeDeclaration<'_>> {
    TYPE_DECLARATION.captures_iter(line).filter_map(|caps| {
        let name = caps.get(1)?;
        Some(TypeDeclaration {
            name: name.as_str(),
            offset: name.start(),
        })
    })
}

/// The method header starting `line`, if any.
///
/// Constructors are not matched: their "return type" would be a modifier.
pub(super) fn method_declaration(line: &str) -> Option<MethodDeclaration<'_>> {
    let caps = METHOD_DECLARATION.captures(line)?;
    let return_type = caps.get(2)?.as_str();
    let name = caps.get(3)?;
    if (is_keyword(return_type) && !is_type_keyword(return_type)) || is_keyword(name.as_str()) {
        return None;
    }
    let modifiers = caps
        .get(1)
        .map(|m| m.as_str().split_whitespace().collect())
        .unwrap_or_default();
    Some(MethodDeclaration {
        modifiers,
        return_type,
        name: name.as_str(),
        offset: name.start(),
        open_paren: caps.get(0)?.end(),
    })
}

/// Typed variable declarations on `line`: fields, locals, parameters, and
/// the extra declarators of `int a = 1, b;`.
pub(super) fn variable_declarations(line: &str) -> Vec<VariableDeclaration<'_>> {
    let mut found = Vec::new();
    for caps in VARIABLE_DECLARATION.captures_iter(line) {
        let (Some(ty), Some(name), Some(whole)) = (caps.get(1), caps.get(3), caps.get(0)) else {
            continue;
        };
        if is_keyword(name.as_str()) {
            continue;
        }
        let rest = &line[whole.end()..];
        let Some(next) = rest.trim_start().chars().next() else {
            found.push(VariableDeclaration {
                ty: ty.as_str(),
                name: name.as_str(),
                offset: name.start(),
            });
            continue;
        };
        if !matches!(next, '=' | ';' | ',' | ':' | ')') {
            continue;
        }
        found.push(VariableDeclaration {
            ty: ty.as_str(),
            name: name.as_str(),
            offset: name.start(),
        });
        if matches!(next, '=' | ',') {
            extra_declarators(line, whole.end(), ty.as_str(), &mut found);
        }
    }
    found
}

/// Follows top-level commas after a declarator, up to the end of the
/// statement.
fn extra_declarators<'a>(
    line: &'a str,
    from: usize,
    ty: &'a str,
    found: &mut Vec<VariableDeclaration<'a>>,
) {
    let mut depth = 0i32;
    for (index, ch) in line[from..].char_indices() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return;
                }
            }
            ';' if depth == 0 => return,
            ',' if depth == 0 => {
                let start = from + index + 1;
                let Some(caps) = DECLARATOR.captures(&line[start..]) else {
                    continue;
                };
                let (Some(name), Some(whole)) = (caps.get(1), caps.get(0)) else {
                    continue;
                };
                let after = line[start + whole.end()..].chars().next();
                if matches!(after, None | Some('=' | ',' | ';')) && !is_keyword(name.as_str()) {
                    found.push(VariableDeclaration {
                        ty,
                        name: name.as_str(),
                        offset: start + name.start(),
                    });
                }
            }
            _ => {}
        }
    }
}

/// Keywords that name a type.
pub(super) fn is_type_keyword(word: &str) -> bool {
    matches!(
        word,
        "boolean" | "byte" | "char" | "double" | "float" | "int" | "long" | "short" | "void"
    )
}

/// Returns `true` if `ch` can continue an identifier.
pub(super) fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Returns `true` if an identifier starting at `offset` is reached through
/// `.` (a member rather than a bare name).
pub(super) fn is_member_access(line: &str, offset: usize) -> bool {
    line[..offset].trim_end().ends_with('.')
}
