// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Brace-depth scope tracking shared by the declaration and scoping passes.
//!
//! Scopes are guessed from the bare text: every `{` opens one and every `}`
//! closes one. The scope opened by a `class` or `interface` header is a type
//! body; fields live there and may be shadowed by anything inside a member.
//! Names declared inside parentheses (parameters, `for` and `catch` headers)
//! wait in a pending set and move into the next block, or are dropped at the
//! end of the statement.
//!
//! Every pass builds its own [`ScopeStack`] through [`walk`]; nothing is
//! shared between passes or runs.

use std::collections::HashMap;

use super::patterns::{type_declarations, variable_declarations};
use super::source_text::{Line, SourceText};
use crate::source_analysis::Position;

/// Open scopes, innermost last.
#[derive(Debug, Clone)]
pub(super) struct ScopeStack {
    levels: Vec<ScopeLevel>,
    pending: HashMap<String, Position>,
}

#[derive(Debug, Clone, Default)]
struct ScopeLevel {
    names: HashMap<String, Position>,
    type_body: bool,
}

impl ScopeStack {
    /// A stack holding only the file-level scope.
    pub fn new() -> Self {
        Self {
            levels: vec![ScopeLevel::default()],
            pending: HashMap::new(),
        }
    }

    /// Opens a scope. A block takes over the pending names; a type body
    /// discards them.
    pub fn push(&mut self, type_body: bool) {
        let pending = std::mem::take(&mut self.pending);
        let names = if type_body { HashMap::new() } else { pending };
        self.levels.push(ScopeLevel { names, type_body });
    }

    /// Closes the innermost scope. The file-level scope is never closed.
    pub fn pop(&mut self) -> bool {
        if self.levels.len() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }

    /// A statement ended outside parentheses.
    pub fn end_statement(&mut self) {
        self.pending.clear();
    }

    /// Returns `true` if the innermost scope is a type body.
    pub fn in_type_body(&self) -> bool {
        self.levels.last().is_some_and(|level| level.type_body)
    }

    /// Where `name` was already declared, if declaring it again here is a
    /// duplicate.
    pub fn conflict(&self, name: &str, in_parens: bool) -> Option<Position> {
        if in_parens {
            if let Some(position) = self.pending.get(name) {
                return Some(*position);
            }
        } else if self.in_type_body() {
            return self.levels.last()?.names.get(name).copied();
        }
        self.levels
            .iter()
            .rev()
            .take_while(|level| !level.type_body)
            .find_map(|level| level.names.get(name).copied())
    }

    /// Declares `name` in the innermost scope, or as pending.
    pub fn define(&mut self, name: &str, position: Position, in_parens: bool) {
        let names = if in_parens {
            &mut self.pending
        } else {
            // INVARIANT: levels always contains the file-level scope
            &mut self
                .levels
                .last_mut()
                .expect("levels should never be empty")
                .names
        };
        names.entry(name.to_string()).or_insert(position);
    }

    /// Returns `true` if `name` is declared in any open scope.
    pub fn is_visible(&self, name: &str) -> bool {
        self.pending.contains_key(name)
            || self
                .levels
                .iter()
                .any(|level| level.names.contains_key(name))
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

/// What [`walk`] reports to its visitor.
#[derive(Debug)]
pub(super) enum Step<'a, P> {
    /// A variable is about to be declared. The stack does not contain it yet.
    Declare {
        name: &'a str,
        offset: usize,
        in_parens: bool,
    },
    /// A pass-specific point of interest, in source order with everything
    /// else.
    Probe { offset: usize, probe: P },
}

enum Event<'a, P> {
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Semicolon,
    TypeHeader,
    Declare(&'a str),
    Probe(P),
}

/// Walks `source` line by line, maintaining a [`ScopeStack`].
///
/// `probes` lists the offsets a pass wants to inspect on each line; `visit`
/// is called for each declaration and probe with the stack as it stands at
/// that point.
pub(super) fn walk<P>(
    source: &SourceText<'_>,
    mut probes: impl FnMut(&Line<'_>) -> Vec<(usize, P)>,
    mut visit: impl FnMut(&Line<'_>, Step<'_, P>, &ScopeStack),
) -> ScopeStack {
    let mut scopes = ScopeStack::new();
    let mut paren_depth = 0usize;
    let mut type_header = false;

    for line in source.lines() {
        let mut events: Vec<(usize, Event<'_, P>)> = line
            .bare
            .char_indices()
            .filter_map(|(offset, ch)| {
                let event = match ch {
                    '{' => Event::OpenBrace,
                    '}' => Event::CloseBrace,
                    '(' => Event::OpenParen,
                    ')' => Event::CloseParen,
                    ';' => Event::Semicolon,
                    _ => return None,
                };
                Some((offset, event))
            })
            .collect();
        events.extend(type_declarations(&line.bare).map(|d| (d.offset, Event::TypeHeader)));
        events.extend(
            variable_declarations(&line.bare)
                .into_iter()
                .map(|d| (d.offset, Event::Declare(d.name))),
        );
        events.extend(
            probes(line)
                .into_iter()
                .map(|(offset, probe)| (offset, Event::Probe(probe))),
        );
        events.sort_by_key(|(offset, _)| *offset);

        for (offset, event) in events {
            match event {
                Event::OpenBrace => {
                    scopes.push(type_header);
                    type_header = false;
                }
                Event::CloseBrace => {
                    scopes.pop();
                }
                Event::OpenParen => paren_depth += 1,
                Event::CloseParen => paren_depth = paren_depth.saturating_sub(1),
                Event::Semicolon => {
                    if paren_depth == 0 {
                        scopes.end_statement();
                    }
                }
                Event::TypeHeader => type_header = true,
                Event::Declare(name) => {
                    let in_parens = paren_depth > 0;
                    visit(
                        line,
                        Step::Declare {
                            name,
                            offset,
                            in_parens,
                        },
                        &scopes,
                    );
                    scopes.define(name, line.position_at(offset), in_parens);
                }
                Event::Probe(probe) => visit(line, Step::Probe { offset, probe }, &scopes),
            }
        }
    }

    scopes
}
