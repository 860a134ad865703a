// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Terminal diagnostics using miette.
//!
//! Converts validator diagnostics and lex/parse errors, which carry a
//! line and column, into labelled miette reports against the source file.

use std::fmt;

use javalite_core::source_analysis::{Position, SourceError};
use javalite_core::validation::{Diagnostic as CoreDiagnostic, Severity};
use miette::{LabeledSpan, NamedSource, SourceCode, SourceSpan};

/// A diagnostic anchored in a source file.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FileDiagnostic {
    pub severity: Severity,
    /// Stable code, e.g. `MISSING_SEMICOLON` or `javalite::parse`
    pub code: String,
    pub message: String,
    pub src: NamedSource<String>,
    pub span: SourceSpan,
    pub label: String,
}

impl FileDiagnostic {
    /// Creates a report from a validator diagnostic.
    pub fn from_core_diagnostic(
        diagnostic: &CoreDiagnostic,
        source_path: &str,
        source: &str,
    ) -> Self {
        let label = match diagnostic.severity() {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
            Severity::Info => "note",
        };

        Self {
            severity: diagnostic.severity(),
            code: diagnostic.code().to_string(),
            message: diagnostic.message().to_string(),
            src: NamedSource::new(source_path, source.to_string()),
            span: span_at(source, diagnostic.position()),
            label: label.to_string(),
        }
    }

    /// Creates a report from a lex or parse error.
    pub fn from_source_error(error: &SourceError, source_path: &str, source: &str) -> Self {
        let (code, label) = match error {
            SourceError::Lex(_) => ("javalite::lex", "starts here"),
            SourceError::Parse(_) => ("javalite::parse", "unexpected here"),
        };

        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: error.to_string(),
            src: NamedSource::new(source_path, source.to_string()),
            span: span_at(source, error.position()),
            label: label.to_string(),
        }
    }
}

impl miette::Diagnostic for FileDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// The span of the char at `position`, or an empty span at a line end or
/// past the end of the source.
#[must_use]
pub fn span_at(source: &str, position: Position) -> SourceSpan {
    let offset = position.to_byte_offset(source).unwrap_or(source.len());
    let len = source[offset..]
        .chars()
        .next()
        .filter(|ch| *ch != '\n' && *ch != '\r')
        .map_or(0, char::len_utf8);
    (offset, len).into()
}
