// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Heuristic validation of Javalite source.
//!
//! The validator is not a type checker. Each pass looks at the source one
//! line at a time through [`SourceText`], matches a few textual shapes, and
//! reports what looks wrong. Passes are fast and independent, and they both
//! miss real problems and report imaginary ones. The tests in
//! `contract_tests` pin that imprecision down.
//!
//! Validation is total: every input, including one that does not lex or
//! parse, produces a [`ValidationReport`].
//!
//! # Adding a Pass
//!
//! 1. Create `crates/javalite-core/src/validation/<your_pass>.rs`.
//! 2. Declare `pub(super) struct YourPass;` implementing [`ValidationPass`].
//! 3. Add a [`PassKind`] variant and push `Box::new(your_pass::YourPass)`
//!    into `all_passes()` in run order.

pub mod codes;
mod diagnostic;
mod patterns;
mod scopes;
mod source_text;

mod accessibility;
mod control_flow;
mod declarations;
mod method_calls;
mod scoping;
mod syntax;
mod types;


use tracing::{debug, instrument};

use crate::config::{PassKind, ValidatorConfig};
use crate::source_analysis::{Position, parse_source};

pub use diagnostic::{Diagnostic, Severity, ValidationReport};
pub use source_text::{Line, SourceText};

/// A single validation pass.
///
/// Implementors read `source` and push [`Diagnostic`]s into `diagnostics`.
/// Any state a pass needs lives in locals for the duration of `check`.
pub(crate) trait ValidationPass {
    fn kind(&self) -> PassKind;

    fn check(
        &self,
        source: &SourceText<'_>,
        config: &ValidatorConfig,
        diagnostics: &mut Vec<Diagnostic>,
    );
}

/// Every pass, in run order.
fn all_passes() -> Vec<Box<dyn ValidationPass>> {
    vec![
        Box::new(syntax::SyntaxPass),
        Box::new(declarations::DeclarationsPass),
        Box::new(types::TypesPass),
        Box::new(scoping::ScopingPass),
        Box::new(accessibility::AccessibilityPass),
        Box::new(control_flow::ControlFlowPass),
        Box::new(method_calls::MethodCallsPass),
    ]
}

/// Validates `source` with the default configuration.
#[must_use]
pub fn validate(source: &str) -> ValidationReport {
    Validator::default().validate(source)
}

/// Validates `source` with `config`.
#[must_use]
pub fn validate_with_config(source: &str, config: &ValidatorConfig) -> ValidationReport {
    Validator::new(config.clone()).validate(source)
}

/// Runs the enabled passes over a source buffer.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `source`. Never fails.
    #[must_use]
    #[instrument(skip_all, fields(len = source.len()))]
    pub fn validate(&self, source: &str) -> ValidationReport {
        let mut diagnostics = Vec::new();

        if let Err(error) = parse_source(source) {
            debug!(%error, "source does not parse");
            diagnostics.push(Diagnostic::for_code(
                codes::PARSE_ERROR,
                Position::start(),
                format!("Parse error: {error}"),
            ));
        }

        let text = SourceText::new(source);
        for pass in all_passes() {
            if !self.config.is_enabled(pass.kind()) {
                debug!(pass = %pass.kind(), "pass disabled");
                continue;
            }
            let before = diagnostics.len();
            pass.check(&text, &self.config, &mut diagnostics);
            debug!(
                pass = %pass.kind(),
                count = diagnostics.len() - before,
                "pass finished"
            );
        }

        let mut report = ValidationReport::new();
        for diagnostic in diagnostics {
            let severity = self
                .config
                .severity_for(diagnostic.code(), diagnostic.severity());
            report.push(diagnostic.with_severity(severity));
        }
        report
    }
}
