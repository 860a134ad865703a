// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Validator configuration.
//!
//! The shape of the `[validator]` table in `javalite.toml`. The core only
//! deserialises it; finding and reading the file is the front end's job.
//!
//! ```toml
//! [validator]
//! disabled-passes = ["method-calls"]
//! known-types = ["Scanner", "Random"]
//! known-methods = ["nextInt"]
//!
//! [validator.severity]
//! UNDECLARED_VARIABLE = "warning"
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::validation::Severity;

/// Tunables for a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ValidatorConfig {
    /// Passes that are skipped entirely.
    pub disabled_passes: Vec<PassKind>,
    /// Extra type names the scoping pass treats as always declared.
    pub known_types: Vec<String>,
    /// Extra method names the method-call pass treats as always defined.
    pub known_methods: Vec<String>,
    /// Per-code severity overrides, keyed by diagnostic code.
    pub severity: BTreeMap<String, Severity>,
}

impl ValidatorConfig {
    /// Returns `true` unless `pass` has been disabled.
    #[must_use]
    pub fn is_enabled(&self, pass: PassKind) -> bool {
        !self.disabled_passes.contains(&pass)
    }

    /// The severity for `code`, after overrides.
    #[must_use]
    pub fn severity_for(&self, code: &str, default: Severity) -> Severity {
        self.severity.get(code).copied().unwrap_or(default)
    }

    /// Disables `pass`, builder style.
    #[must_use]
    pub fn without_pass(mut self, pass: PassKind) -> Self {
        if self.is_enabled(pass) {
            self.disabled_passes.push(pass);
        }
        self
    }
}

/// The validator's passes, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassKind {
    Syntax,
    Declarations,
    Types,
    Scoping,
    Accessibility,
    ControlFlow,
    MethodCalls,
}

impl PassKind {
    /// Every pass, in run order.
    pub const ALL: [Self; 7] = [
        Self::Syntax,
        Self::Declarations,
        Self::Types,
        Self::Scoping,
        Self::Accessibility,
        Self::ControlFlow,
        Self::MethodCalls,
    ];

    /// The kebab-case name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Declarations => "declarations",
            Self::Types => "types",
            Self::Scoping => "scoping",
            Self::Accessibility => "accessibility",
            Self::ControlFlow => "control-flow",
            Self::MethodCalls => "method-calls",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct File {
        validator: ValidatorConfig,
    }

    #[test]
    fn default_enables_everything() {
        let config = ValidatorConfig::default();
        assert!(PassKind::ALL.iter().all(|pass| config.is_enabled(*pass)));
        assert_eq!(
            config.severity_for("MISSING_SEMICOLON", Severity::Error),
            Severity::Error
        );
    }

    #[test]
    fn deserialize_full_table() {
        let file: File = toml::from_str(
            r#"
[validator]
disabled-passes = ["method-calls", "control-flow"]
known-types = ["Scanner"]
known-methods = ["nextInt"]

[validator.severity]
UNDECLARED_VARIABLE = "warning"
DUPLICATE_METHOD = "info"
"#,
        )
        .unwrap();
        let config = file.validator;
        assert!(!config.is_enabled(PassKind::MethodCalls));
        assert!(!config.is_enabled(PassKind::ControlFlow));
        assert!(config.is_enabled(PassKind::Syntax));
        assert_eq!(config.known_types, vec!["Scanner"]);
        assert_eq!(config.known_methods, vec!["nextInt"]);
        assert_eq!(
            config.severity_for("UNDECLARED_VARIABLE", Severity::Error),
            Severity::Warning
        );
        assert_eq!(
            config.severity_for("DUPLICATE_METHOD", Severity::Warning),
            Severity::Info
        );
    }

    #[test]
    fn deserialize_empty_table_is_default() {
        let file: File = toml::from_str("[validator]\n").unwrap();
        assert_eq!(file.validator, ValidatorConfig::default());
    }

    #[test]
    fn deserialize_rejects_unknown_keys_and_passes() {
        assert!(toml::from_str::<File>("[validator]\nstrict = true\n").is_err());
        assert!(toml::from_str::<File>("[validator]\ndisabled-passes = [\"lint\"]\n").is_err());
        assert!(
            toml::from_str::<File>("[validator.severity]\nMISSING_SEMICOLON = \"fatal\"\n")
                .is_err()
        );
    }

    #[test]
    fn without_pass_is_idempotent() {
        let config = ValidatorConfig::default()
            .without_pass(PassKind::Types)
            .without_pass(PassKind::Types);
        assert_eq!(config.disabled_passes, vec![PassKind::Types]);
    }

    #[test]
    fn pass_names_are_kebab_case() {
        let names: Vec<_> = PassKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "syntax",
                "declarations",
                "types",
                "scoping",
                "accessibility",
                "control-flow",
                "method-calls",
            ]
        );
    }
}
