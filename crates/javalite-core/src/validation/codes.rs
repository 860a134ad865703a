// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Stable diagnostic codes.
//!
//! Editors and configuration files refer to diagnostics by these strings,
//! so they never change once published.

use super::Severity;

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const MISSING_SEMICOLON: &str = "MISSING_SEMICOLON";
pub const DUPLICATE_CLASS: &str = "DUPLICATE_CLASS";
pub const DUPLICATE_METHOD: &str = "DUPLICATE_METHOD";
pub const DUPLICATE_VARIABLE: &str = "DUPLICATE_VARIABLE";
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const UNDECLARED_VARIABLE: &str = "UNDECLARED_VARIABLE";
pub const MULTIPLE_ACCESS_MODIFIERS: &str = "MULTIPLE_ACCESS_MODIFIERS";
pub const INVALID_MAIN_SIGNATURE: &str = "INVALID_MAIN_SIGNATURE";
pub const UNREACHABLE_CODE: &str = "UNREACHABLE_CODE";
pub const MISSING_RETURN: &str = "MISSING_RETURN";
pub const UNDEFINED_METHOD: &str = "UNDEFINED_METHOD";

/// Every code the built-in passes can emit.
pub const ALL: &[&str] = &[
    PARSE_ERROR,
    MISSING_SEMICOLON,
    DUPLICATE_CLASS,
    DUPLICATE_METHOD,
    DUPLICATE_VARIABLE,
    TYPE_MISMATCH,
    UNDECLARED_VARIABLE,
    MULTIPLE_ACCESS_MODIFIERS,
    INVALID_MAIN_SIGNATURE,
    UNREACHABLE_CODE,
    MISSING_RETURN,
    UNDEFINED_METHOD,
];

/// The severity a code is reported with when no override applies.
#[must_use]
pub fn default_severity(code: &str) -> Severity {
    match code {
        DUPLICATE_METHOD | INVALID_MAIN_SIGNATURE | UNDEFINED_METHOD => Severity::Warning,
        _ => Severity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_screaming_snake_case() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            assert!(seen.insert(*code), "{code} listed twice");
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{code} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn only_advisory_codes_default_to_warning() {
        let warnings: Vec<_> = ALL
            .iter()
            .filter(|code| default_severity(code) == Severity::Warning)
            .copied()
            .collect();
        assert_eq!(
            warnings,
            vec![DUPLICATE_METHOD, INVALID_MAIN_SIGNATURE, UNDEFINED_METHOD]
        );
    }
}
