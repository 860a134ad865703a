// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The editor-facing surface of the language core.
//!
//! An editor hosts languages through [`LanguagePlugin`]: a display name, the
//! file extensions it claims, and two queries, `highlight` and `validate`.
//! Both queries are total. Malformed input gives escaped plain text or a
//! report with a parse-error diagnostic, never an error.
//!
//! [`JavaLitePlugin`] is the Javalite implementation. It also offers the
//! document [`outline`](JavaLitePlugin::outline), which does need a
//! well-formed program.
//!
//! ```
//! use javalite_core::language_service::{JavaLitePlugin, LanguagePlugin};
//!
//! let plugin = JavaLitePlugin::new();
//! assert!(plugin.supports_path("src/Main.java"));
//! assert_eq!(
//!     plugin.highlight("x = 1;"),
//!     "<span class=\"hl-identifier\">x</span> <span class=\"hl-operator\">=</span> \
//!      <span class=\"hl-number\">1</span><span class=\"hl-delimiter\">;</span>",
//! );
//! ```

mod document_symbols;
mod highlighter;

#[cfg(test)]
mod highlighter_property_tests;

pub use document_symbols::{DocumentSymbol, DocumentSymbolKind, document_symbols};
pub use highlighter::{HighlightCategory, Segment, escape_html, highlight, highlight_segments};

use tracing::instrument;

use crate::config::ValidatorConfig;
use crate::source_analysis::{SourceError, parse_source};
use crate::validation::{ValidationReport, Validator};

/// A language an editor can host.
pub trait LanguagePlugin {
    /// The display name, e.g. `"Javalite"`.
    fn name(&self) -> &str;

    /// Extensions claimed by this language, without the dot.
    fn file_extensions(&self) -> &[&str];

    /// Marks up `source` for display.
    fn highlight(&self, source: &str) -> String;

    /// Reports likely problems in `source`.
    fn validate(&self, source: &str) -> ValidationReport;

    /// Returns `true` if `path` ends in one of [`file_extensions`](Self::file_extensions),
    /// compared without regard to ASCII case.
    fn supports_path(&self, path: &str) -> bool {
        path.rsplit_once('.').is_some_and(|(stem, extension)| {
            !stem.is_empty()
                && !stem.ends_with(['/', '\\'])
                && self
                    .file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(extension))
        })
    }
}

/// The Javalite language plugin.
#[derive(Debug, Clone, Default)]
pub struct JavaLitePlugin {
    validator: Validator,
}

impl JavaLitePlugin {
    /// A plugin with the default validator configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A plugin whose validator uses `config`.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        self.validator.config()
    }

    /// The document outline of `source`.
    ///
    /// # Errors
    ///
    /// Returns the lex or parse error if `source` is not a well-formed
    /// program.
    #[instrument(skip_all, fields(len = source.len()))]
    pub fn outline(&self, source: &str) -> Result<Vec<DocumentSymbol>, SourceError> {
        let program = parse_source(source)?;
        Ok(document_symbols(&program))
    }
}

impl LanguagePlugin for JavaLitePlugin {
    fn name(&self) -> &str {
        "Javalite"
    }

    fn file_extensions(&self) -> &[&str] {
        &["java"]
    }

    fn highlight(&self, source: &str) -> String {
        highlight(source)
    }

    fn validate(&self, source: &str) -> ValidationReport {
        self.validator.validate(source)
    }
}
