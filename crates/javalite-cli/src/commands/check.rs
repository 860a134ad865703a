// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `javalite check`: validate source files.
//!
//! Every diagnostic is printed, as a miette report on stderr or as one JSON
//! object per line on stdout. The command fails if any diagnostic is an
//! error.

use camino::{Utf8Path, Utf8PathBuf};
use javalite_core::config::ValidatorConfig;
use javalite_core::language_service::{JavaLitePlugin, LanguagePlugin};
use javalite_core::validation::Diagnostic;
use miette::Result;
use tracing::{debug, instrument};

use super::OutputFormat;
use crate::diagnostic::FileDiagnostic;
use crate::sources::{find_source_files, read_source};

/// Totals over one `check` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

/// Validates every source file under `paths`.
#[instrument(skip_all, fields(paths = paths.len()))]
pub fn run(paths: &[Utf8PathBuf], format: OutputFormat, config: ValidatorConfig) -> Result<()> {
    let files = find_source_files(paths)?;
    if files.is_empty() {
        miette::bail!("No .java source files found");
    }

    let plugin = JavaLitePlugin::with_config(config);
    let mut summary = CheckSummary::default();
    for file in &files {
        let source = read_source(file)?;
        check_source(&plugin, file, &source, format, &mut summary);
    }

    if format == OutputFormat::Text {
        eprintln!(
            "Checked {} file(s): {} error(s), {} warning(s), {} info(s)",
            summary.files, summary.errors, summary.warnings, summary.infos
        );
    }
    if summary.errors > 0 {
        let plural = if summary.errors == 1 { "" } else { "s" };
        miette::bail!(
            "{} error{plural} found in {} file(s)",
            summary.errors,
            summary.files
        );
    }
    Ok(())
}

fn check_source(
    plugin: &JavaLitePlugin,
    file: &Utf8Path,
    source: &str,
    format: OutputFormat,
    summary: &mut CheckSummary,
) {
    let report = plugin.validate(source);
    debug!(%file, diagnostics = report.len(), "validated");

    summary.files += 1;
    summary.errors += report.errors().len();
    summary.warnings += report.warnings().len();
    summary.infos += report.infos().len();

    for diagnostic in &report {
        match format {
            OutputFormat::Text => {
                let rendered = FileDiagnostic::from_core_diagnostic(diagnostic, file.as_str(), source);
                eprintln!("{:?}", miette::Report::new(rendered));
            }
            OutputFormat::Json => println!("{}", to_json(file, diagnostic)),
        }
    }
}

/// The JSON line printed for `diagnostic`.
#[must_use]
pub fn to_json(file: &Utf8Path, diagnostic: &Diagnostic) -> serde_json::Value {
    serde_json::json!({
        "file": file.as_str(),
        "severity": diagnostic.severity().as_str(),
        "line": diagnostic.line(),
        "column": diagnostic.column(),
        "code": diagnostic.code(),
        "message": diagnostic.message(),
    })
}
