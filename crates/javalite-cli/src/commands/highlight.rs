// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `javalite highlight`: print a file as highlighted HTML.

use camino::Utf8Path;
use javalite_core::language_service::{JavaLitePlugin, LanguagePlugin};
use miette::Result;

use crate::sources::read_source;

/// Prints the highlighted markup of `file` to stdout, unchanged.
pub fn run(file: &Utf8Path) -> Result<()> {
    let source = read_source(file)?;
    print!("{}", JavaLitePlugin::new().highlight(&source));
    Ok(())
}
