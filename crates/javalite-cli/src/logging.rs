// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Log output for the command-line tool.
//!
//! Logs go to stderr so that command output on stdout stays clean.
//! `RUST_LOG` wins when set; otherwise the verbosity flag picks the level.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "javalite=warn",
        1 => "javalite=debug",
        _ => "javalite=trace",
    }
}

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}
