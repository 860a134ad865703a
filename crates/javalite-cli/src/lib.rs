// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Javalite command-line front end.
//!
//! The `javalite` binary is a thin layer over `javalite-core`: it finds
//! files, reads `javalite.toml`, and renders results for a terminal.

pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod logging;
pub mod sources;
