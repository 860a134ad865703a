// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the heuristic validator.
//!
//! Every diagnostic must point at a line of the input.

#![no_main]

use javalite_core::validation::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let report = validate(source);
        let lines = u32::try_from(source.split('\n').count()).unwrap_or(u32::MAX);
        for diagnostic in &report {
            assert!(diagnostic.line() >= 1 && diagnostic.line() <= lines);
        }
    }
});
