// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for parser crash safety.
//!
//! Success is no panic; a parse error is an acceptable outcome. Deep
//! nesting is covered by the parser's stack growth.

#![no_main]

use javalite_core::source_analysis::parse_source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is filtered before the parser ever sees it.
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = parse_source(source);
    }
});
