// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the highlighter.
//!
//! Segments must cover the input exactly.

#![no_main]

use javalite_core::language_service::{highlight, highlight_segments};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let rebuilt: String = highlight_segments(source)
            .iter()
            .map(|segment| segment.text)
            .collect();
        assert_eq!(rebuilt, source);
        let _ = highlight(source);
    }
});
