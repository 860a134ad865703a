// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lexer crash safety.
//!
//! With trivia kept, the token texts must concatenate back to the input.

#![no_main]

use javalite_core::source_analysis::lex_with_trivia;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(tokens) = lex_with_trivia(source) {
            let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
            assert_eq!(rebuilt, source);
        }
    }
});
