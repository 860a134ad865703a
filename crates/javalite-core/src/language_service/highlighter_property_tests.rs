// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the highlighter.
//!
//! 1. **Segments reproduce the input exactly**
//! 2. **HTML output never panics and contains no raw `<` from the source**

use proptest::prelude::*;

use super::highlighter::{highlight, highlight_segments};

const FRAGMENTS: &[&str] = &[
    "class", "A", "{", "}", "int", "x", "=", "1", "2.5", ";", " ", "\n", "\t", "\"s\"", "'c'",
    "// c\n", "/* b */", ">>>=", "++", "+", "true", "null", "a", "a",
];

fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.concat())
}

fn any_source() -> impl Strategy<Value = String> {
    prop_oneof!["\\PC{0,300}", token_soup()]
}

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: concatenated segment text is the source.
    #[test]
    fn segments_round_trip(input in any_source()) {
        let joined: String = highlight_segments(&input).iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, input);
    }

    /// Property 2: every `<` in the output opens or closes a span.
    #[test]
    fn html_is_escaped(input in any_source()) {
        let html = highlight(&input);
        let stripped = html
            .replace("</span>", "")
            .split("<span class=\"hl-")
            .map(|part| part.split_once("\">").map_or(part, |(_, rest)| rest).to_string())
            .collect::<String>();
        prop_assert!(!stripped.contains('<'), "{html}");
    }
}
