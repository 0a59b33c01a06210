// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pairwise score invariants.
//!
//! Scores must be finite, inside [0, 1], symmetric, and deterministic. The
//! tier reported alongside the score must agree with the score it produced.

#![no_main]

use arbitrary::Arbitrary;
use hintrank::{score, score_with_kind, MatchKind, EXACT_MATCH_SCORE, SUBSTRING_MATCH_SCORE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Pair {
    query: String,
    word: String,
}

fn capped(s: &str) -> &str {
    match s.char_indices().nth(200) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fuzz_target!(|pair: Pair| {
    let query = capped(&pair.query);
    let word = capped(&pair.word);

    let first = score_with_kind(query, word);
    let second = score_with_kind(query, word);

    // INVARIANT 1: Deterministic
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(first.kind, second.kind);

    // INVARIANT 2: Bounded
    assert!(first.score.is_finite(), "score {} is not finite", first.score);
    assert!(
        (0.0..=1.0).contains(&first.score),
        "score {} out of range for {:?} / {:?}",
        first.score,
        query,
        word
    );

    // INVARIANT 3: Symmetric
    let swapped = score(word, query);
    assert_eq!(
        first.score.to_bits(),
        swapped.to_bits(),
        "score({:?}, {:?}) != score({:?}, {:?})",
        query,
        word,
        word,
        query
    );

    // INVARIANT 4: Tier agrees with score
    match first.kind {
        MatchKind::Exact => assert_eq!(first.score, EXACT_MATCH_SCORE),
        MatchKind::Substring => assert_eq!(first.score, SUBSTRING_MATCH_SCORE),
        MatchKind::Overlap => assert!(first.score > 0.0),
        MatchKind::None => assert_eq!(first.score, 0.0),
    }
});
