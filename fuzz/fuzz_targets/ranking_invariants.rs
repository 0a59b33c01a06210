// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for batch ranking invariants.
//!
//! Every kept candidate meets the threshold, the output is sorted by score
//! descending, ties keep input order, and nothing is invented.

#![no_main]

use arbitrary::Arbitrary;
use hintrank::{prepare_query, rank_candidates, rank_scored, rank_scored_sequential};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    words: Vec<String>,
    threshold: u8,
}

fuzz_target!(|input: Input| {
    if input.words.len() > 256 {
        return;
    }
    let threshold = f64::from(input.threshold) / 255.0;

    let scored = match rank_scored(&input.query, &input.words, threshold) {
        Ok(scored) => scored,
        Err(e) => {
            assert!(e.is_invalid_request());
            assert!(prepare_query(&input.query).is_empty() || input.words.is_empty());
            return;
        }
    };

    // INVARIANT 1: Threshold is inclusive and respected
    for s in &scored {
        assert!(s.score >= threshold, "{} below threshold {}", s.score, threshold);
        assert!(s.score <= 1.0);
    }

    // INVARIANT 2: Sorted non-increasing, ties in input order
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    let positions: Vec<usize> = scored
        .iter()
        .map(|s| {
            input
                .words
                .iter()
                .position(|w| std::ptr::eq(w.as_str(), s.word))
                .expect("ranked word comes from the input")
        })
        .collect();
    for (pair, idx) in scored.windows(2).zip(positions.windows(2)) {
        // Empty strings share a dangling pointer, so their positions are ambiguous.
        if pair[0].score == pair[1].score && !pair[0].word.is_empty() && !pair[1].word.is_empty() {
            assert!(idx[0] < idx[1], "tie broke input order");
        }
    }

    // INVARIANT 3: Parallel and sequential paths agree
    let sequential = rank_scored_sequential(&input.query, &input.words, threshold)
        .expect("validated above");
    assert_eq!(scored.len(), sequential.len());
    for (a, b) in scored.iter().zip(sequential.iter()) {
        assert!(std::ptr::eq(a.word, b.word));
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    // INVARIANT 4: Plain ranking mirrors the scored one
    let ranking = rank_candidates(&input.query, &input.words, threshold).expect("validated above");
    assert_eq!(ranking.count, ranking.words.len());
    assert_eq!(ranking.count, scored.len());
});
