// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind hint similarity.
//!
//! Three tiers, checked in order, first hit wins:
//!
//! | Tier      | Test                                      | Score            |
//! |-----------|-------------------------------------------|------------------|
//! | Exact     | case-insensitive equality                 | 1.0              |
//! | Substring | either side contains the other (lowered)  | 0.8              |
//! | Overlap   | cosine of term frequencies + shared boost | [0.0, 1.0]       |
//!
//! The substring tier sits above most overlap scores on purpose: "dog" inside
//! "hotdog" is a stronger hint than two phrases that happen to share a noun.
//! An overlap score only reaches 0.8 or more when the phrases share several
//! terms.
//!
//! # Overlap scoring
//!
//! ```text
//! cosine = dot(q, w) / (|q| · |w|)
//! score  = min(cosine + 0.2 · shared_terms, 1.0)
//! ```
//!
//! The frequency vectors come from the raw strings, not from
//! [`normalize`](crate::text::normalize). Case and punctuation therefore still
//! matter in this tier even though the first two tiers ignore case.

use crate::text::{frequencies, FrequencyVector};

/// Score for a case-insensitive exact match.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Score when one string contains the other.
pub const SUBSTRING_MATCH_SCORE: f64 = 0.8;

/// Added to the cosine per term present in both strings.
pub const SHARED_TERM_BOOST: f64 = 0.2;

/// Upper bound for every score. The boost can push the raw overlap past it.
pub const MAX_SCORE: f64 = 1.0;

/// Which tier produced a score.
///
/// Ordered best first, so `Exact < Substring < Overlap < None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    Exact,
    Substring,
    /// Term overlap with a non-zero score.
    Overlap,
    /// Nothing in common.
    None,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
            MatchKind::Overlap => "overlap",
            MatchKind::None => "none",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clamped score and the tier it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub score: f64,
    pub kind: MatchKind,
}

impl Similarity {
    const NONE: Similarity = Similarity {
        score: 0.0,
        kind: MatchKind::None,
    };
}

/// Similarity of `word` to `query` in `[0.0, 1.0]`.
pub fn score(query: &str, word: &str) -> f64 {
    score_with_kind(query, word).score
}

/// Like [`score`], but also reports which tier matched.
pub fn score_with_kind(query: &str, word: &str) -> Similarity {
    let query_lower = query.to_lowercase();
    let word_lower = word.to_lowercase();

    if query_lower == word_lower {
        return Similarity {
            score: EXACT_MATCH_SCORE,
            kind: MatchKind::Exact,
        };
    }

    if contains_either(&query_lower, &word_lower) {
        return Similarity {
            score: SUBSTRING_MATCH_SCORE,
            kind: MatchKind::Substring,
        };
    }

    let overlap = overlap_score(&frequencies(query), &frequencies(word));
    if overlap > 0.0 {
        Similarity {
            score: overlap.min(MAX_SCORE),
            kind: MatchKind::Overlap,
        }
    } else {
        Similarity::NONE
    }
}

/// One string contains the other. The contained side must be non-empty, so
/// an empty candidate never matches everything.
fn contains_either(a: &str, b: &str) -> bool {
    (!b.is_empty() && a.contains(b)) || (!a.is_empty() && b.contains(a))
}

/// Cosine similarity plus the shared-term boost, unclamped.
///
/// Zero when either vector is empty or has zero magnitude.
pub fn overlap_score(query: &FrequencyVector<'_>, word: &FrequencyVector<'_>) -> f64 {
    if query.is_empty() || word.is_empty() {
        return 0.0;
    }

    let query_magnitude = query.magnitude();
    let word_magnitude = word.magnitude();
    if query_magnitude == 0.0 || word_magnitude == 0.0 {
        return 0.0;
    }

    let cosine = query.dot(word) as f64 / (query_magnitude * word_magnitude);
    let shared = query.shared_terms(word);
    cosine + SHARED_TERM_BOOST * shared as f64
}
