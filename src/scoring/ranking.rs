// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: highest score first, input order breaks ties.
//!
//! Scores are plain numbers here, unlike the tiers that produced them. A
//! substring match (0.8) loses to an overlap match that clamped to 1.0, and
//! two candidates with the same score keep the order the caller gave them.
//! That second rule is why every sort in this module is stable.

use std::cmp::Ordering;

use super::similarity::MatchKind;

/// A candidate together with its clamped score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a str,
    pub score: f64,
    pub kind: MatchKind,
}

/// Compare two results for ranking: descending score.
///
/// Equal scores compare `Equal`, so a stable sort leaves them in input
/// order. Scores are finite by construction; `total_cmp` keeps the ordering
/// total regardless.
pub fn compare_scored(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Stable sort, best first.
pub fn sort_by_score(results: &mut [ScoredCandidate<'_>]) {
    results.sort_by(compare_scored);
}
