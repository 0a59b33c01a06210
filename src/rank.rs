// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-request entry point: score a batch, filter by threshold, sort.
//!
//! ```text
//! query ──trim+lowercase──┐
//!                         ▼
//! candidates ──score_with_kind──▶ filter (≥ threshold) ──▶ stable sort ──▶ Ranking
//! ```
//!
//! The query is trimmed and lowercased once here, before scoring. Candidates
//! are scored exactly as given. This asymmetry matters only for the overlap
//! tier, whose frequency vectors are case-sensitive.
//!
//! With the `parallel` feature, large candidate lists are scored on the rayon
//! pool. `collect` on an indexed parallel iterator keeps input order, so the
//! stable sort sees the same sequence either way and the output is identical.

use crate::error::RankError;
use crate::scoring::{score_with_kind, sort_by_score, ScoredCandidate};
use crate::text::is_separator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many candidates, thread hand-off costs more than it saves.
pub const PARALLEL_MIN_CANDIDATES: usize = 512;

/// Ranked candidate words, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    pub words: Vec<String>,
    pub count: usize,
}

impl Ranking {
    fn from_scored(scored: &[ScoredCandidate<'_>]) -> Self {
        let words: Vec<String> = scored.iter().map(|r| r.word.to_string()).collect();
        let count = words.len();
        Self { words, count }
    }
}

/// Trim separators from both ends of a raw query and lowercase it.
pub fn prepare_query(query: &str) -> String {
    query.trim_matches(is_separator).to_lowercase()
}

/// Rank `candidates` against `query`, keeping scores `>= threshold`.
///
/// Fails with [`RankError::EmptyQuery`] when the trimmed query is empty and
/// with [`RankError::NoCandidates`] when there is nothing to rank.
pub fn rank_candidates<S>(
    query: &str,
    candidates: &[S],
    threshold: f64,
) -> Result<Ranking, RankError>
where
    S: AsRef<str> + Sync,
{
    let scored = rank_scored(query, candidates, threshold)?;
    Ok(Ranking::from_scored(&scored))
}

/// Like [`rank_candidates`], but keeps each candidate's score and tier.
pub fn rank_scored<'a, S>(
    query: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Result<Vec<ScoredCandidate<'a>>, RankError>
where
    S: AsRef<str> + Sync,
{
    let query = validate(query, candidates)?;
    let scored = score_all(&query, candidates);
    Ok(filter_and_sort(scored, threshold))
}

/// Single-threaded [`rank_scored`], regardless of features or list size.
pub fn rank_scored_sequential<'a, S>(
    query: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Result<Vec<ScoredCandidate<'a>>, RankError>
where
    S: AsRef<str>,
{
    let query = validate(query, candidates)?;
    let scored = candidates
        .iter()
        .map(|candidate| score_one(&query, candidate.as_ref()))
        .collect();
    Ok(filter_and_sort(scored, threshold))
}

fn validate<S>(query: &str, candidates: &[S]) -> Result<String, RankError> {
    let query = prepare_query(query);
    if query.is_empty() {
        return Err(RankError::EmptyQuery);
    }
    if candidates.is_empty() {
        return Err(RankError::NoCandidates);
    }
    Ok(query)
}

fn score_one<'a>(query: &str, word: &'a str) -> ScoredCandidate<'a> {
    let similarity = score_with_kind(query, word);
    ScoredCandidate {
        word,
        score: similarity.score,
        kind: similarity.kind,
    }
}

#[cfg(feature = "parallel")]
fn score_all<'a, S>(query: &str, candidates: &'a [S]) -> Vec<ScoredCandidate<'a>>
where
    S: AsRef<str> + Sync,
{
    if candidates.len() < PARALLEL_MIN_CANDIDATES {
        return candidates
            .iter()
            .map(|candidate| score_one(query, candidate.as_ref()))
            .collect();
    }
    candidates
        .par_iter()
        .map(|candidate| score_one(query, candidate.as_ref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a, S>(query: &str, candidates: &'a [S]) -> Vec<ScoredCandidate<'a>>
where
    S: AsRef<str> + Sync,
{
    candidates
        .iter()
        .map(|candidate| score_one(query, candidate.as_ref()))
        .collect()
}

fn filter_and_sort(
    mut scored: Vec<ScoredCandidate<'_>>,
    threshold: f64,
) -> Vec<ScoredCandidate<'_>> {
    scored.retain(|r| r.score >= threshold);
    sort_by_score(&mut scored);
    scored
}
