// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexical similarity ranking for word hints.
//!
//! Given a query and a list of candidate words, rank the candidates by how
//! similar they look to the query and keep the ones above a threshold. No
//! embeddings, no index, no state between requests: every call is a pure
//! function of its arguments.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   text/      │────▶│   scoring/    │────▶│   rank.rs    │
//! │ (normalize,  │     │ (score tiers, │     │ (validate,   │
//! │  stop words, │     │  ordering)    │     │  filter,     │
//! │  frequencies)│     │               │     │  sort)       │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                                                    │
//!                                     ┌──────────────┴───────────┐
//!                                     ▼                          ▼
//!                              ┌─────────────┐            ┌─────────────┐
//!                              │   api/      │            │   cli/      │
//!                              │ (axum HTTP) │            │  (clap)     │
//!                              └─────────────┘            └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use hintrank::{rank_candidates, DEFAULT_THRESHOLD};
//!
//! let ranking = rank_candidates("dog", &["dog", "doghouse", "hotdog", "cat"], DEFAULT_THRESHOLD)
//!     .unwrap();
//! assert_eq!(ranking.words, vec!["dog", "doghouse", "hotdog"]);
//! assert_eq!(ranking.count, 3);
//! ```

pub mod config;
pub mod error;
pub mod rank;
pub mod scoring;
pub mod text;

#[cfg(feature = "server")]
pub mod api;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_THRESHOLD, MODEL_NAME};
pub use error::RankError;
pub use rank::{prepare_query, rank_candidates, rank_scored, rank_scored_sequential, Ranking};
pub use scoring::{
    overlap_score, score, score_with_kind, MatchKind, ScoredCandidate, Similarity,
    EXACT_MATCH_SCORE, MAX_SCORE, SHARED_TERM_BOOST, SUBSTRING_MATCH_SCORE,
};
pub use text::{frequencies, is_stop_word, normalize, FrequencyVector, STOP_WORDS};
