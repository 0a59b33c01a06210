// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a candidate word gets its number.
//!
//! Exact beats substring beats term overlap. Every score is clamped into
//! `[0.0, 1.0]` before anything compares it against a threshold or sorts by it.

mod similarity;
pub mod ranking;

pub use similarity::*;
pub use ranking::{compare_scored, sort_by_score, ScoredCandidate};
