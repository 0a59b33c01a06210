// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The stop-word set: function words that carry no hint about a drawing.
//!
//! Built once on first use and shared read-only for the life of the process.
//! Membership is case-sensitive; callers that want "The" treated as "the" must
//! lowercase first.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English function words excluded from frequency comparison.
pub const STOP_WORDS: &[&str] = &[
    // articles & conjunctions
    "a", "an", "and", "the",
    // prepositions
    "as", "at", "by", "for", "from", "in", "of", "on", "to", "with",
    // be/have/do
    "are", "be", "has", "is", "was", "have", "had", "do", "does", "did",
    // pronouns & determiners
    "he", "it", "its", "i", "you", "we", "they", "that", "this", "these", "those",
    // modals
    "will", "can", "could", "would", "should", "may", "might",
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The process-wide stop-word set.
pub fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Is `token` a stop word? Exact, case-sensitive match.
pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token)
}
