// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term frequency vectors over whitespace tokens.
//!
//! Tokens are split on whitespace exactly as given: no lowercasing and no
//! punctuation stripping. "Dog" and "dog" are different terms here, and so are
//! "dog," and "dog". Stop words and single-character tokens are dropped.
//!
//! Counts are integers, so dot products and squared magnitudes are computed
//! exactly in `u64` and only converted to `f64` at the end. Summation order
//! (and therefore `HashMap` iteration order) cannot change a score.

use std::collections::HashMap;

use super::stopwords::is_stop_word;

/// Occurrence counts per token, borrowing from the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector<'a> {
    counts: HashMap<&'a str, u32>,
}

impl<'a> FrequencyVector<'a> {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.counts.iter().map(|(token, count)| (*token, *count))
    }

    /// Tokens sorted by descending count, then alphabetically.
    pub fn sorted(&self) -> Vec<(&'a str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Σ self[w] · other[w] over the union of keys.
    ///
    /// Tokens missing from either side contribute zero, so iterating the
    /// smaller map is enough.
    pub fn dot(&self, other: &FrequencyVector<'_>) -> u64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(token, count)| u64::from(*count) * u64::from(large.get(token)))
            .sum()
    }

    /// Euclidean norm of the count vector.
    pub fn magnitude(&self) -> f64 {
        let squared: u64 = self
            .counts
            .values()
            .map(|count| u64::from(*count) * u64::from(*count))
            .sum();
        (squared as f64).sqrt()
    }

    /// Number of tokens present in both vectors.
    pub fn shared_terms(&self, other: &FrequencyVector<'_>) -> usize {
        self.counts
            .keys()
            .filter(|token| other.contains(token))
            .count()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyVector<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for token in iter {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }
}

/// Token separator: Unicode whitespace plus the ASCII file, group, record and
/// unit separators (U+001C to U+001F), which Python's `str.split` also breaks on.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Non-empty tokens of `text` between separators.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}

/// Does `token` count toward the frequency vector?
///
/// Length is measured in characters, not bytes: "é" is one character and is
/// dropped like "a".
pub fn is_countable(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some() && chars.next().is_some() && !is_stop_word(token)
}

/// Build the frequency vector of `text`.
///
/// Empty for empty input and for input made only of stop words and
/// single-character fragments.
pub fn frequencies(text: &str) -> FrequencyVector<'_> {
    tokens(text).filter(|t| is_countable(t)).collect()
}
