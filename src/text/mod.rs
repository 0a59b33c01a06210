// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text preprocessing: normalization, stop words, and term frequencies.
//!
//! Everything here is a pure function of its input. The only shared state is
//! the stop-word set and the compiled punctuation pattern, both initialized on
//! first use and never mutated.

pub mod frequency;
pub mod normalize;
pub mod stopwords;

pub use frequency::{frequencies, is_countable, is_separator, tokens, FrequencyVector};
pub use normalize::normalize;
pub use stopwords::{is_stop_word, stop_words, STOP_WORDS};
