//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// ============================================================================
// WORD LISTS
// ============================================================================

/// A slice of a real hint word list: single words, compounds, phrases.
pub const HINT_WORDS: &[&str] = &[
    "dog",
    "hot dog",
    "doghouse",
    "hotdog",
    "cat",
    "catfish",
    "fire truck",
    "fire station",
    "firefighter",
    "ice cream",
    "ice-cream cone",
    "ice cube",
    "big red dog",
    "red dog big",
    "t-shirt",
    "rock'n'roll",
    "the moon",
    "moon",
    "Cat",
];

/// Owned copy of [`HINT_WORDS`].
pub fn hint_words() -> Vec<String> {
    HINT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Floating-point comparison with a fixed tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Lowercase word-like strings.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

/// Mixed-case words with the occasional punctuation mark.
pub fn messy_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9'.,!-]{1,10}").unwrap()
}

/// Whitespace-separated phrases of 1..5 words, sometimes including stop words.
pub fn phrase_strategy() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        4 => word_strategy(),
        1 => prop::sample::select(vec!["the", "and", "is", "of", "a"]).prop_map(str::to_string),
    ];
    prop::collection::vec(token, 1..5).prop_map(|words| words.join(" "))
}

/// Arbitrary printable text, including Unicode and odd whitespace.
pub fn any_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[\\PC\\t\\n ]{0,30}").unwrap()
}

/// Non-empty candidate lists.
pub fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase_strategy(), 1..20)
}
