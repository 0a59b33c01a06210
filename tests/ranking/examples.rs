//! Worked examples: the behaviour a hint frontend relies on.

use super::common::*;
use hintrank::{rank_candidates, rank_scored, RankError, DEFAULT_THRESHOLD};

#[test]
fn test_dog_query_ranks_exact_then_substrings() {
    let ranking = rank_candidates(
        "dog",
        &["dog", "doghouse", "hotdog", "cat"],
        DEFAULT_THRESHOLD,
    )
    .unwrap();

    assert_eq!(ranking.words, vec!["dog", "doghouse", "hotdog"]);
    assert_eq!(ranking.count, 3);
}

#[test]
fn test_substring_ties_follow_input_order() {
    let ranking =
        rank_candidates("dog", &["hotdog", "doghouse", "dog"], DEFAULT_THRESHOLD).unwrap();
    assert_eq!(ranking.words, vec!["dog", "hotdog", "doghouse"]);
}

#[test]
fn test_empty_candidate_list_is_invalid() {
    let empty: Vec<String> = Vec::new();
    let err = rank_candidates("cat", &empty, DEFAULT_THRESHOLD).unwrap_err();
    assert_eq!(err, RankError::NoCandidates);
    assert!(err.is_invalid_request());
}

#[test]
fn test_empty_query_is_invalid() {
    let err = rank_candidates("", &hint_words(), DEFAULT_THRESHOLD).unwrap_err();
    assert_eq!(err, RankError::EmptyQuery);
}

#[test]
fn test_query_case_and_padding_ignored() {
    let padded = rank_candidates("  DOG\n", &hint_words(), DEFAULT_THRESHOLD).unwrap();
    let plain = rank_candidates("dog", &hint_words(), DEFAULT_THRESHOLD).unwrap();
    assert_eq!(padded, plain);
}

#[test]
fn test_full_word_list() {
    let words = hint_words();
    let scored = rank_scored("dog", &words, DEFAULT_THRESHOLD).unwrap();
    let ranked: Vec<&str> = scored.iter().map(|r| r.word).collect();

    // Exact first, then every containment in input order
    assert_eq!(
        ranked,
        vec![
            "dog",
            "hot dog",
            "doghouse",
            "hotdog",
            "big red dog",
            "red dog big",
        ]
    );
}

#[test]
fn test_case_variants_are_exact_matches() {
    let ranking = rank_candidates("cat", &hint_words(), DEFAULT_THRESHOLD).unwrap();
    assert_eq!(ranking.words, vec!["cat", "Cat", "catfish"]);
}

#[test]
fn test_idempotent() {
    let words = hint_words();
    let first = rank_candidates("fire truck", &words, DEFAULT_THRESHOLD).unwrap();
    let second = rank_candidates("fire truck", &words, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(first, second);
}
