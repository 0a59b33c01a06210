//! Scoring properties.
//!
//! - Self-similarity is always 1.0
//! - Containment is always 0.8
//! - Scores stay in [0.0, 1.0]
//! - Scoring is symmetric

use super::common::*;
use hintrank::{
    frequencies, score, score_with_kind, MatchKind, EXACT_MATCH_SCORE, MAX_SCORE,
    SUBSTRING_MATCH_SCORE,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: score(s, s) == 1.0 for every string.
    #[test]
    fn prop_self_similarity(text in any_text_strategy()) {
        prop_assert_eq!(score(&text, &text), EXACT_MATCH_SCORE);
    }

    /// Property: exact match ignores ASCII case.
    #[test]
    fn prop_exact_ignores_case(text in messy_word_strategy()) {
        prop_assert_eq!(score(&text.to_uppercase(), &text.to_lowercase()), EXACT_MATCH_SCORE);
    }

    /// Property: a strict substring scores 0.8 in both directions.
    #[test]
    fn prop_substring_scores_fixed_tier(
        needle in word_strategy(),
        prefix in "[a-z ]{0,4}",
        suffix in "[a-z ]{1,4}",
    ) {
        let haystack = format!("{}{}{}", prefix, needle, suffix);
        prop_assert_eq!(score(&needle, &haystack), SUBSTRING_MATCH_SCORE);
        prop_assert_eq!(score(&haystack, &needle), SUBSTRING_MATCH_SCORE);
        prop_assert_eq!(score(&needle.to_uppercase(), &haystack), SUBSTRING_MATCH_SCORE);
    }

    /// Property: every score is clamped into [0.0, 1.0].
    #[test]
    fn prop_score_bounded(query in any_text_strategy(), word in any_text_strategy()) {
        let s = score(&query, &word);
        prop_assert!(s.is_finite());
        prop_assert!((0.0..=MAX_SCORE).contains(&s), "score {} out of bounds", s);
    }

    /// Property: phrase scores are bounded too, and hit the upper bound often.
    #[test]
    fn prop_phrase_score_bounded(query in phrase_strategy(), word in phrase_strategy()) {
        let s = score(&query, &word);
        prop_assert!((0.0..=MAX_SCORE).contains(&s), "score {} out of bounds", s);
    }

    /// Property: score(a, b) == score(b, a).
    #[test]
    fn prop_symmetric(a in phrase_strategy(), b in phrase_strategy()) {
        prop_assert_eq!(score(&a, &b), score(&b, &a));
    }

    /// Property: reordering the words of a phrase keeps it at full similarity.
    #[test]
    fn prop_word_order_irrelevant(words in prop::collection::vec(word_strategy(), 2..5)) {
        let forward = words.join(" ");
        prop_assume!(!frequencies(&forward).is_empty());
        let mut shuffled = words.clone();
        shuffled.rotate_left(1);
        let rotated = shuffled.join(" ");
        prop_assert_eq!(score(&forward, &rotated), MAX_SCORE);
    }

    /// Property: a stop-word-only query shares no terms with anything.
    #[test]
    fn prop_stop_word_query_has_no_overlap(word in phrase_strategy()) {
        let query = "the and is";
        let sim = score_with_kind(query, &word);
        prop_assert_ne!(sim.kind, MatchKind::Overlap);
        if sim.kind == MatchKind::None {
            prop_assert_eq!(sim.score, 0.0);
        }
    }

    /// Property: the reported tier agrees with the score.
    #[test]
    fn prop_kind_consistent_with_score(query in phrase_strategy(), word in phrase_strategy()) {
        let sim = score_with_kind(&query, &word);
        match sim.kind {
            MatchKind::Exact => prop_assert_eq!(sim.score, EXACT_MATCH_SCORE),
            MatchKind::Substring => prop_assert_eq!(sim.score, SUBSTRING_MATCH_SCORE),
            MatchKind::Overlap => prop_assert!(sim.score > 0.0),
            MatchKind::None => prop_assert_eq!(sim.score, 0.0),
        }
    }
}

#[cfg(test)]
mod worked_examples {
    use super::*;

    #[test]
    fn test_reordered_phrase_both_directions() {
        assert_eq!(score("big red dog", "red dog big"), MAX_SCORE);
        assert_eq!(score("red dog big", "big red dog"), MAX_SCORE);
    }

    #[test]
    fn test_stop_word_query_against_unrelated_word() {
        assert_eq!(score("the and is", "elephant"), 0.0);
    }

    #[test]
    fn test_substring_outranks_weak_overlap() {
        // "dog" inside "hotdog" (0.8) beats one shared term out of several
        let overlap = score("dog park bench", "dog sled race");
        assert!(overlap < SUBSTRING_MATCH_SCORE, "overlap {}", overlap);
        assert!(approx_eq(overlap, 1.0 / 3.0 + 0.2));
    }
}
