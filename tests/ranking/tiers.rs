//! Tier ordering: exact > substring > most overlaps, with clamping.

use super::common::approx_eq;
use hintrank::{
    rank_scored, score, score_with_kind, MatchKind, MAX_SCORE, SUBSTRING_MATCH_SCORE,
};

#[test]
fn test_substring_beats_partial_overlap() {
    let scored = rank_scored(
        "red fire truck",
        &["fire engine", "red fire truck toy"],
        0.1,
    )
    .unwrap();

    assert_eq!(scored[0].word, "red fire truck toy");
    assert_eq!(scored[0].kind, MatchKind::Substring);
    assert_eq!(scored[1].word, "fire engine");
    assert_eq!(scored[1].kind, MatchKind::Overlap);
    assert!(scored[1].score < SUBSTRING_MATCH_SCORE);
}

#[test]
fn test_clamped_overlap_ranks_above_substring() {
    // Two shared terms push the overlap to 1.0 after clamping
    let scored = rank_scored("ice cream", &["ice", "cream ice"], 0.1).unwrap();
    assert_eq!(scored[0].word, "cream ice");
    assert_eq!(scored[0].score, MAX_SCORE);
    assert_eq!(scored[0].kind, MatchKind::Overlap);
    assert_eq!(scored[1].word, "ice");
    assert_eq!(scored[1].kind, MatchKind::Substring);
}

#[test]
fn test_overlap_does_not_strip_punctuation() {
    // "truck," keeps its comma in the frequency vector
    assert!(approx_eq(score("fire truck", "truck, fire"), 0.7));
    let sim = score_with_kind("fire truck", "truck, fire");
    assert_eq!(sim.kind, MatchKind::Overlap);
}

#[test]
fn test_hyphenated_terms_are_single_tokens() {
    assert_eq!(score("ice-cream cone", "cone ice-cream"), MAX_SCORE);
    assert_eq!(score_with_kind("ice cream", "ice-cream cone").kind, MatchKind::None);
}
