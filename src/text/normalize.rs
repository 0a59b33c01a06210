// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: lowercase, punctuation to spaces, collapsed whitespace.
//!
//! "Hot-Dog (stand)!" becomes "hot-dog stand". Hyphens survive because compound
//! words like "t-shirt" or "ice-cream" are single hints, and splitting them would
//! turn one token into two weaker ones.
//!
//! Word characters follow the Unicode definition (letters, digits, underscore),
//! so "café" and "東京" pass through untouched apart from case folding.

use regex::Regex;
use std::sync::OnceLock;

use super::frequency::tokens;

/// Anything that is not a word character, whitespace, or a hyphen.
const PUNCTUATION_PATTERN: &str = r"[^\w\s-]";

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(PUNCTUATION_PATTERN).expect("valid regex literal"))
}

/// Normalize a string for comparison.
///
/// 1. Lowercase
/// 2. Replace every character outside `[\w\s-]` with a space
/// 3. Collapse whitespace runs and trim
///
/// Never fails. `""` maps to `""`.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let spaced = punctuation().replace_all(&lowered, " ");
    tokens(&spaced).collect::<Vec<_>>().join(" ")
}
