//! Dice-coefficient bigram similarity between lines
//!
//! Used to decide whether two differing lines are "the same line edited"
//! versus "one removed, one added". Operates on overlapping two-character
//! substrings counted as a multiset.

use crate::utils::hashers::create_hash_map_with_capacity;
use alloc::vec::Vec;

/// Similarity assigned to two short lines that carry no bigram signal
///
/// Single-character lines produce no bigrams at all; a pair of them at the
/// same diff position is treated as an in-place edit rather than
/// incomparable, so this sits above the modified-line threshold.
const SHORT_LINE_SIMILARITY: f32 = 0.75;

/// Dice coefficient over character bigrams, in `0.0..=1.0`
///
/// Identical strings score 1.0. If either string is empty the score is 0.0
/// (unless both are empty, which is equality). When both strings are too
/// short to form a bigram the score is [`SHORT_LINE_SIMILARITY`].
///
/// # Example
///
/// ```rust
/// use panelscript_core::diff::bigram_similarity;
///
/// assert_eq!(bigram_similarity("night", "night"), 1.0);
/// assert!(bigram_similarity("night", "nights") > 0.8);
/// assert_eq!(bigram_similarity("night", ""), 0.0);
/// ```
#[must_use]
pub fn bigram_similarity(a: &str, b: &str) -> f32 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_bigrams = bigrams(a);
    let b_bigrams = bigrams(b);
    if a_bigrams.is_empty() && b_bigrams.is_empty() {
        return SHORT_LINE_SIMILARITY;
    }
    if a_bigrams.is_empty() || b_bigrams.is_empty() {
        return 0.0;
    }

    let mut counts = create_hash_map_with_capacity::<[char; 2], u32>(a_bigrams.len());
    for bigram in &a_bigrams {
        *counts.entry(*bigram).or_insert(0) += 1;
    }

    let mut overlap = 0u32;
    for bigram in &b_bigrams {
        if let Some(count) = counts.get_mut(bigram) {
            if *count > 0 {
                *count -= 1;
                overlap += 1;
            }
        }
    }

    (2.0 * overlap as f32) / (a_bigrams.len() + b_bigrams.len()) as f32
}

/// Overlapping character bigrams of a string
fn bigrams(s: &str) -> Vec<[char; 2]> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| [w[0], w[1]]).collect()
}
