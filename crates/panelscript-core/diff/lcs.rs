//! Longest common subsequence over line arrays
//!
//! Classic O(n·m) dynamic programming with full backtrack reconstruction.
//! Both the table and the backtrack are O(n·m) time and the table is O(n·m)
//! space, which is the scaling limit of the whole diff engine: callers
//! diffing very large documents should chunk per page rather than feed the
//! entire document through at once.

use alloc::{vec, vec::Vec};

/// Compute the longest common subsequence of two line slices
///
/// Returns the common lines in order. Ties are broken toward the old side,
/// which keeps the reconstruction deterministic for identical input.
pub(super) fn longest_common_subsequence<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<&'a str> {
    if old.is_empty() || new.is_empty() {
        return Vec::new();
    }

    // lengths[i][j] = LCS length of old[i..] vs new[j..]
    let mut lengths = vec![vec![0u32; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lengths[i][j] = if old[i] == new[j] {
                lengths[i + 1][j + 1] + 1
            } else {
                lengths[i + 1][j].max(lengths[i][j + 1])
            };
        }
    }

    let mut common = Vec::with_capacity(lengths[0][0] as usize);
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            common.push(old[i]);
            i += 1;
            j += 1;
        } else if lengths[i + 1][j] >= lengths[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    common
}
