//! Line-level diff with fuzzy edit detection
//!
//! Anchors unchanged lines with an LCS pass, then walks both sides in
//! lockstep. An old line missing from the common subsequence is tentatively
//! removed; if a sufficiently similar unconsumed new line sits within a
//! short lookahead, the pair is reclassified as one modified line carrying
//! both texts.

use alloc::{string::ToString, vec::Vec};

use super::lcs::longest_common_subsequence;
use super::similarity::bigram_similarity;
use super::{DiffLine, DiffLineKind, DiffStats, LineDiff};

/// Similarity above which a removed/added pair becomes one modified line
///
/// Observable contract: retuning this changes diff output for every caller.
const SIMILARITY_THRESHOLD: f32 = 0.6;

/// How many unconsumed new lines to scan for a fuzzy pairing
const MODIFIED_LOOKAHEAD: usize = 3;

/// Compute a line-level diff between two versions of script text
///
/// Splits on line boundaries, anchors on the longest common subsequence, and
/// classifies every line as unchanged, added, removed, or modified. Line
/// numbers are 1-based on their respective sides.
///
/// Two empty inputs produce an empty diff with 100% similarity.
///
/// # Example
///
/// ```rust
/// use panelscript_core::diff::{compute_line_diff, DiffLineKind};
///
/// let diff = compute_line_diff("A\nB\nC", "A\nX\nC");
/// assert_eq!(diff.lines[1].kind, DiffLineKind::Modified);
/// assert_eq!(diff.stats.unchanged, 2);
/// ```
#[must_use]
pub fn compute_line_diff(old_text: &str, new_text: &str) -> LineDiff {
    let old: Vec<&str> = old_text.lines().collect();
    let new: Vec<&str> = new_text.lines().collect();
    let common = longest_common_subsequence(&old, &new);

    let mut lines = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < old.len() || j < new.len() {
        let anchor = common.get(k).copied();
        let old_at_anchor = anchor.is_some_and(|a| i < old.len() && old[i] == a);
        let new_at_anchor = anchor.is_some_and(|a| j < new.len() && new[j] == a);

        if old_at_anchor && new_at_anchor {
            lines.push(DiffLine::unchanged(old[i], i + 1, j + 1));
            i += 1;
            j += 1;
            k += 1;
        } else if i < old.len() && !old_at_anchor {
            if let Some(pair) = find_edit_pair(old[i], &new, j, anchor) {
                // New lines skipped over to reach the pair are plain additions.
                while j < pair {
                    lines.push(DiffLine::added(new[j], j + 1));
                    j += 1;
                }
                lines.push(DiffLine::modified(old[i], new[j], i + 1, j + 1));
                i += 1;
                j += 1;
            } else {
                lines.push(DiffLine::removed(old[i], i + 1));
                i += 1;
            }
        } else if j < new.len() {
            lines.push(DiffLine::added(new[j], j + 1));
            j += 1;
        } else {
            // Old side still has lines but every anchor and new line is
            // consumed; they can only be removals.
            lines.push(DiffLine::removed(old[i], i + 1));
            i += 1;
        }
    }

    let stats = DiffStats::tally(&lines);
    let similarity = stats.similarity();
    LineDiff {
        lines,
        stats,
        similarity,
    }
}

/// Scan the next few unconsumed new lines for a fuzzy match to `old_line`
///
/// Stops at the next anchor: a line that the LCS already accounts for can
/// never be consumed by an edit pairing. Returns the index of the paired
/// new line.
fn find_edit_pair(
    old_line: &str,
    new: &[&str],
    from: usize,
    anchor: Option<&str>,
) -> Option<usize> {
    for offset in 0..MODIFIED_LOOKAHEAD {
        let jj = from + offset;
        if jj >= new.len() {
            return None;
        }
        if anchor == Some(new[jj]) {
            return None;
        }
        if bigram_similarity(old_line, new[jj]) > SIMILARITY_THRESHOLD {
            return Some(jj);
        }
    }
    None
}

impl DiffLine {
    /// An unchanged line present on both sides
    fn unchanged(text: &str, old_number: usize, new_number: usize) -> Self {
        Self {
            kind: DiffLineKind::Unchanged,
            old_number: Some(old_number),
            new_number: Some(new_number),
            content: text.to_string(),
            old_content: None,
        }
    }

    /// A line only present on the new side
    fn added(text: &str, new_number: usize) -> Self {
        Self {
            kind: DiffLineKind::Added,
            old_number: None,
            new_number: Some(new_number),
            content: text.to_string(),
            old_content: None,
        }
    }

    /// A line only present on the old side
    fn removed(text: &str, old_number: usize) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            old_number: Some(old_number),
            new_number: None,
            content: text.to_string(),
            old_content: None,
        }
    }

    /// An old line probably edited into a new one
    fn modified(old_text: &str, new_text: &str, old_number: usize, new_number: usize) -> Self {
        Self {
            kind: DiffLineKind::Modified,
            old_number: Some(old_number),
            new_number: Some(new_number),
            content: new_text.to_string(),
            old_content: Some(old_text.to_string()),
        }
    }
}

impl DiffStats {
    /// Count each line kind in a diff
    fn tally(lines: &[DiffLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind {
                DiffLineKind::Unchanged => stats.unchanged += 1,
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Removed => stats.removed += 1,
                DiffLineKind::Modified => stats.modified += 1,
            }
        }
        stats
    }

    /// Total number of diff rows
    #[must_use]
    pub const fn total(&self) -> usize {
        self.unchanged + self.added + self.removed + self.modified
    }

    /// Percentage of rows that are unchanged; an empty diff is 100% similar
    #[must_use]
    pub fn similarity(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            100.0
        } else {
            self.unchanged as f32 / total as f32 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_are_fully_unchanged() {
        let diff = compute_line_diff("a\nb", "a\nb");
        assert!(diff
            .lines
            .iter()
            .all(|line| line.kind == DiffLineKind::Unchanged));
        assert_eq!(diff.similarity, 100.0);
    }

    #[test]
    fn empty_inputs_yield_neutral_diff() {
        let diff = compute_line_diff("", "");
        assert!(diff.lines.is_empty());
        assert_eq!(diff.stats.total(), 0);
        assert_eq!(diff.similarity, 100.0);
    }

    #[test]
    fn replaced_line_is_modified_not_removed_plus_added() {
        let diff = compute_line_diff("A\nB\nC", "A\nX\nC");
        assert_eq!(diff.lines.len(), 3);
        assert_eq!(diff.lines[1].kind, DiffLineKind::Modified);
        assert_eq!(diff.lines[1].old_content.as_deref(), Some("B"));
        assert_eq!(diff.lines[1].content, "X");
        assert_eq!(diff.stats.modified, 1);
        assert_eq!(diff.stats.unchanged, 2);
        let expected = 2.0 / 3.0 * 100.0;
        assert!((diff.similarity - expected).abs() < 0.01);
    }

    #[test]
    fn dissimilar_long_replacement_splits_into_remove_and_add() {
        let diff = compute_line_diff(
            "anchor\nThe rooftop chase begins here.\nanchor end",
            "anchor\nCompletely unrelated words instead.\nanchor end",
        );
        assert_eq!(diff.stats.removed, 1);
        assert_eq!(diff.stats.added, 1);
        assert_eq!(diff.stats.modified, 0);
    }

    #[test]
    fn typo_fix_pairs_across_a_small_offset() {
        let old = "keep one\nThe hero crosses the rooftop.\nkeep two";
        let new = "keep one\nnew beat inserted\nThe hero crosses the rooftops.\nkeep two";
        let diff = compute_line_diff(old, new);
        assert_eq!(diff.stats.modified, 1);
        assert_eq!(diff.stats.added, 1);
        assert_eq!(diff.stats.unchanged, 2);
    }

    #[test]
    fn pure_addition_keeps_old_lines_unchanged() {
        let diff = compute_line_diff("a\nb", "a\nb\nc");
        assert_eq!(diff.stats.added, 1);
        assert_eq!(diff.stats.unchanged, 2);
        assert_eq!(diff.lines[2].new_number, Some(3));
        assert_eq!(diff.lines[2].old_number, None);
    }

    #[test]
    fn pure_removal_tracks_old_numbers() {
        let diff = compute_line_diff("a\nb\nc", "a\nc");
        assert_eq!(diff.stats.removed, 1);
        assert_eq!(diff.lines[1].old_number, Some(2));
        assert_eq!(diff.lines[1].new_number, None);
    }

    #[test]
    fn one_side_empty_is_all_added_or_all_removed() {
        let added = compute_line_diff("", "a\nb");
        assert_eq!(added.stats.added, 2);
        assert_eq!(added.similarity, 0.0);

        let removed = compute_line_diff("a\nb", "");
        assert_eq!(removed.stats.removed, 2);
        assert_eq!(removed.similarity, 0.0);
    }
}
