//! Version comparison for script content
//!
//! Two layers of comparison, both pure and allocation-bounded:
//!
//! - **Line diff**: LCS-anchored comparison of two text versions with fuzzy
//!   "this line was probably edited" detection via Dice bigram similarity
//! - **Structural diff**: positional page/panel comparison for a review UI
//!   that accepts or rejects changes per page or per line
//!
//! Everything is created fresh per comparison and discarded after rendering;
//! there is no caching layer and no shared state.
//!
//! # Cost
//!
//! The LCS table is O(n·m) in both time and space over line counts. Diff per
//! page rather than whole-issue when documents grow large.

use alloc::{string::String, vec::Vec};
use core::fmt;

mod lcs;
mod line;
mod pages;
mod similarity;

pub use line::compute_line_diff;
pub use pages::compare_pages;
pub use similarity::bigram_similarity;

/// Classification of one diff row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiffLineKind {
    /// Present on both sides, byte-identical
    Unchanged,
    /// Present only on the new side
    Added,
    /// Present only on the old side
    Removed,
    /// Probably the same line, edited
    Modified,
}

impl fmt::Display for DiffLineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
            Self::Modified => write!(f, "modified"),
        }
    }
}

/// One row of a line-level comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffLine {
    /// Row classification
    pub kind: DiffLineKind,
    /// 1-based line number on the old side, if present there
    pub old_number: Option<usize>,
    /// 1-based line number on the new side, if present there
    pub new_number: Option<usize>,
    /// Line text; for modified rows, the new text
    pub content: String,
    /// Old text of a modified row
    pub old_content: Option<String>,
}

/// Per-kind row counts for one diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffStats {
    /// Rows present only on the new side
    pub added: usize,
    /// Rows present only on the old side
    pub removed: usize,
    /// Rows classified as edits
    pub modified: usize,
    /// Rows identical on both sides
    pub unchanged: usize,
}

/// Result of one line-level comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDiff {
    /// Diff rows in display order
    pub lines: Vec<DiffLine>,
    /// Row counts by kind
    pub stats: DiffStats,
    /// `unchanged / total * 100`; an empty diff is 100.0
    pub similarity: f32,
}

/// Change status of a structural element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeStatus {
    /// No child differs
    Unchanged,
    /// At least one child differs
    Modified,
    /// Present only in the new version
    New,
    /// Present only in the old version
    Removed,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Modified => write!(f, "modified"),
            Self::New => write!(f, "new"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// One panel of one page version, as drawn from persisted issue content
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelVersion {
    /// The panel's visual description text
    pub visual_description: String,
}

/// One page of one version of an issue
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageVersion {
    /// Page number as persisted
    pub page_number: u32,
    /// Panels in reading order
    pub panels: Vec<PanelVersion>,
}

/// Comparison result for one panel position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelDiff {
    /// 0-based panel position on the page
    pub panel_index: usize,
    /// Change status for this position
    pub status: ChangeStatus,
    /// Old visual description, if the panel existed on the old side
    pub old_description: Option<String>,
    /// New visual description, if the panel exists on the new side
    pub new_description: Option<String>,
    /// Line diff of the descriptions, present when status is modified
    pub visual_diff: Option<LineDiff>,
}

/// Comparison result for one page position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDiff {
    /// Page number of the surviving side (new when both exist)
    pub page_number: u32,
    /// Change status derived from the child panels
    pub status: ChangeStatus,
    /// Panel comparisons in position order
    pub panels: Vec<PanelDiff>,
}

impl PageDiff {
    /// Whether any panel on this page changed
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.status != ChangeStatus::Unchanged
    }
}
