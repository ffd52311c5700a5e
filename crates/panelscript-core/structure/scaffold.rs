//! Structure synthesis for scripts without markers
//!
//! When a writer has no explicit structure yet, the import flow needs
//! something to hang pages on: a default single act and scene, or suggested
//! act breaks derived from nothing but the page count.

use alloc::{vec, vec::Vec};

use super::ast::{DetectedAct, DetectedScene, DetectedStructure, StructureHint};

/// Pages at or below this count suggest a single act
const ONE_ACT_MAX_PAGES: u32 = 8;
/// Pages at or below this count suggest two acts
const TWO_ACT_MAX_PAGES: u32 = 16;

/// A suggested page range for one act
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActBreak {
    /// 1-based act number
    pub act_number: u32,
    /// First page of the act (inclusive)
    pub start_page: u32,
    /// Last page of the act (inclusive)
    pub end_page: u32,
}

/// Synthesize a default 1-act/1-scene structure holding all pages
///
/// Used when detection finds no markers at all; the result mirrors what
/// [`detect_structure`](super::detect_structure) produces for a marker-free
/// script with pages 1 through `total_pages`.
#[must_use]
pub fn default_structure(total_pages: u32) -> DetectedStructure<'static> {
    let pages: Vec<u32> = (1..=total_pages).collect();
    DetectedStructure {
        acts: vec![DetectedAct {
            number: 1,
            title: None,
            start_line: 1,
            end_line: None,
            implicit: true,
            scenes: vec![DetectedScene {
                number: 1,
                title: None,
                location: None,
                time_of_day: None,
                start_line: 1,
                end_line: None,
                implicit: true,
                pages,
            }],
        }],
        has_act_markers: false,
        has_scene_markers: false,
        total_pages,
        hint: StructureHint::Flat,
        issues: Vec::new(),
    }
}

/// Propose act page-ranges from the page count alone
///
/// Short scripts stay a single act; medium scripts split at the midpoint;
/// longer scripts get a three-act shape cut at the 25% and 75% marks. The
/// returned ranges cover `1..=page_count` with no gaps or overlaps. A page
/// count of zero yields no ranges.
///
/// # Example
///
/// ```rust
/// use panelscript_core::structure::suggest_act_breaks;
///
/// let breaks = suggest_act_breaks(24);
/// assert_eq!(breaks.len(), 3);
/// assert_eq!((breaks[0].start_page, breaks[0].end_page), (1, 6));
/// assert_eq!((breaks[1].start_page, breaks[1].end_page), (7, 18));
/// assert_eq!((breaks[2].start_page, breaks[2].end_page), (19, 24));
/// ```
#[must_use]
pub fn suggest_act_breaks(page_count: u32) -> Vec<ActBreak> {
    if page_count == 0 {
        return Vec::new();
    }
    if page_count <= ONE_ACT_MAX_PAGES {
        return vec![ActBreak {
            act_number: 1,
            start_page: 1,
            end_page: page_count,
        }];
    }
    if page_count <= TWO_ACT_MAX_PAGES {
        let midpoint = page_count / 2;
        return vec![
            ActBreak {
                act_number: 1,
                start_page: 1,
                end_page: midpoint,
            },
            ActBreak {
                act_number: 2,
                start_page: midpoint + 1,
                end_page: page_count,
            },
        ];
    }

    let first_cut = (page_count * 25 / 100).max(1);
    let second_cut = page_count * 75 / 100;
    vec![
        ActBreak {
            act_number: 1,
            start_page: 1,
            end_page: first_cut,
        },
        ActBreak {
            act_number: 2,
            start_page: first_cut + 1,
            end_page: second_cut,
        },
        ActBreak {
            act_number: 3,
            start_page: second_cut + 1,
            end_page: page_count,
        },
    ]
}
