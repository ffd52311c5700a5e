//! Positional page and panel comparison
//!
//! Pages and panels are compared by index, not by identity or content
//! matching: page *i* of the old version is compared against page *i* of the
//! new version regardless of what either contains. This is intentionally
//! preserved behavior — inserting a page in the middle shifts every
//! subsequent page's status to modified even when its content is identical.
//! Review UIs depend on this exact output, so it is covered by tests rather
//! than corrected.

use alloc::vec::Vec;

use super::line::compute_line_diff;
use super::{ChangeStatus, PageDiff, PageVersion, PanelDiff};

/// Compare two versions of an issue's pages, index by index
///
/// A page present on only one side is new/removed; otherwise its panels are
/// compared the same way, and the page is modified iff any panel differs.
///
/// # Example
///
/// ```rust
/// use panelscript_core::diff::{compare_pages, ChangeStatus, PageVersion, PanelVersion};
///
/// let page = PageVersion {
///     page_number: 1,
///     panels: vec![PanelVersion {
///         visual_description: "Wide shot of the rooftop.".to_string(),
///     }],
/// };
/// let diffs = compare_pages(&[page.clone()], &[page]);
/// assert_eq!(diffs[0].status, ChangeStatus::Unchanged);
/// ```
#[must_use]
pub fn compare_pages(old: &[PageVersion], new: &[PageVersion]) -> Vec<PageDiff> {
    let count = old.len().max(new.len());
    let mut diffs = Vec::with_capacity(count);

    for index in 0..count {
        let diff = match (old.get(index), new.get(index)) {
            (Some(old_page), Some(new_page)) => {
                let panels = compare_panels(old_page, new_page);
                let status = if panels
                    .iter()
                    .any(|panel| panel.status != ChangeStatus::Unchanged)
                {
                    ChangeStatus::Modified
                } else {
                    ChangeStatus::Unchanged
                };
                PageDiff {
                    page_number: new_page.page_number,
                    status,
                    panels,
                }
            }
            (None, Some(new_page)) => PageDiff {
                page_number: new_page.page_number,
                status: ChangeStatus::New,
                panels: added_panels(new_page),
            },
            (Some(old_page), None) => PageDiff {
                page_number: old_page.page_number,
                status: ChangeStatus::Removed,
                panels: removed_panels(old_page),
            },
            (None, None) => continue,
        };
        diffs.push(diff);
    }

    diffs
}

/// Compare panels of two co-indexed pages
///
/// Panel equality is decided solely by the visual description text; dialogue
/// and caption content is not diffed at this level. A changed panel carries
/// a nested line diff of its descriptions.
fn compare_panels(old_page: &PageVersion, new_page: &PageVersion) -> Vec<PanelDiff> {
    let count = old_page.panels.len().max(new_page.panels.len());
    let mut diffs = Vec::with_capacity(count);

    for index in 0..count {
        let diff = match (old_page.panels.get(index), new_page.panels.get(index)) {
            (Some(old_panel), Some(new_panel)) => {
                if old_panel.visual_description == new_panel.visual_description {
                    PanelDiff {
                        panel_index: index,
                        status: ChangeStatus::Unchanged,
                        old_description: Some(old_panel.visual_description.clone()),
                        new_description: Some(new_panel.visual_description.clone()),
                        visual_diff: None,
                    }
                } else {
                    PanelDiff {
                        panel_index: index,
                        status: ChangeStatus::Modified,
                        old_description: Some(old_panel.visual_description.clone()),
                        new_description: Some(new_panel.visual_description.clone()),
                        visual_diff: Some(compute_line_diff(
                            &old_panel.visual_description,
                            &new_panel.visual_description,
                        )),
                    }
                }
            }
            (None, Some(new_panel)) => PanelDiff {
                panel_index: index,
                status: ChangeStatus::New,
                old_description: None,
                new_description: Some(new_panel.visual_description.clone()),
                visual_diff: None,
            },
            (Some(old_panel), None) => PanelDiff {
                panel_index: index,
                status: ChangeStatus::Removed,
                old_description: Some(old_panel.visual_description.clone()),
                new_description: None,
                visual_diff: None,
            },
            (None, None) => continue,
        };
        diffs.push(diff);
    }

    diffs
}

/// Panel diffs for a page that only exists on the new side
fn added_panels(page: &PageVersion) -> Vec<PanelDiff> {
    page.panels
        .iter()
        .enumerate()
        .map(|(index, panel)| PanelDiff {
            panel_index: index,
            status: ChangeStatus::New,
            old_description: None,
            new_description: Some(panel.visual_description.clone()),
            visual_diff: None,
        })
        .collect()
}

/// Panel diffs for a page that only exists on the old side
fn removed_panels(page: &PageVersion) -> Vec<PanelDiff> {
    page.panels
        .iter()
        .enumerate()
        .map(|(index, panel)| PanelDiff {
            panel_index: index,
            status: ChangeStatus::Removed,
            old_description: Some(panel.visual_description.clone()),
            new_description: None,
            visual_diff: None,
        })
        .collect()
}
