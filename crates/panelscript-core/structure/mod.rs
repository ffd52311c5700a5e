//! Script structure detection
//!
//! Reconstructs a nested Act → Scene → Page tree from free-form script text
//! by classifying each line against an ordered marker pattern list and
//! folding the classifications through an explicit state machine.
//!
//! Detection never fails: a line matching no pattern is content, a page with
//! no open scene gets an implicit one, and numbering problems are collected
//! as [`DetectionIssue`]s instead of errors. Results are transient,
//! zero-copy views over the source text — callers map them onto their own
//! persistent records.
//!
//! # Example
//!
//! ```rust
//! use panelscript_core::structure::{detect_structure, StructureHint};
//!
//! let script = "ACT ONE\nSCENE: ROOFTOP\nPAGE 1\nPanel 1: wide shot.";
//! let detected = detect_structure(script);
//!
//! assert_eq!(detected.acts.len(), 1);
//! assert_eq!(detected.acts[0].scenes[0].display_name(), "ROOFTOP");
//! assert_eq!(detected.acts[0].scenes[0].pages, vec![1]);
//! assert_eq!(detected.hint, StructureHint::ActsAndScenes);
//! ```

use crate::utils::text::strip_bom;

pub mod ast;
pub mod patterns;
pub mod scaffold;

mod detector;

pub use ast::{
    DetectedAct, DetectedScene, DetectedStructure, DetectionIssue, IssueCategory, IssueSeverity,
    StructureHint,
};
pub use patterns::{classify_line, LineMarker};
pub use scaffold::{default_structure, suggest_act_breaks, ActBreak};

use detector::Detector;

/// Detect act/scene/page structure in raw script text
///
/// Performs a single left-to-right scan over the lines of `source`. Line
/// numbers in the result are 1-based. A UTF-8 BOM is ignored; CRLF line
/// endings are handled, lone-CR endings should be normalized first via
/// [`crate::utils::text::normalize_line_endings`].
///
/// Empty input yields an empty structure with [`StructureHint::Flat`].
#[must_use]
pub fn detect_structure(source: &str) -> DetectedStructure<'_> {
    let source = strip_bom(source);
    source
        .lines()
        .enumerate()
        .fold(Detector::new(), |detector, (idx, line)| {
            detector.step(idx + 1, line)
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_titled_acts_and_scenes() {
        let script = "ACT ONE\nSCENE: ROOFTOP\nPAGE 1\ncontent";
        let detected = detect_structure(script);

        assert_eq!(detected.acts.len(), 1);
        assert_eq!(detected.acts[0].number, 1);
        assert_eq!(detected.acts[0].display_name(), "Act 1");
        assert_eq!(detected.acts[0].scenes[0].title, Some("ROOFTOP"));
        assert_eq!(detected.acts[0].scenes[0].pages, vec![1]);
        assert_eq!(detected.total_pages, 1);
        assert_eq!(detected.hint, StructureHint::ActsAndScenes);
    }

    #[test]
    fn markerless_script_is_flat_with_one_implicit_act_and_scene() {
        let script = "PAGE 1\nPanel 1.\nPAGE 2\nPanel 1.\nPAGE 3";
        let detected = detect_structure(script);

        assert!(!detected.has_act_markers);
        assert!(!detected.has_scene_markers);
        assert_eq!(detected.hint, StructureHint::Flat);
        assert_eq!(detected.acts.len(), 1);
        assert_eq!(detected.scene_count(), 1);
        assert_eq!(detected.page_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn scene_markers_without_acts_suggest_scenes_only() {
        let script = "INT. WAREHOUSE - NIGHT\nPAGE 1\nEXT. ROOFTOP - DAY\nPAGE 2";
        let detected = detect_structure(script);

        assert_eq!(detected.hint, StructureHint::ScenesOnly);
        assert_eq!(detected.scene_count(), 2);
        assert!(detected.acts[0].implicit);
        assert_eq!(
            detected.acts[0].scenes[0].location,
            Some("WAREHOUSE")
        );
        assert_eq!(detected.acts[0].scenes[0].time_of_day, Some("NIGHT"));
    }

    #[test]
    fn act_markers_without_any_scene_suggest_acts_only() {
        let script = "ACT ONE\nsome prose\nACT TWO\nmore prose";
        let detected = detect_structure(script);

        assert_eq!(detected.hint, StructureHint::ActsOnly);
        assert_eq!(detected.acts.len(), 2);
        assert_eq!(detected.total_pages, 0);
    }

    #[test]
    fn empty_input_yields_empty_flat_structure() {
        let detected = detect_structure("");
        assert!(detected.acts.is_empty());
        assert_eq!(detected.total_pages, 0);
        assert_eq!(detected.hint, StructureHint::Flat);
        assert!(detected.issues.is_empty());
    }

    #[test]
    fn bom_and_crlf_input_scans_cleanly() {
        let script = "\u{FEFF}ACT ONE\r\nSCENE: BAR\r\nPAGE 1\r\n";
        let detected = detect_structure(script);
        assert_eq!(detected.acts.len(), 1);
        assert_eq!(detected.acts[0].scenes[0].title, Some("BAR"));
        assert_eq!(detected.total_pages, 1);
    }

    #[test]
    fn spelled_out_page_numbers_attach_in_order() {
        let script = "SCENE: CHASE\nPAGE ONE\nPAGE TWO\nPage Three";
        let detected = detect_structure(script);
        assert_eq!(detected.acts[0].scenes[0].pages, vec![1, 2, 3]);
    }
}
