//! Line-by-line detection state machine
//!
//! The detector is an explicit state value threaded through a fold over the
//! script's lines: each line is classified by [`classify_line`] and applied
//! as a transition. Nothing is closure-captured, so any prefix of a scan is
//! itself a valid detector state and can be asserted on in tests.

use alloc::{format, vec::Vec};

use super::ast::{
    DetectedAct, DetectedScene, DetectedStructure, DetectionIssue, IssueCategory, IssueSeverity,
    StructureHint,
};
use super::patterns::{classify_line, LineMarker};

/// Accumulated detection state for one scan
#[derive(Debug, Clone)]
pub(super) struct Detector<'a> {
    /// Acts in document order; the last one is the open cursor
    acts: Vec<DetectedAct<'a>>,
    /// Whether any explicit act marker was seen
    has_act_markers: bool,
    /// Whether any explicit scene marker was seen
    has_scene_markers: bool,
    /// Problems noticed while scanning
    issues: Vec<DetectionIssue>,
    /// Every page number seen, in document order
    seen_pages: Vec<u32>,
    /// Highest line number observed so far
    last_line: usize,
}

impl<'a> Detector<'a> {
    /// Fresh state with nothing open
    pub(super) const fn new() -> Self {
        Self {
            acts: Vec::new(),
            has_act_markers: false,
            has_scene_markers: false,
            issues: Vec::new(),
            seen_pages: Vec::new(),
            last_line: 0,
        }
    }

    /// Apply one line (1-based) as a state transition
    pub(super) fn step(mut self, line_no: usize, line: &'a str) -> Self {
        self.last_line = line_no;
        match classify_line(line) {
            LineMarker::Act { number, title } => {
                self.has_act_markers = true;
                self.open_act(line_no, number, title, false);
            }
            LineMarker::Scene {
                number,
                title,
                location,
                time_of_day,
            } => {
                self.has_scene_markers = true;
                self.open_scene(line_no, number, title, location, time_of_day, false);
            }
            LineMarker::Page { number } => self.attach_page(line_no, number),
            LineMarker::Content => {}
        }
        self
    }

    /// Close everything still open and derive the final result
    pub(super) fn finish(mut self) -> DetectedStructure<'a> {
        let end = self.last_line;
        self.close_scene(end);
        self.close_act(end);

        for act in &self.acts {
            if act.scenes.is_empty() {
                self.issues.push(DetectionIssue::new(
                    IssueSeverity::Info,
                    IssueCategory::Structure,
                    format!("Act {} contains no scenes or pages", act.number),
                    act.start_line,
                ));
            }
        }

        let mut distinct = self.seen_pages.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let any_scene = self.acts.iter().any(|act| !act.scenes.is_empty());
        let hint = if self.has_act_markers && any_scene {
            StructureHint::ActsAndScenes
        } else if self.has_act_markers {
            StructureHint::ActsOnly
        } else if self.has_scene_markers {
            StructureHint::ScenesOnly
        } else {
            StructureHint::Flat
        };

        DetectedStructure {
            acts: self.acts,
            has_act_markers: self.has_act_markers,
            has_scene_markers: self.has_scene_markers,
            total_pages: distinct.len() as u32,
            hint,
            issues: self.issues,
        }
    }

    /// Open a new act, closing the previous act and its open scene
    fn open_act(&mut self, line_no: usize, number: u32, title: Option<&'a str>, implicit: bool) {
        self.close_scene(line_no.saturating_sub(1));
        self.close_act(line_no.saturating_sub(1));
        self.acts.push(DetectedAct {
            number,
            title,
            start_line: line_no,
            end_line: None,
            implicit,
            scenes: Vec::new(),
        });
    }

    /// Open a new scene under the current act, creating an implicit act first
    /// when none is open
    fn open_scene(
        &mut self,
        line_no: usize,
        number: Option<u32>,
        title: Option<&'a str>,
        location: Option<&'a str>,
        time_of_day: Option<&'a str>,
        implicit: bool,
    ) {
        if self.acts.is_empty() {
            self.open_act(line_no, 1, None, true);
        }
        self.close_scene(line_no.saturating_sub(1));

        let Some(act) = self.acts.last_mut() else {
            return;
        };
        let number = number.unwrap_or(act.scenes.len() as u32 + 1);
        act.scenes.push(DetectedScene {
            number,
            title,
            location,
            time_of_day,
            start_line: line_no,
            end_line: None,
            implicit,
            pages: Vec::new(),
        });
    }

    /// Attach a page number to the open scene, synthesizing structure when
    /// nothing is open yet
    fn attach_page(&mut self, line_no: usize, number: u32) {
        if self.seen_pages.contains(&number) {
            self.issues.push(DetectionIssue::new(
                IssueSeverity::Warning,
                IssueCategory::Numbering,
                format!("Page {number} appears more than once"),
                line_no,
            ));
        } else if self.seen_pages.last().is_some_and(|&last| number < last) {
            self.issues.push(DetectionIssue::new(
                IssueSeverity::Info,
                IssueCategory::Numbering,
                format!("Page {number} is out of order"),
                line_no,
            ));
        }
        self.seen_pages.push(number);

        if self.acts.is_empty() {
            self.open_act(line_no, 1, None, true);
        }
        let needs_scene = self
            .acts
            .last()
            .is_some_and(|act| act.scenes.is_empty());
        if needs_scene {
            self.open_scene(line_no, None, None, None, None, true);
        }

        if let Some(scene) = self.acts.last_mut().and_then(|act| act.scenes.last_mut()) {
            scene.pages.push(number);
        }
    }

    /// Close the open scene, if any, at the given end line
    fn close_scene(&mut self, end: usize) {
        if let Some(scene) = self.acts.last_mut().and_then(|act| act.scenes.last_mut()) {
            if scene.end_line.is_none() {
                scene.end_line = Some(end);
            }
        }
    }

    /// Close the open act, if any, at the given end line
    fn close_act(&mut self, end: usize) {
        if let Some(act) = self.acts.last_mut() {
            if act.end_line.is_none() {
                act.end_line = Some(end);
            }
        }
    }
}
