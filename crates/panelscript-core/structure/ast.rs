//! Outline tree produced by the structure detector
//!
//! All nodes are transient, derived-only values built during one scan over
//! script text. Callers map them onto their own persistent act/scene/page
//! records; nothing here is cached or kept alive between scans.
//!
//! Titles and metadata are zero-copy `&'a str` spans referencing the scanned
//! source text.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

/// A detected act and its scenes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectedAct<'a> {
    /// Act number as written (or 1 for the implicit act)
    pub number: u32,

    /// Title text following the act marker, if any
    pub title: Option<&'a str>,

    /// 1-based line of the act marker (or of the first attached content)
    pub start_line: usize,

    /// 1-based last line of the act; set when the next marker closes it
    pub end_line: Option<usize>,

    /// Whether the act was synthesized rather than explicitly marked
    pub implicit: bool,

    /// Scenes in document order
    pub scenes: Vec<DetectedScene<'a>>,
}

impl DetectedAct<'_> {
    /// Display name for UI lists: the title if present, else `Act N`
    #[must_use]
    pub fn display_name(&self) -> String {
        self.title
            .map_or_else(|| format!("Act {}", self.number), String::from)
    }

    /// All page numbers attached beneath this act, in document order
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.pages.iter().copied())
            .collect()
    }
}

/// A detected scene with optional heading metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectedScene<'a> {
    /// Scene number as written, or its 1-based position within the act
    pub number: u32,

    /// Title text from an explicit `SCENE:` heading, if any
    pub title: Option<&'a str>,

    /// Location extracted from a screenplay-style heading
    pub location: Option<&'a str>,

    /// Time-of-day word extracted from the heading (`DAY`, `NIGHT`, ...)
    pub time_of_day: Option<&'a str>,

    /// 1-based line of the scene marker (or of the first attached page)
    pub start_line: usize,

    /// 1-based last line of the scene; set when the next marker closes it
    pub end_line: Option<usize>,

    /// Whether the scene was synthesized rather than explicitly marked
    pub implicit: bool,

    /// Page numbers attached to this scene, in document order
    pub pages: Vec<u32>,
}

impl DetectedScene<'_> {
    /// Display name for UI lists: title, else location, else `Scene N`
    #[must_use]
    pub fn display_name(&self) -> String {
        self.title
            .or(self.location)
            .map_or_else(|| format!("Scene {}", self.number), String::from)
    }
}

/// Structure shape suggested by the markers a script actually uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureHint {
    /// Explicit act markers and scenes both present
    ActsAndScenes,
    /// Explicit act markers only
    ActsOnly,
    /// Explicit scene markers only
    ScenesOnly,
    /// No structural markers at all
    Flat,
}

impl fmt::Display for StructureHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActsAndScenes => write!(f, "acts-and-scenes"),
            Self::ActsOnly => write!(f, "acts-only"),
            Self::ScenesOnly => write!(f, "scenes-only"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Severity of a detection issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueSeverity {
    /// Informational, no action required
    Info,
    /// Something a writer probably wants to look at
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Category of a detection issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueCategory {
    /// Act/scene nesting problems
    Structure,
    /// Page numbering problems
    Numbering,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Numbering => write!(f, "numbering"),
        }
    }
}

/// A recoverable problem noticed while scanning
///
/// Detection never fails on malformed input; problems worth surfacing to the
/// writer are collected here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionIssue {
    /// Severity level
    pub severity: IssueSeverity,
    /// Category of issue
    pub category: IssueCategory,
    /// Human-readable message
    pub message: String,
    /// 1-based line the issue was noticed on
    pub line: usize,
}

impl DetectionIssue {
    /// Create a new detection issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
        }
    }
}

/// Result of one structure detection pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectedStructure<'a> {
    /// Acts in document order (always at least one when any page was found)
    pub acts: Vec<DetectedAct<'a>>,

    /// Whether any explicit act marker was seen
    pub has_act_markers: bool,

    /// Whether any explicit scene marker was seen
    pub has_scene_markers: bool,

    /// Number of distinct page numbers detected
    pub total_pages: u32,

    /// Suggested structure shape, derived from the marker flags
    pub hint: StructureHint,

    /// Recoverable problems noticed while scanning
    pub issues: Vec<DetectionIssue>,
}

impl DetectedStructure<'_> {
    /// Total number of scenes across all acts
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.acts.iter().map(|act| act.scenes.len()).sum()
    }

    /// All detected page numbers in document order
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        self.acts
            .iter()
            .flat_map(DetectedAct::page_numbers)
            .collect()
    }
}
