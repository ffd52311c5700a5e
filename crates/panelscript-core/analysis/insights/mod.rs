//! Insight types and the rule trait
//!
//! Pacing feedback is produced by a set of rules, each scanning the computed
//! page metrics and emitting insights tagged warning, suggestion, or
//! strength. Rules are trait objects so an editor can register its own
//! alongside the built-in set.

use alloc::{string::String, vec::Vec};
use core::fmt;

use super::pacing::{PacingThresholds, PageMetrics};

pub mod rules;

pub use rules::BuiltinRules;

/// Kind of pacing insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsightKind {
    /// Something working well, worth keeping
    Strength,
    /// Optional improvement
    Suggestion,
    /// Should be addressed before lettering
    Warning,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Suggestion => write!(f, "suggestion"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Which aspect of pacing an insight concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsightCategory {
    /// Words per page
    WordDensity,
    /// Panels per page
    PanelDensity,
    /// Dialogue-panel ratio
    DialogueBalance,
    /// Silent-panel ratio
    SilentPanels,
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordDensity => write!(f, "word-density"),
            Self::PanelDensity => write!(f, "panel-density"),
            Self::DialogueBalance => write!(f, "dialogue-balance"),
            Self::SilentPanels => write!(f, "silent-panels"),
        }
    }
}

/// One piece of pacing feedback
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PacingInsight {
    /// Warning, suggestion, or strength
    pub kind: InsightKind,
    /// Aspect of pacing concerned
    pub category: InsightCategory,
    /// Rule that produced this insight
    pub rule_id: &'static str,
    /// Human-readable message
    pub message: String,
    /// Offending (or exemplary) page numbers, in document order
    pub pages: Vec<u32>,
}

impl PacingInsight {
    /// Create a new insight
    #[must_use]
    pub const fn new(
        kind: InsightKind,
        category: InsightCategory,
        rule_id: &'static str,
        message: String,
        pages: Vec<u32>,
    ) -> Self {
        Self {
            kind,
            category,
            rule_id,
            message,
            pages,
        }
    }
}

/// A pacing rule that inspects page metrics and emits insights
pub trait InsightRule {
    /// Unique rule identifier
    fn id(&self) -> &'static str;

    /// Human-readable rule name
    fn name(&self) -> &'static str;

    /// What the rule looks for
    fn description(&self) -> &'static str;

    /// Aspect of pacing this rule covers
    fn category(&self) -> InsightCategory;

    /// Inspect all pages and emit insights
    fn check(&self, pages: &[PageMetrics], thresholds: &PacingThresholds) -> Vec<PacingInsight>;
}
