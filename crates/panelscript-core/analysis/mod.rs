//! Pacing analysis for comic scripts
//!
//! Scores an ordered list of pages against a fixed threshold table and runs
//! a set of insight rules over the results. Analysis is pure and synchronous;
//! results are computed once per invocation and carry no references to
//! shared state.
//!
//! # Example
//!
//! ```rust
//! use panelscript_core::analysis::{PacingAnalysis, PageStats};
//!
//! let pages = vec![PageStats {
//!     page_number: 1,
//!     word_count: 60,
//!     panel_count: 5,
//!     dialogue_panel_count: 3,
//!     silent_panel_count: 1,
//! }];
//!
//! let analysis = PacingAnalysis::analyze(&pages);
//! assert_eq!(analysis.score(), 100);
//! assert!(!analysis.has_warnings());
//! ```

use alloc::vec::Vec;

pub mod insights;
pub mod pacing;

pub use insights::{
    BuiltinRules, InsightCategory, InsightKind, InsightRule, PacingInsight,
};
pub use pacing::{
    rate_dialogue_length, LengthRating, PacingConfig, PacingThresholds, PageMetrics, PageStats,
    DIALOGUE_ERROR_WORDS, DIALOGUE_WARNING_WORDS,
};

use pacing::{all_page_metrics, overall_score};

/// Complete pacing analysis of one ordered page list
#[derive(Debug)]
pub struct PacingAnalysis {
    /// Computed per-page metrics, in input order
    pages: Vec<PageMetrics>,

    /// Insights emitted by the rule set
    insights: Vec<PacingInsight>,

    /// Configuration the analysis ran with
    config: PacingConfig,

    /// Overall 0-100 score
    score: u8,
}

impl PacingAnalysis {
    /// Analyze pages with the default configuration
    ///
    /// An empty page list produces a neutral result: score 100, no insights.
    #[must_use]
    pub fn analyze(pages: &[PageStats]) -> Self {
        Self::analyze_with_config(pages, PacingConfig::default())
    }

    /// Analyze pages with a custom configuration
    #[must_use]
    pub fn analyze_with_config(pages: &[PageStats], config: PacingConfig) -> Self {
        let metrics = all_page_metrics(pages, &config.thresholds);
        let score = overall_score(&metrics);

        let mut insights = Vec::new();
        for rule in BuiltinRules::all_rules() {
            insights.extend(rule.check(&metrics, &config.thresholds));
            if config.max_insights > 0 && insights.len() >= config.max_insights {
                insights.truncate(config.max_insights);
                break;
            }
        }

        Self {
            pages: metrics,
            insights,
            config,
            score,
        }
    }

    /// Overall 0-100 score; higher is better paced
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Computed metrics for every page, in input order
    #[must_use]
    pub fn page_metrics(&self) -> &[PageMetrics] {
        &self.pages
    }

    /// All insights emitted by the rule set
    #[must_use]
    pub fn insights(&self) -> &[PacingInsight] {
        &self.insights
    }

    /// Configuration the analysis ran with
    #[must_use]
    pub const fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Insights of one kind, in reporting order
    pub fn insights_of_kind(&self, kind: InsightKind) -> impl Iterator<Item = &PacingInsight> {
        self.insights
            .iter()
            .filter(move |insight| insight.kind == kind)
    }

    /// Whether any warning-level insight was emitted
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.insights
            .iter()
            .any(|insight| insight.kind == InsightKind::Warning)
    }

    /// Condensed counts for dashboard display
    #[must_use]
    pub fn summary(&self) -> PacingSummary {
        PacingSummary {
            total_pages: self.pages.len(),
            score: self.score,
            warnings: self.insights_of_kind(InsightKind::Warning).count(),
            suggestions: self.insights_of_kind(InsightKind::Suggestion).count(),
            strengths: self.insights_of_kind(InsightKind::Strength).count(),
        }
    }
}

/// Condensed pacing result for dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingSummary {
    /// Number of pages analyzed
    pub total_pages: usize,
    /// Overall 0-100 score
    pub score: u8,
    /// Warning insight count
    pub warnings: usize,
    /// Suggestion insight count
    pub suggestions: usize,
    /// Strength insight count
    pub strengths: usize,
}

impl PacingSummary {
    /// Whether the script needs pacing attention before lettering
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        self.warnings > 0 || self.score < 60
    }
}
