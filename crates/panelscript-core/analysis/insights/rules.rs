//! Built-in pacing rules
//!
//! Each rule covers one aspect of the threshold table: word density, panel
//! density, dialogue balance, silent beats, and the degenerate empty page.
//! Rules see every page's metrics at once so they can praise a consistent
//! script as well as flag outliers.

use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use super::{InsightCategory, InsightKind, InsightRule, PacingInsight};
use crate::analysis::pacing::{PacingThresholds, PageMetrics};

/// Registry of all built-in pacing rules
pub struct BuiltinRules;

impl BuiltinRules {
    /// All built-in rules, in reporting order
    #[must_use]
    pub fn all_rules() -> Vec<Box<dyn InsightRule>> {
        vec![
            Box::new(EmptyPageRule),
            Box::new(WordDensityRule),
            Box::new(PanelDensityRule),
            Box::new(DialogueBalanceRule),
            Box::new(SilentPanelRule),
        ]
    }
}

/// Format a page list for a message: `page 3` or `pages 3, 7, 9`
fn page_list(pages: &[u32]) -> String {
    let mut list = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            list.push_str(", ");
        }
        list.push_str(&page.to_string());
    }
    if pages.len() == 1 {
        format!("page {list}")
    } else {
        format!("pages {list}")
    }
}

/// Flags pages with no panels at all
pub struct EmptyPageRule;

impl InsightRule for EmptyPageRule {
    fn id(&self) -> &'static str {
        "empty-page"
    }

    fn name(&self) -> &'static str {
        "Empty Page"
    }

    fn description(&self) -> &'static str {
        "Flags pages that have no panels yet"
    }

    fn category(&self) -> InsightCategory {
        InsightCategory::PanelDensity
    }

    fn check(&self, pages: &[PageMetrics], _thresholds: &PacingThresholds) -> Vec<PacingInsight> {
        let empty: Vec<u32> = pages
            .iter()
            .filter(|page| page.panel_count == 0)
            .map(|page| page.page_number)
            .collect();
        if empty.is_empty() {
            return Vec::new();
        }
        vec![PacingInsight::new(
            InsightKind::Warning,
            self.category(),
            self.id(),
            format!("{} have no panels yet", page_list(&empty)),
            empty,
        )]
    }
}

/// Flags word-count outliers and praises consistent density
pub struct WordDensityRule;

impl InsightRule for WordDensityRule {
    fn id(&self) -> &'static str {
        "word-density"
    }

    fn name(&self) -> &'static str {
        "Word Density"
    }

    fn description(&self) -> &'static str {
        "Compares words per page against the comfortable reading range"
    }

    fn category(&self) -> InsightCategory {
        InsightCategory::WordDensity
    }

    fn check(&self, pages: &[PageMetrics], thresholds: &PacingThresholds) -> Vec<PacingInsight> {
        let mut insights = Vec::new();

        let heavy: Vec<u32> = pages
            .iter()
            .filter(|page| page.word_count > thresholds.max_words_per_page)
            .map(|page| page.page_number)
            .collect();
        if !heavy.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Warning,
                self.category(),
                self.id(),
                format!(
                    "{} exceed {} words and will read slowly",
                    page_list(&heavy),
                    thresholds.max_words_per_page
                ),
                heavy,
            ));
        }

        let light: Vec<u32> = pages
            .iter()
            .filter(|page| {
                page.panel_count > 0 && page.word_count < thresholds.min_words_per_page
            })
            .map(|page| page.page_number)
            .collect();
        if !light.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                format!(
                    "{} sit under {} words; consider whether the art carries them",
                    page_list(&light),
                    thresholds.min_words_per_page
                ),
                light,
            ));
        }

        let all_ideal = !pages.is_empty()
            && pages.iter().all(|page| {
                page.word_count >= thresholds.min_words_per_page
                    && page.word_count <= thresholds.max_words_per_page
            });
        if all_ideal {
            insights.push(PacingInsight::new(
                InsightKind::Strength,
                self.category(),
                self.id(),
                String::from("Word density stays in the comfortable range throughout"),
                pages.iter().map(|page| page.page_number).collect(),
            ));
        }

        insights
    }
}

/// Flags crowded and sparse pages and praises consistent layouts
pub struct PanelDensityRule;

impl InsightRule for PanelDensityRule {
    fn id(&self) -> &'static str {
        "panel-density"
    }

    fn name(&self) -> &'static str {
        "Panel Density"
    }

    fn description(&self) -> &'static str {
        "Compares panels per page against the ideal grid range"
    }

    fn category(&self) -> InsightCategory {
        InsightCategory::PanelDensity
    }

    fn check(&self, pages: &[PageMetrics], thresholds: &PacingThresholds) -> Vec<PacingInsight> {
        let mut insights = Vec::new();

        let crowded: Vec<u32> = pages
            .iter()
            .filter(|page| page.panel_count > thresholds.max_panels_per_page)
            .map(|page| page.page_number)
            .collect();
        if !crowded.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Warning,
                self.category(),
                self.id(),
                format!(
                    "{} are over {} panels; the art will fight for space",
                    page_list(&crowded),
                    thresholds.max_panels_per_page
                ),
                crowded,
            ));
        }

        let sparse: Vec<u32> = pages
            .iter()
            .filter(|page| {
                page.panel_count > 0 && page.panel_count < thresholds.min_panels_per_page
            })
            .map(|page| page.page_number)
            .collect();
        if !sparse.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                format!(
                    "{} have fewer than {} panels; intentional splash pages are fine",
                    page_list(&sparse),
                    thresholds.min_panels_per_page
                ),
                sparse,
            ));
        }

        let all_ideal = !pages.is_empty()
            && pages.iter().all(|page| {
                page.panel_count >= thresholds.min_panels_per_page
                    && page.panel_count <= thresholds.max_panels_per_page
            });
        if all_ideal {
            insights.push(PacingInsight::new(
                InsightKind::Strength,
                self.category(),
                self.id(),
                String::from("Panel counts hold a steady, readable grid"),
                pages.iter().map(|page| page.page_number).collect(),
            ));
        }

        insights
    }
}

/// Flags dialogue-heavy and dialogue-starved stretches
pub struct DialogueBalanceRule;

impl InsightRule for DialogueBalanceRule {
    fn id(&self) -> &'static str {
        "dialogue-balance"
    }

    fn name(&self) -> &'static str {
        "Dialogue Balance"
    }

    fn description(&self) -> &'static str {
        "Compares the dialogue-panel ratio against the ideal band"
    }

    fn category(&self) -> InsightCategory {
        InsightCategory::DialogueBalance
    }

    fn check(&self, pages: &[PageMetrics], thresholds: &PacingThresholds) -> Vec<PacingInsight> {
        let mut insights = Vec::new();

        let talky: Vec<u32> = pages
            .iter()
            .filter(|page| {
                page.dialogue_ratio
                    .is_some_and(|ratio| ratio > thresholds.max_dialogue_ratio)
            })
            .map(|page| page.page_number)
            .collect();
        if !talky.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                format!(
                    "{} lean heavily on dialogue; let the art breathe",
                    page_list(&talky)
                ),
                talky,
            ));
        }

        let quiet: Vec<u32> = pages
            .iter()
            .filter(|page| {
                page.dialogue_ratio
                    .is_some_and(|ratio| ratio < thresholds.min_dialogue_ratio)
            })
            .map(|page| page.page_number)
            .collect();
        if !quiet.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                format!(
                    "{} carry little dialogue; check the reader still has an anchor",
                    page_list(&quiet)
                ),
                quiet,
            ));
        }

        let all_ideal = !pages.is_empty()
            && pages.iter().all(|page| {
                page.dialogue_ratio.is_some_and(|ratio| {
                    ratio >= thresholds.min_dialogue_ratio
                        && ratio <= thresholds.max_dialogue_ratio
                })
            });
        if all_ideal {
            insights.push(PacingInsight::new(
                InsightKind::Strength,
                self.category(),
                self.id(),
                String::from("Dialogue and art share the page in good balance"),
                pages.iter().map(|page| page.page_number).collect(),
            ));
        }

        insights
    }
}

/// Flags silent-beat overuse and total absence
pub struct SilentPanelRule;

impl InsightRule for SilentPanelRule {
    fn id(&self) -> &'static str {
        "silent-panels"
    }

    fn name(&self) -> &'static str {
        "Silent Panels"
    }

    fn description(&self) -> &'static str {
        "Compares the silent-panel ratio against the ideal band"
    }

    fn category(&self) -> InsightCategory {
        InsightCategory::SilentPanels
    }

    fn check(&self, pages: &[PageMetrics], thresholds: &PacingThresholds) -> Vec<PacingInsight> {
        let mut insights = Vec::new();

        let muted: Vec<u32> = pages
            .iter()
            .filter(|page| {
                page.silent_ratio
                    .is_some_and(|ratio| ratio > thresholds.max_silent_ratio)
            })
            .map(|page| page.page_number)
            .collect();
        if !muted.is_empty() {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                format!(
                    "{} run many silent panels in a row; confirm the beat lands",
                    page_list(&muted)
                ),
                muted,
            ));
        }

        let has_panels = pages.iter().any(|page| page.panel_count > 0);
        let none_silent = has_panels
            && pages
                .iter()
                .all(|page| page.silent_ratio.map_or(true, |ratio| ratio == 0.0));
        if none_silent {
            insights.push(PacingInsight::new(
                InsightKind::Suggestion,
                self.category(),
                self.id(),
                String::from("No silent panels anywhere; a wordless beat can reset the rhythm"),
                Vec::new(),
            ));
        }

        let all_ideal = !pages.is_empty()
            && pages.iter().all(|page| {
                page.silent_ratio.is_some_and(|ratio| {
                    ratio >= thresholds.min_silent_ratio && ratio <= thresholds.max_silent_ratio
                })
            });
        if all_ideal {
            insights.push(PacingInsight::new(
                InsightKind::Strength,
                self.category(),
                self.id(),
                String::from("Silent beats are spent where they count"),
                pages.iter().map(|page| page.page_number).collect(),
            ));
        }

        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pacing::{all_page_metrics, PageStats};

    fn metrics_for(stats: &[PageStats]) -> Vec<PageMetrics> {
        all_page_metrics(stats, &PacingThresholds::default())
    }

    fn ideal(page_number: u32) -> PageStats {
        PageStats {
            page_number,
            word_count: 60,
            panel_count: 5,
            dialogue_panel_count: 3,
            silent_panel_count: 1,
        }
    }

    #[test]
    fn empty_page_rule_warns_never_praises() {
        let pages = metrics_for(&[PageStats {
            page_number: 4,
            word_count: 0,
            panel_count: 0,
            dialogue_panel_count: 0,
            silent_panel_count: 0,
        }]);
        let insights = EmptyPageRule.check(&pages, &PacingThresholds::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].pages, vec![4]);
    }

    #[test]
    fn word_density_rule_names_offending_pages() {
        let mut heavy = ideal(2);
        heavy.word_count = 150;
        let pages = metrics_for(&[ideal(1), heavy]);
        let insights = WordDensityRule.check(&pages, &PacingThresholds::default());
        let warning = insights
            .iter()
            .find(|insight| insight.kind == InsightKind::Warning)
            .expect("overloaded page should warn");
        assert_eq!(warning.pages, vec![2]);
        assert!(warning.message.contains("page 2"));
    }

    #[test]
    fn consistent_script_earns_strengths() {
        let pages = metrics_for(&[ideal(1), ideal(2), ideal(3)]);
        let thresholds = PacingThresholds::default();
        assert!(WordDensityRule
            .check(&pages, &thresholds)
            .iter()
            .any(|insight| insight.kind == InsightKind::Strength));
        assert!(PanelDensityRule
            .check(&pages, &thresholds)
            .iter()
            .any(|insight| insight.kind == InsightKind::Strength));
    }

    #[test]
    fn silent_rule_nudges_scripts_with_no_silent_beats() {
        let mut stats = ideal(1);
        stats.silent_panel_count = 0;
        let pages = metrics_for(&[stats]);
        let insights = SilentPanelRule.check(&pages, &PacingThresholds::default());
        assert!(insights
            .iter()
            .any(|insight| insight.kind == InsightKind::Suggestion));
    }

    #[test]
    fn page_list_grammar() {
        assert_eq!(page_list(&[3]), "page 3");
        assert_eq!(page_list(&[3, 7, 9]), "pages 3, 7, 9");
    }
}
