//! Integration tests for pacing analysis over whole-issue page lists.

use panelscript_core::analysis::{
    rate_dialogue_length, InsightKind, LengthRating, PacingAnalysis, PacingConfig, PageStats,
};
use panelscript_core::utils::generate_page_stats;

fn stats(page_number: u32, words: u32, panels: u32, dialogue: u32, silent: u32) -> PageStats {
    PageStats {
        page_number,
        word_count: words,
        panel_count: panels,
        dialogue_panel_count: dialogue,
        silent_panel_count: silent,
    }
}

#[test]
fn zero_panel_zero_word_page_warns_and_does_not_panic() {
    let analysis = PacingAnalysis::analyze(&[stats(7, 0, 0, 0, 0)]);

    let warning = analysis
        .insights_of_kind(InsightKind::Warning)
        .next()
        .expect("empty page must produce a warning insight");
    assert_eq!(warning.pages, vec![7]);

    assert!(analysis
        .insights_of_kind(InsightKind::Strength)
        .next()
        .is_none());
}

#[test]
fn insights_name_the_offending_pages() {
    let pages = [
        stats(1, 60, 5, 3, 1),
        stats(2, 180, 5, 3, 1),
        stats(3, 170, 5, 3, 1),
        stats(4, 60, 5, 3, 1),
    ];
    let analysis = PacingAnalysis::analyze(&pages);

    let word_warning = analysis
        .insights()
        .iter()
        .find(|insight| insight.rule_id == "word-density" && insight.kind == InsightKind::Warning)
        .expect("overloaded pages should warn");
    assert_eq!(word_warning.pages, vec![2, 3]);
    assert!(word_warning.message.contains("pages 2, 3"));
}

#[test]
fn score_degrades_monotonically_as_more_pages_go_wrong() {
    let ideal = stats(1, 60, 5, 3, 1);
    let heavy = stats(1, 220, 11, 11, 0);

    let mut previous = 101u32;
    for broken_count in 0..=4u32 {
        let pages: Vec<PageStats> = (1..=4u32)
            .map(|n| {
                let mut page = if n <= broken_count { heavy } else { ideal };
                page.page_number = n;
                page
            })
            .collect();
        let score = u32::from(PacingAnalysis::analyze(&pages).score());
        assert!(
            score <= previous,
            "score should not rise with {broken_count} broken pages"
        );
        previous = score;
    }
}

#[test]
fn generated_mixed_stats_exercise_every_insight_kind() {
    let pages = generate_page_stats(12);
    let analysis = PacingAnalysis::analyze(&pages);

    assert!(analysis.has_warnings());
    assert!(analysis
        .insights_of_kind(InsightKind::Suggestion)
        .next()
        .is_some());
    assert!(analysis.score() < 100);

    let summary = analysis.summary();
    assert_eq!(summary.total_pages, 12);
    assert!(summary.needs_attention());
}

#[test]
fn max_insights_caps_the_report() {
    let pages = generate_page_stats(12);
    let config = PacingConfig {
        max_insights: 2,
        ..PacingConfig::default()
    };
    let analysis = PacingAnalysis::analyze_with_config(&pages, config);
    assert!(analysis.insights().len() <= 2);
}

#[test]
fn dialogue_length_ratings_match_editor_thresholds() {
    assert_eq!(rate_dialogue_length(24), LengthRating::Ok);
    assert_eq!(rate_dialogue_length(25), LengthRating::Warning);
    assert_eq!(rate_dialogue_length(34), LengthRating::Warning);
    assert_eq!(rate_dialogue_length(35), LengthRating::Error);
}
