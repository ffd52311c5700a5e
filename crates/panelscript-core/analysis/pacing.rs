//! Per-page pacing metrics and scoring
//!
//! Scores each page against a fixed threshold table and aggregates an
//! overall 0-100 score. The threshold table is a hard contract shared with
//! the editor UI; the scoring curve is an internal heuristic but must stay
//! monotonic (less ideal in, lower score out) and deterministic.

use alloc::vec::Vec;

/// Fixed ideal ranges for page composition
///
/// These values are shared with panel-length warnings in the editor and with
/// exported pacing reports; change them only alongside those surfaces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingThresholds {
    /// Minimum comfortable words on a page
    pub min_words_per_page: u32,
    /// Maximum comfortable words on a page
    pub max_words_per_page: u32,
    /// Minimum panels before a page reads as sparse
    pub min_panels_per_page: u32,
    /// Maximum panels before a page reads as crowded
    pub max_panels_per_page: u32,
    /// Lower bound of the ideal dialogue-panel ratio
    pub min_dialogue_ratio: f32,
    /// Upper bound of the ideal dialogue-panel ratio
    pub max_dialogue_ratio: f32,
    /// Lower bound of the ideal silent-panel ratio
    pub min_silent_ratio: f32,
    /// Upper bound of the ideal silent-panel ratio
    pub max_silent_ratio: f32,
}

impl Default for PacingThresholds {
    fn default() -> Self {
        Self {
            min_words_per_page: 30,
            max_words_per_page: 100,
            min_panels_per_page: 4,
            max_panels_per_page: 6,
            min_dialogue_ratio: 0.40,
            max_dialogue_ratio: 0.60,
            min_silent_ratio: 0.10,
            max_silent_ratio: 0.20,
        }
    }
}

/// Configuration for a pacing analysis pass
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingConfig {
    /// Threshold table to score against
    pub thresholds: PacingThresholds,
    /// Maximum insights to report; 0 means unlimited
    pub max_insights: usize,
}

/// Externally derived composition counts for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageStats {
    /// Page number as persisted
    pub page_number: u32,
    /// Total words across the page's dialogue and captions
    pub word_count: u32,
    /// Number of panels on the page
    pub panel_count: u32,
    /// Panels that contain dialogue
    pub dialogue_panel_count: u32,
    /// Panels with no dialogue or caption at all
    pub silent_panel_count: u32,
}

/// Computed metrics for one page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMetrics {
    /// Page number as persisted
    pub page_number: u32,
    /// Total words on the page
    pub word_count: u32,
    /// Number of panels on the page
    pub panel_count: u32,
    /// Dialogue panels over total panels; `None` for a panel-less page
    pub dialogue_ratio: Option<f32>,
    /// Silent panels over total panels; `None` for a panel-less page
    pub silent_ratio: Option<f32>,
    /// Heuristic page score, 0-100
    pub score: u8,
}

/// Deduction cap for word-count deviation
const WORD_DEDUCTION_CAP: i32 = 40;
/// Deduction cap for panel-count deviation
const PANEL_DEDUCTION_CAP: i32 = 30;
/// Deduction cap for each ratio deviation
const RATIO_DEDUCTION_CAP: i32 = 15;

/// Compute metrics and a score for one page
#[must_use]
pub(super) fn page_metrics(stats: &PageStats, thresholds: &PacingThresholds) -> PageMetrics {
    let dialogue_ratio = ratio(stats.dialogue_panel_count, stats.panel_count);
    let silent_ratio = ratio(stats.silent_panel_count, stats.panel_count);

    let mut score = 100i32;
    score -= range_deduction(
        stats.word_count,
        thresholds.min_words_per_page,
        thresholds.max_words_per_page,
        WORD_DEDUCTION_CAP,
    );
    score -= range_deduction(
        stats.panel_count,
        thresholds.min_panels_per_page,
        thresholds.max_panels_per_page,
        PANEL_DEDUCTION_CAP,
    );
    score -= ratio_deduction(
        dialogue_ratio,
        thresholds.min_dialogue_ratio,
        thresholds.max_dialogue_ratio,
    );
    score -= ratio_deduction(
        silent_ratio,
        thresholds.min_silent_ratio,
        thresholds.max_silent_ratio,
    );

    PageMetrics {
        page_number: stats.page_number,
        word_count: stats.word_count,
        panel_count: stats.panel_count,
        dialogue_ratio,
        silent_ratio,
        score: score.clamp(0, 100) as u8,
    }
}

/// Safe ratio of part over whole; `None` when the whole is zero
fn ratio(part: u32, whole: u32) -> Option<f32> {
    (whole > 0).then(|| part as f32 / whole as f32)
}

/// Deduction proportional to how far `value` sits outside `min..=max`
///
/// Zero inside the range, growing linearly with relative deviation up to
/// `cap`. Monotonic by construction.
fn range_deduction(value: u32, min: u32, max: u32, cap: i32) -> i32 {
    let deviation = if value < min {
        i64::from(min - value) * i64::from(cap) / i64::from(min.max(1))
    } else if value > max {
        i64::from(value - max) * i64::from(cap) / i64::from(max.max(1))
    } else {
        0
    };
    (deviation.min(i64::from(cap))) as i32
}

/// Deduction for a ratio outside `min..=max`; a missing ratio deducts the cap
fn ratio_deduction(ratio: Option<f32>, min: f32, max: f32) -> i32 {
    let Some(value) = ratio else {
        return RATIO_DEDUCTION_CAP;
    };
    let deviation = if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        return 0;
    };
    ((deviation * 50.0) as i32).min(RATIO_DEDUCTION_CAP).max(1)
}

/// Average the page scores into an overall 0-100 score
///
/// An empty script is neutral: 100.
#[must_use]
pub(super) fn overall_score(pages: &[PageMetrics]) -> u8 {
    if pages.is_empty() {
        return 100;
    }
    let sum: u32 = pages.iter().map(|page| u32::from(page.score)).sum();
    (sum / pages.len() as u32) as u8
}

/// Word count at which a panel's dialogue draws a warning
pub const DIALOGUE_WARNING_WORDS: u32 = 25;
/// Word count at which a panel's dialogue is an error
pub const DIALOGUE_ERROR_WORDS: u32 = 35;

/// Editor rating for one panel's dialogue length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthRating {
    /// Comfortable balloon length
    Ok,
    /// Getting long; the letterer will complain
    Warning,
    /// Will not fit a balloon legibly
    Error,
}

/// Rate a panel's dialogue word count against balloon-length limits
///
/// # Example
///
/// ```rust
/// use panelscript_core::analysis::{rate_dialogue_length, LengthRating};
///
/// assert_eq!(rate_dialogue_length(10), LengthRating::Ok);
/// assert_eq!(rate_dialogue_length(25), LengthRating::Warning);
/// assert_eq!(rate_dialogue_length(35), LengthRating::Error);
/// ```
#[must_use]
pub const fn rate_dialogue_length(word_count: u32) -> LengthRating {
    if word_count >= DIALOGUE_ERROR_WORDS {
        LengthRating::Error
    } else if word_count >= DIALOGUE_WARNING_WORDS {
        LengthRating::Warning
    } else {
        LengthRating::Ok
    }
}

/// Compute metrics for every page in order
#[must_use]
pub(super) fn all_page_metrics(
    pages: &[PageStats],
    thresholds: &PacingThresholds,
) -> Vec<PageMetrics> {
    pages
        .iter()
        .map(|stats| page_metrics(stats, thresholds))
        .collect()
}
