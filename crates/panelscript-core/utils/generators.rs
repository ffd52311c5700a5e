//! Generators for synthetic comic scripts
//!
//! This module provides generators for creating test script text with varying
//! structure shapes, used primarily for benchmarking the structure detector
//! and diff engine. All generators produce text that the detector can scan.

use alloc::string::{String, ToString};
use core::fmt::Write;

#[cfg(feature = "analysis")]
use crate::analysis::PageStats;
#[cfg(feature = "analysis")]
use alloc::vec::Vec;

/// Synthetic comic script generator
pub struct ScriptGenerator {
    /// Script title used in a leading comment line
    pub title: String,
    /// Number of acts to generate (0 = no act markers)
    pub acts: usize,
    /// Number of scenes per act (0 = no scene markers)
    pub scenes_per_act: usize,
    /// Number of pages per scene
    pub pages_per_scene: usize,
    /// Content lines emitted under each page marker
    pub lines_per_page: usize,
}

impl ScriptGenerator {
    /// Create generator for a flat script: page markers only
    #[must_use]
    pub fn flat(pages: usize) -> Self {
        Self {
            title: "Flat Benchmark Script".to_string(),
            acts: 0,
            scenes_per_act: 0,
            pages_per_scene: pages,
            lines_per_page: 4,
        }
    }

    /// Create generator for a fully structured script: acts, scenes, pages
    #[must_use]
    pub fn structured(acts: usize, scenes_per_act: usize, pages_per_scene: usize) -> Self {
        Self {
            title: "Structured Benchmark Script".to_string(),
            acts,
            scenes_per_act,
            pages_per_scene,
            lines_per_page: 4,
        }
    }

    /// Generate complete script text
    #[must_use]
    pub fn generate(&self) -> String {
        let mut script = String::with_capacity(
            64 + self.total_pages() * (16 + self.lines_per_page * 48),
        );
        let _ = writeln!(script, "TITLE: {}", self.title);
        script.push('\n');

        let mut page = 1usize;
        if self.acts == 0 {
            self.generate_pages(&mut script, self.pages_per_scene, &mut page);
        } else {
            for act in 1..=self.acts {
                let _ = writeln!(script, "ACT {act}");
                script.push('\n');
                if self.scenes_per_act == 0 {
                    self.generate_pages(&mut script, self.pages_per_scene, &mut page);
                } else {
                    for scene in 1..=self.scenes_per_act {
                        let _ = writeln!(script, "SCENE {scene}: LOCATION {scene} - DAY");
                        script.push('\n');
                        self.generate_pages(&mut script, self.pages_per_scene, &mut page);
                    }
                }
            }
        }

        script
    }

    /// Total pages the generated script will contain
    #[must_use]
    pub fn total_pages(&self) -> usize {
        let scenes = if self.acts == 0 {
            1
        } else if self.scenes_per_act == 0 {
            self.acts
        } else {
            self.acts * self.scenes_per_act
        };
        scenes * self.pages_per_scene
    }

    /// Emit `count` page blocks starting at `*page`
    fn generate_pages(&self, script: &mut String, count: usize, page: &mut usize) {
        for _ in 0..count {
            let _ = writeln!(script, "PAGE {page}");
            for line in 0..self.lines_per_page {
                let _ = writeln!(
                    script,
                    "Panel {}: The hero crosses the **rain-slick** rooftop, panel {line}.",
                    line + 1
                );
            }
            script.push('\n');
            *page += 1;
        }
    }
}

/// Generate per-page pacing stats with a repeating density pattern
///
/// Cycles through sparse, ideal, and dense pages so analyzer benchmarks and
/// tests see all scoring paths.
#[cfg(feature = "analysis")]
#[must_use]
pub fn generate_page_stats(pages: u32) -> Vec<PageStats> {
    (1..=pages)
        .map(|page_number| match page_number % 3 {
            0 => PageStats {
                page_number,
                word_count: 140,
                panel_count: 9,
                dialogue_panel_count: 8,
                silent_panel_count: 0,
            },
            1 => PageStats {
                page_number,
                word_count: 60,
                panel_count: 5,
                dialogue_panel_count: 3,
                silent_panel_count: 1,
            },
            _ => PageStats {
                page_number,
                word_count: 12,
                panel_count: 2,
                dialogue_panel_count: 1,
                silent_panel_count: 1,
            },
        })
        .collect()
}
