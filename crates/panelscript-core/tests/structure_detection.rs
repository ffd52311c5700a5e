//! Integration tests for structure detection over realistic script text.
//!
//! Covers the marker dialect matrix, implicit structure synthesis, and the
//! suggested-structure classification rules.

use panelscript_core::structure::{
    classify_line, default_structure, detect_structure, suggest_act_breaks, LineMarker,
    StructureHint,
};
use panelscript_core::utils::ScriptGenerator;

#[test]
fn full_script_builds_expected_tree() {
    let script = r"ACT ONE
SCENE: ROOFTOP
PAGE 1
Panel 1: Wide establishing shot of the city at dusk.
Panel 2: Close on MIRA, wind in her face.
PAGE 2
Panel 1: She checks the grapple line.

SCENE 2 - ALLEY
PAGE 3
Panel 1: Boots hit wet pavement.

ACT TWO: THE FALL
INT. WAREHOUSE - NIGHT
PAGE 4
Panel 1: Empty crates, one swinging lamp.";

    let detected = detect_structure(script);

    assert_eq!(detected.acts.len(), 2);
    assert_eq!(detected.hint, StructureHint::ActsAndScenes);
    assert_eq!(detected.total_pages, 4);

    let act_one = &detected.acts[0];
    assert_eq!(act_one.number, 1);
    assert_eq!(act_one.display_name(), "Act 1");
    assert_eq!(act_one.scenes.len(), 2);
    assert_eq!(act_one.scenes[0].title, Some("ROOFTOP"));
    assert_eq!(act_one.scenes[0].pages, vec![1, 2]);
    assert_eq!(act_one.scenes[1].number, 2);
    assert_eq!(act_one.scenes[1].title, Some("ALLEY"));
    assert_eq!(act_one.scenes[1].pages, vec![3]);

    let act_two = &detected.acts[1];
    assert_eq!(act_two.number, 2);
    assert_eq!(act_two.title, Some("THE FALL"));
    assert_eq!(act_two.scenes[0].location, Some("WAREHOUSE"));
    assert_eq!(act_two.scenes[0].time_of_day, Some("NIGHT"));
    assert_eq!(act_two.scenes[0].pages, vec![4]);

    // The second act's marker closed the first act one line earlier.
    assert_eq!(act_one.end_line, Some(12));
    assert_eq!(act_two.start_line, 13);
}

#[test]
fn markerless_scripts_collapse_to_one_implicit_act_and_scene() {
    let inputs = [
        "PAGE 1\ncontent\nPAGE 2\ncontent\nPAGE 3",
        "Pg. 1\nPg. 2",
        "PAGE ONE\nPAGE TWO\nPAGE THREE\nPAGE FOUR",
    ];
    for input in inputs {
        let detected = detect_structure(input);
        assert_eq!(detected.hint, StructureHint::Flat, "input: {input:?}");
        assert_eq!(detected.acts.len(), 1);
        assert_eq!(detected.scene_count(), 1);
        assert!(detected.acts[0].implicit);

        let pages = detected.page_numbers();
        let mut sorted = pages.clone();
        sorted.sort_unstable();
        assert_eq!(pages, sorted, "pages kept document order: {input:?}");
    }
}

#[test]
fn prose_with_no_markers_detects_nothing() {
    let detected = detect_structure("Just a writer\nthinking out loud\nabout rooftops.");
    assert!(detected.acts.is_empty());
    assert_eq!(detected.total_pages, 0);
    assert_eq!(detected.hint, StructureHint::Flat);
}

#[test]
fn classification_is_first_match_wins_in_document_order() {
    // An act line never doubles as a scene even when decorated
    assert!(matches!(
        classify_line("[ACT 2]"),
        LineMarker::Act { number: 2, .. }
    ));
    // Scene wins over page when both could arguably apply
    assert!(matches!(
        classify_line("SCENE 4"),
        LineMarker::Scene {
            number: Some(4),
            ..
        }
    ));
}

#[test]
fn suggest_act_breaks_budget_matrix() {
    for (pages, expected_acts) in [(8, 1), (16, 2), (24, 3)] {
        let breaks = suggest_act_breaks(pages);
        assert_eq!(breaks.len(), expected_acts, "{pages} pages");
        assert_eq!(breaks[0].start_page, 1);
        assert_eq!(breaks.last().unwrap().end_page, pages);
        for pair in breaks.windows(2) {
            assert_eq!(
                pair[1].start_page,
                pair[0].end_page + 1,
                "no gaps or overlaps at {pages} pages"
            );
        }
    }
}

#[test]
fn default_structure_mirrors_flat_detection() {
    let generated = ScriptGenerator::flat(6).generate();
    let detected = detect_structure(&generated);
    let synthesized = default_structure(6);

    assert_eq!(detected.hint, synthesized.hint);
    assert_eq!(detected.total_pages, synthesized.total_pages);
    assert_eq!(
        detected.acts[0].scenes[0].pages,
        synthesized.acts[0].scenes[0].pages
    );
}

#[test]
fn structured_generator_round_trips_through_detection() {
    let generator = ScriptGenerator::structured(3, 2, 4);
    let script = generator.generate();
    let detected = detect_structure(&script);

    assert_eq!(detected.acts.len(), 3);
    assert_eq!(detected.scene_count(), 6);
    assert_eq!(detected.total_pages as usize, generator.total_pages());
    assert_eq!(detected.hint, StructureHint::ActsAndScenes);
    assert!(detected.issues.is_empty());
}

#[test]
fn numbering_problems_surface_as_issues_not_errors() {
    let detected = detect_structure("PAGE 2\nPAGE 2\nPAGE 1");
    assert_eq!(detected.total_pages, 2);
    assert_eq!(detected.issues.len(), 2);
}
