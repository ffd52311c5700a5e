//! Unit tests for the emphasis micro-parser and its operations

use super::{
    count_words, escape_markers, parse_markdown, replace_case_insensitive, replace_in_segments,
    segments_to_markdown, strip_markdown, unescape_markers, Emphasis, Segment,
};
use alloc::{string::ToString, vec};

#[test]
fn parse_plain_text() {
    let segments = parse_markdown("just words");
    assert_eq!(segments, vec![Segment::plain("just words".to_string())]);
}

#[test]
fn parse_empty_input() {
    assert!(parse_markdown("").is_empty());
}

#[test]
fn parse_bold_run() {
    let segments = parse_markdown("I **love** this");
    assert_eq!(
        segments,
        vec![
            Segment::plain("I ".to_string()),
            Segment::bold("love".to_string()),
            Segment::plain(" this".to_string()),
        ]
    );
}

#[test]
fn parse_prefers_bold_italic_over_shorter_markers() {
    let segments = parse_markdown("***loud***");
    assert_eq!(segments, vec![Segment::bold_italic("loud".to_string())]);
}

#[test]
fn parse_italic_inside_sentence() {
    let segments = parse_markdown("a *quiet* beat");
    assert_eq!(segments[1], Segment::italic("quiet".to_string()));
}

#[test]
fn lone_marker_degrades_to_text() {
    assert_eq!(
        parse_markdown("a * b"),
        vec![Segment::plain("a * b".to_string())]
    );
    assert_eq!(parse_markdown("**"), vec![Segment::plain("**".to_string())]);
}

#[test]
fn unclosed_marker_degrades_to_text() {
    let segments = parse_markdown("**almost bold");
    assert_eq!(segments, vec![Segment::plain("**almost bold".to_string())]);
}

#[test]
fn adjacent_closed_markers_stay_separate() {
    let segments = parse_markdown("**a****b**");
    assert_eq!(
        segments,
        vec![
            Segment::bold("a".to_string()),
            Segment::bold("b".to_string()),
        ]
    );
}

#[test]
fn escaped_asterisk_is_literal() {
    let segments = parse_markdown(r"rated \* four stars");
    assert_eq!(
        segments,
        vec![Segment::plain("rated * four stars".to_string())]
    );
}

#[test]
fn roundtrip_balanced_inputs() {
    let cases = [
        "plain",
        "I **love** this",
        "***all*** of *it*",
        "**a****b**",
        "*a **b** c*",
        "a * b",
        "",
    ];
    for case in cases {
        assert_eq!(
            segments_to_markdown(&parse_markdown(case)),
            case,
            "round trip failed for {case:?}"
        );
    }
}

#[test]
fn strip_concatenates_visible_text() {
    assert_eq!(strip_markdown("I **love** this"), "I love this");
    assert_eq!(strip_markdown("***a***b"), "ab");
    assert_eq!(strip_markdown(""), "");
}

#[test]
fn count_words_excludes_markers() {
    assert_eq!(count_words("I **love** this"), 3);
    assert_eq!(count_words("***one***"), 1);
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("   "), 0);
}

#[test]
fn count_words_matches_stripped_word_count() {
    let cases = ["I **love** this", "*a* b ***c d***", "no markers here"];
    for case in cases {
        assert_eq!(
            count_words(case),
            strip_markdown(case).split_whitespace().count()
        );
    }
}

#[test]
fn escape_then_unescape_is_identity() {
    let raw = r"stars * and \ slashes";
    assert_eq!(unescape_markers(&escape_markers(raw)), raw);
}

#[test]
fn escaped_text_parses_as_literal() {
    let escaped = escape_markers("2 * 3 = 6");
    let segments = parse_markdown(&escaped);
    assert_eq!(segments, vec![Segment::plain("2 * 3 = 6".to_string())]);
}

#[test]
fn replace_is_case_insensitive() {
    assert_eq!(
        replace_case_insensitive("The HERO falls", "hero", "villain"),
        "The villain falls"
    );
}

#[test]
fn replace_preserves_emphasis_markers() {
    assert_eq!(
        replace_case_insensitive("a **BOLD** claim", "bold", "modest"),
        "a **modest** claim"
    );
}

#[test]
fn replace_spans_adjacent_same_style_segments() {
    let segments = vec![
        Segment::bold("two ".to_string()),
        Segment::bold("words".to_string()),
    ];
    let replaced = replace_in_segments(&segments, "two words", "one");
    assert_eq!(replaced, vec![Segment::bold("one".to_string())]);
}

#[test]
fn replace_does_not_cross_emphasis_boundary() {
    let out = replace_case_insensitive("no**pe**", "nope", "yes");
    assert_eq!(out, "no**pe**");
}

#[test]
fn replace_with_empty_needle_is_identity() {
    assert_eq!(replace_case_insensitive("text", "", "x"), "text");
}

#[test]
fn emphasis_marker_mapping() {
    assert_eq!(Emphasis::all().marker(), "***");
    assert_eq!(Emphasis::BOLD.marker(), "**");
    assert_eq!(Emphasis::ITALIC.marker(), "*");
    assert_eq!(Emphasis::empty().marker(), "");
}
