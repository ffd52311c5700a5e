//! Operations over parsed emphasis text
//!
//! Stripping, word counting, escaping, and case-insensitive find/replace.
//! All operations share the parser's degradation behavior: malformed input is
//! treated as literal text, never an error.

use alloc::{string::String, vec::Vec};

use super::{parse_markdown, segments_to_markdown, Segment};

/// Strip emphasis markers, keeping only visible text
///
/// Equivalent to concatenating the contents of [`parse_markdown`]'s segments.
///
/// # Example
///
/// ```rust
/// use panelscript_core::markdown::strip_markdown;
///
/// assert_eq!(strip_markdown("I **love** this"), "I love this");
/// ```
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let segments = parse_markdown(text);
    let mut out = String::with_capacity(text.len());
    for segment in &segments {
        out.push_str(&segment.content);
    }
    out
}

/// Count whitespace-separated words, excluding marker characters
///
/// Matches the word count of [`strip_markdown`] output for the same input:
/// `**loud**` is one word, not three tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    strip_markdown(text).split_whitespace().count()
}

/// Escape literal asterisks and backslashes for safe embedding
///
/// The inverse of [`unescape_markers`].
#[must_use]
pub fn escape_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Resolve backslash escapes to literal characters
#[must_use]
pub fn unescape_markers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() && matches!(chars[i + 1], '*' | '\\') {
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Case-insensitive find/replace across marker syntax
///
/// Parses, replaces within runs of equally-emphasized text, and serializes
/// back to marker syntax. A match may span adjacent segments of the same
/// emphasis, but never crosses an emphasis boundary.
#[must_use]
pub fn replace_case_insensitive(text: &str, find: &str, replace: &str) -> String {
    segments_to_markdown(&replace_in_segments(&parse_markdown(text), find, replace))
}

/// Case-insensitive find/replace over parsed segments
///
/// Adjacent segments with the same emphasis are coalesced before matching,
/// so a phrase split across two same-style segments is still found. Returns
/// the (possibly coalesced) replacement segments; an empty `find` returns the
/// input unchanged.
#[must_use]
pub fn replace_in_segments(segments: &[Segment], find: &str, replace: &str) -> Vec<Segment> {
    if find.is_empty() {
        return segments.to_vec();
    }

    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match out.last_mut() {
            Some(last) if last.style == segment.style => {
                last.content.push_str(&segment.content);
            }
            _ => out.push(segment.clone()),
        }
    }

    for segment in &mut out {
        segment.content = replace_all_case_insensitive(&segment.content, find, replace);
    }
    out
}

/// Replace every case-insensitive occurrence of `find` in `haystack`
fn replace_all_case_insensitive(haystack: &str, find: &str, replace: &str) -> String {
    let hay: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = find.chars().collect();
    let mut out = String::with_capacity(haystack.len());
    let mut i = 0;

    while i < hay.len() {
        if matches_at(&hay, i, &needle) {
            out.push_str(replace);
            i += needle.len();
        } else {
            out.push(hay[i]);
            i += 1;
        }
    }
    out
}

/// Case-insensitive character match of `needle` at `at`
fn matches_at(hay: &[char], at: usize, needle: &[char]) -> bool {
    if at + needle.len() > hay.len() {
        return false;
    }
    hay[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(a, b)| chars_eq_fold(*a, *b))
}

/// Case-folded character equality
fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
