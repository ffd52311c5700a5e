//! Marker patterns for script structure detection
//!
//! Classifies a single line of script text as an act heading, scene heading,
//! page marker, or plain content. Patterns are tried in that order; the first
//! match wins, and a line matching nothing is content — never an error.
//!
//! Writers mark structure in many dialects, so every pattern tolerates
//! bracketed (`[ACT 2]`), dashed (`--- ACT TWO ---`), and markdown-heading
//! (`# Act 1`) decoration, and act/page numbers may be written as digits,
//! roman numerals, or number words.

/// Classification of one script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker<'a> {
    /// An act heading, e.g. `ACT TWO: THE FALL`
    Act {
        /// Act number as written
        number: u32,
        /// Title text after the number, if any
        title: Option<&'a str>,
    },

    /// A scene heading, e.g. `SCENE: ROOFTOP` or `INT. WAREHOUSE - NIGHT`
    Scene {
        /// Explicit scene number, if written
        number: Option<u32>,
        /// Title text from an explicit `SCENE` heading
        title: Option<&'a str>,
        /// Location from a screenplay-style heading
        location: Option<&'a str>,
        /// Time-of-day word from the heading
        time_of_day: Option<&'a str>,
    },

    /// A page marker, e.g. `PAGE 5` or `Pg. 3`
    Page {
        /// Page number as written
        number: u32,
    },

    /// Anything else: panel descriptions, dialogue, blank lines
    Content,
}

/// Time-of-day words recognized at the end of scene headings
const TIME_OF_DAY_WORDS: &[&str] = &[
    "DAY",
    "NIGHT",
    "DAWN",
    "DUSK",
    "MORNING",
    "AFTERNOON",
    "EVENING",
    "NOON",
    "MIDNIGHT",
    "SUNSET",
    "SUNRISE",
    "CONTINUOUS",
    "LATER",
];

/// Screenplay heading prefixes that introduce a location
const SLUGLINE_PREFIXES: &[&str] = &["INT./EXT.", "INT/EXT.", "I/E.", "INT.", "EXT."];

/// Classify one line of script text
///
/// Tried in order: act heading, scene heading, page marker; a line matching
/// none of them is [`LineMarker::Content`].
///
/// # Example
///
/// ```rust
/// use panelscript_core::structure::{classify_line, LineMarker};
///
/// assert!(matches!(classify_line("ACT ONE"), LineMarker::Act { number: 1, .. }));
/// assert!(matches!(classify_line("PAGE 5"), LineMarker::Page { number: 5 }));
/// assert!(matches!(classify_line("He leaps."), LineMarker::Content));
/// ```
#[must_use]
pub fn classify_line(line: &str) -> LineMarker<'_> {
    let stripped = strip_decorations(line);
    if stripped.is_empty() {
        return LineMarker::Content;
    }

    if let Some(marker) = match_act_heading(stripped) {
        return marker;
    }
    if let Some(marker) = match_scene_heading(stripped) {
        return marker;
    }
    if let Some(marker) = match_page_marker(stripped) {
        return marker;
    }
    LineMarker::Content
}

/// Remove bracket, dash, and markdown-heading decoration from a line
fn strip_decorations(line: &str) -> &str {
    let mut s = line.trim();

    s = s.trim_start_matches('#').trim_start();

    if let Some(inner) = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        s = inner.trim();
    }

    // Dash decoration is only stripped as a full run separated from the text,
    // so `ROOFTOP - DAY` keeps its infix dash.
    while let Some(rest) = s.strip_prefix('-').or_else(|| s.strip_prefix('—')) {
        s = rest;
    }
    s = s.trim_start();
    loop {
        let trimmed = s.trim_end_matches(['-', '—']).trim_end();
        if trimmed.len() == s.len() {
            break;
        }
        s = trimmed;
    }

    s.trim()
}

/// Match act headings: `ACT ONE`, `ACT 2:`, `ACT II - title`
fn match_act_heading(line: &str) -> Option<LineMarker<'_>> {
    let rest = strip_keyword(line, "ACT")?;

    let (number_part, mut title) = split_heading_title(rest);
    let mut tokens = number_part.split_whitespace();
    let number_token = tokens.next()?;
    let number = parse_act_number(number_token)?;

    // `ACT 2 THE FALL` without a separator: remaining tokens are the title.
    if title.is_none() {
        let leftover = number_part[number_part.find(number_token)? + number_token.len()..].trim();
        if !leftover.is_empty() {
            title = Some(leftover);
        }
    }

    Some(LineMarker::Act { number, title })
}

/// Match scene headings in all three recognized dialects
fn match_scene_heading(line: &str) -> Option<LineMarker<'_>> {
    if let Some(rest) = strip_keyword(line, "SCENE") {
        let (number_part, mut title) = split_heading_title(rest);
        let number = number_part
            .split_whitespace()
            .next()
            .and_then(parse_page_number);
        if number.is_none() && !rest.is_empty() {
            // No leading number: the entire rest is the title.
            title = Some(rest);
        }
        let (location, time_of_day) = match title.and_then(split_location_time) {
            Some((Some(location), Some(time))) => (Some(location), Some(time)),
            _ => (None, None),
        };
        return Some(LineMarker::Scene {
            number,
            title,
            location,
            time_of_day,
        });
    }

    for prefix in SLUGLINE_PREFIXES {
        if starts_with_ignore_case(line, prefix) {
            let rest = line[prefix.len()..].trim();
            if rest.is_empty() {
                return None;
            }
            let (location, time_of_day) = match split_location_time(rest) {
                Some((Some(location), Some(time))) => (Some(location), Some(time)),
                _ => (Some(rest), None),
            };
            return Some(LineMarker::Scene {
                number: None,
                title: None,
                location,
                time_of_day,
            });
        }
    }

    // Bare `ROOFTOP - DAY`: an uppercase location ending in a time word.
    if let Some((Some(location), Some(time))) = split_location_time(line) {
        if is_shouted(location) {
            return Some(LineMarker::Scene {
                number: None,
                title: None,
                location: Some(location),
                time_of_day: Some(time),
            });
        }
    }

    None
}

/// Match page markers: `PAGE 5`, `Pg. 3`, `PAGE TWENTY`
fn match_page_marker(line: &str) -> Option<LineMarker<'_>> {
    let rest = strip_keyword(line, "PAGE").or_else(|| strip_keyword(line, "PG"))?;
    let token = rest.split_whitespace().next()?;
    let number = parse_page_number(token)?;

    // A page marker is a marker, not a sentence; anything after the number
    // (beyond trailing punctuation) disqualifies it.
    let leftover = rest[rest.find(token)? + token.len()..].trim();
    if !leftover.is_empty() {
        return None;
    }

    Some(LineMarker::Page { number })
}

/// Strip a leading keyword with a word boundary and optional `.`/`:` trail
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    if !starts_with_ignore_case(line, keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    match rest.chars().next() {
        None => Some(""),
        Some('.' | ':') => Some(rest[1..].trim_start()),
        Some(c) if c.is_whitespace() => Some(rest.trim_start()),
        Some(c) if c.is_ascii_digit() => Some(rest),
        _ => None,
    }
}

/// Split `2: THE FALL` into the number part and an optional title
fn split_heading_title(rest: &str) -> (&str, Option<&str>) {
    for (i, c) in rest.char_indices() {
        if matches!(c, ':' | '-' | '–' | '—') {
            let title = rest[i + c.len_utf8()..].trim();
            let number_part = rest[..i].trim();
            return (number_part, (!title.is_empty()).then_some(title));
        }
    }
    (rest.trim(), None)
}

/// Split `WAREHOUSE - NIGHT` into location and time-of-day
///
/// Returns `None` when the text has no dash at all; returns
/// `(Some(location), Some(time))` only when the trailing word is a known
/// time-of-day word.
fn split_location_time(text: &str) -> Option<(Option<&str>, Option<&str>)> {
    let (before, after) = text.rsplit_once('-')?;
    let location = before.trim_end_matches(['-', '–', '—']).trim();
    let time = after.trim().trim_end_matches(['.', ':']);
    if location.is_empty() || time.is_empty() {
        return None;
    }
    if is_time_of_day(time) {
        Some((Some(location), Some(time)))
    } else {
        Some((None, None))
    }
}

/// Whether a word is a recognized time-of-day
fn is_time_of_day(word: &str) -> bool {
    TIME_OF_DAY_WORDS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(word))
}

/// Whether text reads as a shouted heading: no lowercase letters at all
fn is_shouted(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Case-insensitive ASCII prefix check, safe on multibyte input
fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Parse an act number written as digits, a roman numeral, or a number word
fn parse_act_number(token: &str) -> Option<u32> {
    let token = token.trim_end_matches(['.', ':']);
    if token.is_empty() {
        return None;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    parse_roman_numeral(token).or_else(|| parse_number_word(token))
}

/// Parse a page number written as digits or a number word
fn parse_page_number(token: &str) -> Option<u32> {
    let token = token.trim_end_matches(['.', ':']);
    if token.is_empty() {
        return None;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    parse_number_word(token)
}

/// Parse roman numerals I through XX (the practical range for acts)
fn parse_roman_numeral(token: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut prev = 0u32;
    for c in token.chars() {
        let value = match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            _ => return None,
        };
        total += value;
        if prev < value {
            // Subtractive pair like IV or IX
            total -= prev * 2;
        }
        prev = value;
    }
    (total > 0 && total <= 20).then_some(total)
}

/// Parse spelled-out numbers one through twenty
fn parse_number_word(token: &str) -> Option<u32> {
    let word = token.to_ascii_lowercase();
    let value = match word.as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        _ => return None,
    };
    Some(value)
}
