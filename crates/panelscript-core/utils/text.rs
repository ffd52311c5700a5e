//! Text input hygiene helpers
//!
//! Small helpers applied to raw script text before scanning: BOM removal and
//! line-ending normalization. Script text arrives from paste buffers and file
//! imports on every platform, so CRLF and lone-CR endings both occur in
//! practice.

use alloc::string::String;

/// Strip a leading UTF-8 byte order mark, if present
///
/// Returns a subslice of the input; no allocation.
///
/// # Example
///
/// ```rust
/// use panelscript_core::utils::text::strip_bom;
///
/// assert_eq!(strip_bom("\u{FEFF}PAGE 1"), "PAGE 1");
/// assert_eq!(strip_bom("PAGE 1"), "PAGE 1");
/// ```
#[must_use]
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{FEFF}').unwrap_or(source)
}

/// Normalize CRLF and lone-CR line endings to LF
///
/// Allocates only when the input actually contains a carriage return.
#[must_use]
pub fn normalize_line_endings(source: &str) -> String {
    if !source.contains('\r') {
        return String::from(source);
    }

    let mut normalized = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }
    normalized
}
