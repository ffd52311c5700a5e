//! Emphasis segment types for the markdown micro-parser
//!
//! A parsed string is an ordered sequence of [`Segment`]s. Segments never
//! overlap, and concatenating their `content` fields reproduces the visible
//! text of the source string (marker characters excluded).

use alloc::string::String;
use bitflags::bitflags;
use core::fmt;

bitflags! {
    /// Emphasis weight applied to a segment
    ///
    /// The empty set is plain text; `BOLD | ITALIC` is the `***x***` form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Emphasis: u8 {
        /// Bold weight (`**x**`)
        const BOLD = 0b01;
        /// Italic weight (`*x*`)
        const ITALIC = 0b10;
    }
}

impl Emphasis {
    /// Marker string that opens and closes this emphasis
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self.bits() {
            0b11 => "***",
            0b01 => "**",
            0b10 => "*",
            _ => "",
        }
    }

    /// Emphasis for a marker of the given asterisk count (1-3)
    #[must_use]
    pub const fn from_marker_len(len: usize) -> Self {
        match len {
            3 => Self::all(),
            2 => Self::BOLD,
            1 => Self::ITALIC,
            _ => Self::empty(),
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bits() {
            0b11 => write!(f, "bold-italic"),
            0b01 => write!(f, "bold"),
            0b10 => write!(f, "italic"),
            _ => write!(f, "text"),
        }
    }
}

/// One run of equally-emphasized text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Emphasis applied to the run
    pub style: Emphasis,
    /// Visible text of the run, marker characters excluded
    pub content: String,
}

impl Segment {
    /// Create a segment with an explicit style
    #[must_use]
    pub const fn new(style: Emphasis, content: String) -> Self {
        Self { style, content }
    }

    /// Create a plain text segment
    #[must_use]
    pub const fn plain(content: String) -> Self {
        Self::new(Emphasis::empty(), content)
    }

    /// Create a bold segment
    #[must_use]
    pub const fn bold(content: String) -> Self {
        Self::new(Emphasis::BOLD, content)
    }

    /// Create an italic segment
    #[must_use]
    pub const fn italic(content: String) -> Self {
        Self::new(Emphasis::ITALIC, content)
    }

    /// Create a bold-italic segment
    #[must_use]
    pub const fn bold_italic(content: String) -> Self {
        Self::new(Emphasis::all(), content)
    }

    /// Whether this segment carries no emphasis
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.style.is_empty()
    }
}
