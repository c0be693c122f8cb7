//! Styled flowables handed to the renderer.

use serde::{Deserialize, Serialize};

use super::{HeadingStyle, LayoutBlock};

/// Height of the spacer emitted for blank source lines, in points.
pub const BLANK_LINE_SPACE: f32 = 8.0;

/// A unit of content in the final render sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Flowable {
    /// Wrapped text in a paragraph style
    Paragraph {
        /// Escaped markup with inline code spans
        markup: String,
        /// Style to render with
        style: StyleName,
    },

    /// Verbatim text, one output line per source line
    Preformatted {
        /// Raw text
        text: String,
        /// Style to render with
        style: StyleName,
    },

    /// Fixed vertical space
    Spacer {
        /// Height in points
        height: f32,
    },

    /// Force subsequent content onto a new page
    PageBreak,

    /// Outline entry pointing at the page holding the next content
    Bookmark {
        /// Outline title (plain text)
        title: String,
    },
}

impl Flowable {
    /// Create a paragraph flowable.
    pub fn paragraph(markup: impl Into<String>, style: StyleName) -> Self {
        Flowable::Paragraph {
            markup: markup.into(),
            style,
        }
    }

    /// Create a spacer flowable.
    pub fn spacer(height: f32) -> Self {
        Flowable::Spacer { height }
    }

    /// Check if this is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Flowable::PageBreak)
    }
}

impl From<&LayoutBlock> for Flowable {
    fn from(block: &LayoutBlock) -> Self {
        if let Some(text) = block.code_text() {
            return Flowable::Preformatted {
                text,
                style: StyleName::Code,
            };
        }
        let style = match block {
            LayoutBlock::Heading { level, .. } => match HeadingStyle::from_level(*level) {
                HeadingStyle::H1 => StyleName::Heading1,
                HeadingStyle::H2 => StyleName::Heading2,
                HeadingStyle::H3 => StyleName::Heading3,
            },
            _ => StyleName::Body,
        };
        match block.display_markup() {
            Some(markup) => Flowable::paragraph(markup, style),
            None => Flowable::spacer(BLANK_LINE_SPACE),
        }
    }
}

/// Named paragraph styles of the booklet stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    /// Centered title on the cover page
    TitlePage,
    /// Top-level heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Third-level and deeper headings
    Heading3,
    /// Body text, bullets and TOC entries
    Body,
    /// Monospaced code on a shaded background
    Code,
}
