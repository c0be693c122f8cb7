//! Layout blocks produced by the Markdown translator.

use serde::{Deserialize, Serialize};

/// A renderer-agnostic unit of formatted content.
///
/// Text carried by headings, paragraphs and bullets is markup: HTML-special
/// characters are escaped and inline code spans are wrapped in
/// `<font face="Courier">..</font>`. Code block lines are verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutBlock {
    /// A heading with its raw `#` count as level
    Heading {
        /// Number of leading `#` characters
        level: usize,
        /// Heading markup
        text: String,
    },

    /// A paragraph of joined source lines
    Paragraph {
        /// Paragraph markup
        text: String,
    },

    /// A single bullet line (without its display marker)
    BulletLine {
        /// Bullet markup
        text: String,
    },

    /// A fenced code region
    CodeBlock {
        /// Captured lines, verbatim
        lines: Vec<String>,
    },

    /// Vertical space from a blank source line
    Spacer,
}

impl LayoutBlock {
    /// Create a heading block.
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        LayoutBlock::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        LayoutBlock::Paragraph { text: text.into() }
    }

    /// Create a bullet block.
    pub fn bullet(text: impl Into<String>) -> Self {
        LayoutBlock::BulletLine { text: text.into() }
    }

    /// Create a code block from captured lines.
    pub fn code(lines: Vec<String>) -> Self {
        LayoutBlock::CodeBlock { lines }
    }

    /// Markup as it should be displayed, including the bullet marker.
    ///
    /// Returns `None` for code blocks and spacers.
    pub fn display_markup(&self) -> Option<String> {
        match self {
            LayoutBlock::Heading { text, .. } | LayoutBlock::Paragraph { text } => {
                Some(text.clone())
            }
            LayoutBlock::BulletLine { text } => Some(format!("* {}", text)),
            LayoutBlock::CodeBlock { .. } | LayoutBlock::Spacer => None,
        }
    }

    /// Code content joined by line breaks, for code blocks.
    pub fn code_text(&self) -> Option<String> {
        match self {
            LayoutBlock::CodeBlock { lines } => Some(lines.join("\n")),
            _ => None,
        }
    }
}

/// Heading styling bucket.
///
/// Levels 3 and deeper all share the third style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `#`
    H1,
    /// `##`
    H2,
    /// `###` and deeper
    H3,
}

impl HeadingStyle {
    /// Map a raw `#` count to its styling bucket.
    pub fn from_level(level: usize) -> Self {
        match level {
            0 | 1 => HeadingStyle::H1,
            2 => HeadingStyle::H2,
            _ => HeadingStyle::H3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_buckets() {
        assert_eq!(HeadingStyle::from_level(1), HeadingStyle::H1);
        assert_eq!(HeadingStyle::from_level(2), HeadingStyle::H2);
        assert_eq!(HeadingStyle::from_level(3), HeadingStyle::H3);
        assert_eq!(HeadingStyle::from_level(6), HeadingStyle::H3);
        assert_eq!(HeadingStyle::from_level(12), HeadingStyle::H3);
    }

    #[test]
    fn test_display_markup() {
        assert_eq!(
            LayoutBlock::bullet("item").display_markup(),
            Some("* item".to_string())
        );
        assert_eq!(
            LayoutBlock::paragraph("text").display_markup(),
            Some("text".to_string())
        );
        assert_eq!(LayoutBlock::Spacer.display_markup(), None);
    }

    #[test]
    fn test_code_text() {
        let block = LayoutBlock::code(vec!["line1".to_string(), "line2".to_string()]);
        assert_eq!(block.code_text(), Some("line1\nline2".to_string()));
        assert_eq!(LayoutBlock::Spacer.code_text(), None);
    }
}
