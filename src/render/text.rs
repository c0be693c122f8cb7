//! Plain text rendering of a flowable sequence.

use crate::model::Flowable;

use super::markup::markup_text;

/// Marker line written for page breaks.
pub const PAGE_BREAK_MARKER: &str = "\u{0c}";

/// Render the structural content of flowables as plain text.
///
/// One paragraph per line, code blocks verbatim, page breaks as form
/// feeds. Spacers and bookmarks carry no text and are skipped, so the
/// output is stable across runs for identical input.
pub fn to_text(flowables: &[Flowable]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for flowable in flowables {
        match flowable {
            Flowable::Paragraph { markup, .. } => lines.push(markup_text(markup)),
            Flowable::Preformatted { text, .. } => lines.push(text.clone()),
            Flowable::PageBreak => lines.push(PAGE_BREAK_MARKER.to_string()),
            Flowable::Spacer { .. } | Flowable::Bookmark { .. } => {}
        }
    }
    lines.join("\n")
}
