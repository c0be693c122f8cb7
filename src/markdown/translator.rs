//! Line-oriented Markdown to layout block translation.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::model::LayoutBlock;

use super::inline::to_markup;

const FENCE: &str = "```";

fn line_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap()
    })
}

/// Split text into lines on every Unicode line boundary.
///
/// `\r\n` counts as one break, a lone `\r` is a break of its own, and a
/// final line terminator does not start an extra empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = line_break_regex().split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Translate raw Markdown text into layout blocks.
///
/// Never fails: every line is a fence toggle, code content, blank, heading,
/// bullet, or paragraph content.
///
/// # Example
///
/// ```
/// use gtmkit::markdown::translate;
/// use gtmkit::LayoutBlock;
///
/// let blocks = translate("# Title\nSome `code` here");
/// assert_eq!(blocks[0], LayoutBlock::heading(1, "Title"));
/// assert_eq!(
///     blocks[1],
///     LayoutBlock::paragraph("Some <font face=\"Courier\">code</font> here")
/// );
/// ```
pub fn translate(text: &str) -> Vec<LayoutBlock> {
    let mut translator = Translator::new();
    for line in split_lines(text) {
        translator.push_line(line);
    }
    translator.finish()
}

/// Incremental translator state.
#[derive(Debug, Default)]
pub struct Translator {
    blocks: Vec<LayoutBlock>,
    in_code: bool,
    code_lines: Vec<String>,
    para_lines: Vec<String>,
}

impl Translator {
    /// Create a translator with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the translator is inside a fenced region.
    pub fn in_code(&self) -> bool {
        self.in_code
    }

    /// Feed one source line (without its line terminator).
    pub fn push_line(&mut self, line: &str) {
        let stripped = line.trim();

        if stripped.starts_with(FENCE) {
            self.flush_paragraph();
            if self.in_code {
                let lines = std::mem::take(&mut self.code_lines);
                self.blocks.push(LayoutBlock::code(lines));
                self.in_code = false;
            } else {
                self.in_code = true;
            }
            return;
        }

        if self.in_code {
            self.code_lines.push(line.to_string());
            return;
        }

        if stripped.is_empty() {
            self.flush_paragraph();
            self.blocks.push(LayoutBlock::Spacer);
            return;
        }

        if stripped.starts_with('#') {
            self.flush_paragraph();
            let rest = stripped.trim_start_matches('#');
            let level = stripped.len() - rest.len();
            self.blocks
                .push(LayoutBlock::heading(level, to_markup(rest.trim())));
            return;
        }

        if let Some(rest) = stripped
            .strip_prefix("- ")
            .or_else(|| stripped.strip_prefix("* "))
        {
            self.flush_paragraph();
            self.blocks.push(LayoutBlock::bullet(to_markup(rest.trim())));
            return;
        }

        self.para_lines.push(stripped.to_string());
    }

    /// Finish translation, emitting any trailing code or paragraph.
    pub fn finish(mut self) -> Vec<LayoutBlock> {
        if self.in_code && !self.code_lines.is_empty() {
            let lines = std::mem::take(&mut self.code_lines);
            self.blocks.push(LayoutBlock::code(lines));
        } else {
            self.flush_paragraph();
        }
        self.blocks
    }

    fn flush_paragraph(&mut self) {
        if self.para_lines.is_empty() {
            return;
        }
        let joined = self
            .para_lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.para_lines.clear();

        if !joined.trim().is_empty() {
            self.blocks.push(LayoutBlock::paragraph(to_markup(&joined)));
        }
    }
}

/// Derive a document title from its text.
///
/// The first line starting with `#` wins, with the `#` run and surrounding
/// whitespace removed. Falls back to the file stem.
pub fn title_from_text(text: &str, path: &Path) -> String {
    split_lines(text)
        .into_iter()
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}
