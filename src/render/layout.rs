//! Line breaking and pagination of flowables.
//!
//! Produces positioned drawing operations per page. Coordinates follow PDF
//! conventions: points, origin at the bottom-left corner of the page.

use crate::error::{Error, Result};
use crate::model::Flowable;

use super::fonts::Font;
use super::markup::{parse_markup, Span};
use super::options::RenderOptions;
use super::styles::{Alignment, ParagraphStyle, StyleSheet};

/// Number of spaces a tab expands to in preformatted text.
const TAB_WIDTH: usize = 4;

/// A positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A run of text in one font, starting at the baseline origin
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        text: String,
    },
    /// A filled gray rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        gray: f32,
    },
}

/// One page of positioned content.
#[derive(Debug, Clone, Default)]
pub struct LaidOutPage {
    /// Drawing operations in paint order
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    /// Check if nothing is drawn on the page.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Text of the page, one entry per baseline, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<(f32, String)> = Vec::new();
        for op in &self.ops {
            if let DrawOp::Text { y, text, .. } = op {
                match lines.last_mut() {
                    Some((last_y, line)) if (*last_y - *y).abs() < 0.01 => line.push_str(text),
                    _ => lines.push((*y, text.clone())),
                }
            }
        }
        lines.into_iter().map(|(_, line)| line).collect()
    }

    /// Fonts used on the page.
    pub fn fonts(&self) -> Vec<Font> {
        let mut fonts: Vec<Font> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { font, .. } => Some(*font),
                DrawOp::Rect { .. } => None,
            })
            .collect();
        fonts.sort();
        fonts.dedup();
        fonts
    }
}

/// An outline entry resolved to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTarget {
    /// Outline title
    pub title: String,
    /// Zero-based page index
    pub page_index: usize,
}

/// Result of laying out a flowable sequence.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Pages in order
    pub pages: Vec<LaidOutPage>,
    /// Bookmarks in document order
    pub bookmarks: Vec<BookmarkTarget>,
}

impl Layout {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lay out flowables on pages.
pub fn layout(flowables: &[Flowable], sheet: &StyleSheet, options: &RenderOptions) -> Result<Layout> {
    let mut engine = LayoutEngine::new(sheet, options)?;
    for flowable in flowables {
        engine.place(flowable)?;
    }
    Ok(engine.finish())
}

#[derive(Debug, Clone)]
struct Fragment {
    text: String,
    font: Font,
}

type Word = Vec<Fragment>;

#[derive(Debug, Default)]
struct Line {
    segments: Vec<Fragment>,
    width: f32,
}

impl Line {
    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn space_width(&self, size: f32) -> f32 {
        self.segments
            .last()
            .map(|s| s.font.text_width(" ", size))
            .unwrap_or(0.0)
    }

    fn push_word(&mut self, word: &[Fragment], size: f32) {
        if !self.is_empty() {
            self.width += self.space_width(size);
            if let Some(last) = self.segments.last_mut() {
                last.text.push(' ');
            }
        }
        for frag in word {
            self.width += frag.font.text_width(&frag.text, size);
            match self.segments.last_mut() {
                Some(last) if last.font == frag.font => last.text.push_str(&frag.text),
                _ => self.segments.push(frag.clone()),
            }
        }
    }
}

fn word_width(word: &[Fragment], size: f32) -> f32 {
    word.iter().map(|f| f.font.text_width(&f.text, size)).sum()
}

/// Split spans into whitespace-separated words; a word may mix fonts.
fn split_words(spans: &[Span], style: &ParagraphStyle) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Word = Vec::new();
    for span in spans {
        let font = if span.mono { style.mono_font } else { style.font };
        let mut piece = String::new();
        for c in span.text.chars() {
            if c.is_whitespace() {
                if !piece.is_empty() {
                    current.push(Fragment {
                        text: std::mem::take(&mut piece),
                        font,
                    });
                }
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                piece.push(c);
            }
        }
        if !piece.is_empty() {
            current.push(Fragment { text: piece, font });
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Break a word wider than `max_width` into pieces that fit.
fn split_long_word(word: Word, max_width: f32, size: f32) -> Vec<Word> {
    let mut pieces = Vec::new();
    let mut current: Word = Vec::new();
    let mut width = 0.0;
    for frag in word {
        let mut text = String::new();
        for c in frag.text.chars() {
            let mut buf = [0u8; 4];
            let w = frag.font.text_width(c.encode_utf8(&mut buf), size);
            if width + w > max_width && (width > 0.0 || !text.is_empty()) {
                if !text.is_empty() {
                    current.push(Fragment {
                        text: std::mem::take(&mut text),
                        font: frag.font,
                    });
                }
                pieces.push(std::mem::take(&mut current));
                width = 0.0;
            }
            text.push(c);
            width += w;
        }
        if !text.is_empty() {
            current.push(Fragment {
                text,
                font: frag.font,
            });
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Greedy line breaking.
fn wrap(spans: &[Span], style: &ParagraphStyle, max_width: f32) -> Vec<Line> {
    let size = style.font_size;
    let mut lines = Vec::new();
    let mut line = Line::default();

    for word in split_words(spans, style) {
        let width = word_width(&word, size);
        let fits = line.is_empty() || line.width + line.space_width(size) + width <= max_width;
        if !fits {
            lines.push(std::mem::take(&mut line));
        }
        if line.is_empty() && width > max_width {
            let mut pieces = split_long_word(word, max_width, size);
            let last = pieces.pop();
            for piece in pieces {
                let mut full = Line::default();
                full.push_word(&piece, size);
                lines.push(full);
            }
            if let Some(piece) = last {
                line.push_word(&piece, size);
            }
        } else {
            line.push_word(&word, size);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split preformatted text into output lines of at most `max_chars`.
///
/// Leading and trailing blank lines are dropped; interior blank lines are
/// kept.
fn preformatted_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|l| l.trim_end_matches('\r').replace('\t', &" ".repeat(TAB_WIDTH)))
        .collect();
    while lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let max_chars = max_chars.max(1);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= max_chars {
            out.push(line);
            continue;
        }
        for chunk in chars.chunks(max_chars) {
            out.push(chunk.iter().collect());
        }
    }
    out
}

struct LayoutEngine<'a> {
    sheet: &'a StyleSheet,
    left: f32,
    top: f32,
    bottom: f32,
    width: f32,
    frame_height: f32,
    y: f32,
    at_top: bool,
    pages: Vec<LaidOutPage>,
    bookmarks: Vec<BookmarkTarget>,
    pending_bookmarks: Vec<String>,
}

impl<'a> LayoutEngine<'a> {
    fn new(sheet: &'a StyleSheet, options: &RenderOptions) -> Result<Self> {
        let width = options.frame_width();
        let frame_height = options.frame_height();
        if width <= 0.0 || frame_height <= 0.0 {
            return Err(Error::Render(format!(
                "Margins leave no room on the page ({:.1} x {:.1} pt)",
                width, frame_height
            )));
        }
        let (_, page_height) = options.page_size.dimensions();
        let top = page_height - options.margins.top;
        Ok(Self {
            sheet,
            left: options.margins.left,
            top,
            bottom: options.margins.bottom,
            width,
            frame_height,
            y: top,
            at_top: true,
            pages: vec![LaidOutPage::default()],
            bookmarks: Vec::new(),
            pending_bookmarks: Vec::new(),
        })
    }

    fn place(&mut self, flowable: &Flowable) -> Result<()> {
        match flowable {
            Flowable::Paragraph { markup, style } => {
                let style = self.sheet.get(*style);
                self.paragraph(markup, &style)
            }
            Flowable::Preformatted { text, style } => {
                let style = self.sheet.get(*style);
                self.preformatted(text, &style)
            }
            Flowable::Spacer { height } => {
                self.spacer(*height);
                Ok(())
            }
            Flowable::PageBreak => {
                self.page_break();
                Ok(())
            }
            Flowable::Bookmark { title } => {
                self.pending_bookmarks.push(title.clone());
                Ok(())
            }
        }
    }

    fn current_page(&mut self) -> &mut LaidOutPage {
        if self.pages.is_empty() {
            self.pages.push(LaidOutPage::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn new_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.y = self.top;
        self.at_top = true;
    }

    /// Start a new page unless nothing has been placed on the current one.
    fn page_break(&mut self) {
        if !self.at_top {
            self.new_page();
        }
    }

    fn spacer(&mut self, height: f32) {
        if self.y - height < self.bottom {
            self.new_page();
            return;
        }
        self.y -= height;
        self.at_top = false;
    }

    fn check_leading(&self, leading: f32) -> Result<()> {
        if leading > self.frame_height {
            return Err(Error::Render(format!(
                "Line height {:.1} pt exceeds frame height {:.1} pt",
                leading, self.frame_height
            )));
        }
        Ok(())
    }

    /// Make room for one line, moving to a new page if needed.
    fn reserve_line(&mut self, leading: f32) {
        if self.y - leading < self.bottom - 0.001 && !self.at_top {
            self.new_page();
        }
        if !self.pending_bookmarks.is_empty() {
            let page_index = self.pages.len() - 1;
            for title in self.pending_bookmarks.drain(..) {
                self.bookmarks.push(BookmarkTarget { title, page_index });
            }
        }
    }

    fn draw_background(&mut self, style: &ParagraphStyle) {
        if let Some(gray) = style.back_gray {
            let op = DrawOp::Rect {
                x: self.left,
                y: self.y - style.leading,
                width: self.width,
                height: style.leading,
                gray,
            };
            self.current_page().ops.push(op);
        }
    }

    fn baseline(&self, style: &ParagraphStyle) -> f32 {
        self.y - style.leading + (style.leading - style.font_size) / 2.0 + style.font_size * 0.2
    }

    fn paragraph(&mut self, markup: &str, style: &ParagraphStyle) -> Result<()> {
        let spans = parse_markup(markup);
        let lines = wrap(&spans, style, self.width);
        if lines.is_empty() {
            return Ok(());
        }
        self.check_leading(style.leading)?;
        if !self.at_top {
            self.y -= style.space_before;
        }

        for line in lines {
            self.reserve_line(style.leading);
            self.draw_background(style);
            let mut x = match style.alignment {
                Alignment::Left => self.left,
                Alignment::Center => self.left + ((self.width - line.width) / 2.0).max(0.0),
            };
            let y = self.baseline(style);
            for segment in line.segments {
                let advance = segment.font.text_width(&segment.text, style.font_size);
                self.current_page().ops.push(DrawOp::Text {
                    x,
                    y,
                    font: segment.font,
                    size: style.font_size,
                    text: segment.text,
                });
                x += advance;
            }
            self.y -= style.leading;
            self.at_top = false;
        }

        self.y -= style.space_after;
        Ok(())
    }

    fn preformatted(&mut self, text: &str, style: &ParagraphStyle) -> Result<()> {
        let char_width = style.font.text_width(" ", style.font_size);
        let max_chars = if char_width > 0.0 {
            (self.width / char_width).floor() as usize
        } else {
            usize::MAX
        };
        let lines = preformatted_lines(text, max_chars);
        if lines.is_empty() {
            return Ok(());
        }
        self.check_leading(style.leading)?;
        if !self.at_top {
            self.y -= style.space_before;
        }

        for line in lines {
            self.reserve_line(style.leading);
            self.draw_background(style);
            if !line.is_empty() {
                let y = self.baseline(style);
                let op = DrawOp::Text {
                    x: self.left,
                    y,
                    font: style.font,
                    size: style.font_size,
                    text: line,
                };
                self.current_page().ops.push(op);
            }
            self.y -= style.leading;
            self.at_top = false;
        }

        self.y -= style.space_after;
        Ok(())
    }

    fn finish(mut self) -> Layout {
        while self.pages.len() > 1 && self.pages.last().is_some_and(|p| p.is_empty()) {
            self.pages.pop();
        }
        let last_index = self.pages.len().saturating_sub(1);
        for title in self.pending_bookmarks.drain(..) {
            self.bookmarks.push(BookmarkTarget {
                title,
                page_index: last_index,
            });
        }
        for bookmark in &mut self.bookmarks {
            bookmark.page_index = bookmark.page_index.min(last_index);
        }
        Layout {
            pages: self.pages,
            bookmarks: self.bookmarks,
        }
    }
}
