//! Paragraph styles for the booklet.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::fonts::Font;
use crate::model::StyleName;

/// Horizontal alignment of wrapped lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}

/// Visual properties of a paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Font for regular text
    pub font: Font,

    /// Font for inline code spans
    pub mono_font: Font,

    /// Font size in points
    pub font_size: f32,

    /// Distance between baselines in points
    pub leading: f32,

    /// Space before the paragraph in points (dropped at the top of a page)
    pub space_before: f32,

    /// Space after the paragraph in points
    pub space_after: f32,

    /// Line alignment
    pub alignment: Alignment,

    /// Gray level (0.0 black .. 1.0 white) filled behind each line
    pub back_gray: Option<f32>,
}

impl ParagraphStyle {
    /// A left-aligned style with no extra spacing.
    pub fn new(font: Font, font_size: f32, leading: f32) -> Self {
        Self {
            font,
            mono_font: Font::Courier,
            font_size,
            leading,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
            back_gray: None,
        }
    }

    /// Set space before.
    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    /// Set space after.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    /// Set alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set background gray level.
    pub fn with_back_gray(mut self, gray: f32) -> Self {
        self.back_gray = Some(gray.clamp(0.0, 1.0));
        self
    }
}

/// Lookup from style names to paragraph styles.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    styles: HashMap<StyleName, ParagraphStyle>,
}

impl StyleSheet {
    /// The booklet stylesheet.
    pub fn booklet() -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            StyleName::TitlePage,
            ParagraphStyle::new(Font::HelveticaBold, 20.0, 24.0)
                .with_space_after(6.0)
                .with_alignment(Alignment::Center),
        );
        styles.insert(
            StyleName::Heading1,
            ParagraphStyle::new(Font::HelveticaBold, 18.0, 22.0).with_space_after(10.0),
        );
        styles.insert(
            StyleName::Heading2,
            ParagraphStyle::new(Font::HelveticaBold, 14.0, 18.0)
                .with_space_before(12.0)
                .with_space_after(8.0),
        );
        styles.insert(
            StyleName::Heading3,
            ParagraphStyle::new(Font::HelveticaBoldOblique, 12.0, 14.0)
                .with_space_before(12.0)
                .with_space_after(6.0),
        );
        styles.insert(
            StyleName::Body,
            ParagraphStyle::new(Font::Helvetica, 10.0, 14.0).with_space_before(6.0),
        );
        styles.insert(
            StyleName::Code,
            ParagraphStyle::new(Font::Courier, 9.0, 11.0).with_back_gray(0.96),
        );
        Self { styles }
    }

    /// Get a style by name.
    ///
    /// Names missing from a customized sheet fall back to the body style of
    /// the booklet sheet.
    pub fn get(&self, name: StyleName) -> ParagraphStyle {
        self.styles
            .get(&name)
            .or_else(|| self.styles.get(&StyleName::Body))
            .cloned()
            .unwrap_or_else(|| ParagraphStyle::new(Font::Helvetica, 10.0, 14.0))
    }

    /// Replace or add a style.
    pub fn set(&mut self, name: StyleName, style: ParagraphStyle) {
        self.styles.insert(name, style);
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::booklet()
    }
}
