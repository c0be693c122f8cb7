//! Rendering options and configuration.

use chrono::{DateTime, Utc};

/// Page dimensions in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// US Letter (8.5 x 11 inches)
    #[default]
    Letter,
    /// A4 (210 x 297 mm)
    A4,
    /// Custom width and height in points
    Custom(f32, f32),
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Custom(w, h) => (w, h),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Space above the frame
    pub top: f32,
    /// Space right of the frame
    pub right: f32,
    /// Space below the frame
    pub bottom: f32,
    /// Space left of the frame
    pub left: f32,
}

impl Margins {
    /// Same margin on every side.
    pub fn uniform(points: f32) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(72.0)
    }
}

/// Options for rendering the flowable sequence to PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size
    pub page_size: PageSize,

    /// Page margins
    pub margins: Margins,

    /// Document title written to the PDF metadata
    pub title: Option<String>,

    /// Document author written to the PDF metadata
    pub author: Option<String>,

    /// Creation date; `None` omits it for reproducible output
    pub creation_date: Option<DateTime<Utc>>,

    /// Write an outline entry for each bookmark flowable
    pub bookmarks: bool,

    /// Compress page content streams
    pub compress: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author metadata.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set or clear the creation date.
    pub fn with_creation_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.creation_date = date;
        self
    }

    /// Enable or disable outline bookmarks.
    pub fn with_bookmarks(mut self, enabled: bool) -> Self {
        self.bookmarks = enabled;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    /// Usable frame width between the side margins.
    pub fn frame_width(&self) -> f32 {
        let (width, _) = self.page_size.dimensions();
        width - self.margins.left - self.margins.right
    }

    /// Usable frame height between the top and bottom margins.
    pub fn frame_height(&self) -> f32 {
        let (_, height) = self.page_size.dimensions();
        height - self.margins.top - self.margins.bottom
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margins: Margins::default(),
            title: None,
            author: None,
            creation_date: Some(Utc::now()),
            bookmarks: true,
            compress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_page_size(PageSize::A4)
            .with_title("Kit")
            .with_creation_date(None)
            .with_bookmarks(false);

        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.title.as_deref(), Some("Kit"));
        assert!(options.creation_date.is_none());
        assert!(!options.bookmarks);
        assert!(options.compress);
    }

    #[test]
    fn test_frame_dimensions() {
        let options = RenderOptions::default();
        assert_eq!(options.frame_width(), 468.0);
        assert_eq!(options.frame_height(), 648.0);

        let options = options.with_margins(Margins::uniform(36.0));
        assert_eq!(options.frame_width(), 540.0);
    }

    #[test]
    fn test_page_size_dimensions() {
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(PageSize::Custom(100.0, 200.0).dimensions(), (100.0, 200.0));
    }
}
