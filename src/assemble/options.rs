//! Booklet options.

use crate::render::{PageSize, RenderOptions};

/// Default cover title.
pub const DEFAULT_TITLE: &str = "AER Go-To-Market Execution Kit";

/// Default cover subtitle.
pub const DEFAULT_SUBTITLE: &str = "Compiled documentation bundle";

/// Default document title metadata.
pub const DEFAULT_METADATA_TITLE: &str = "AER GTM Kit";

/// Heading of the table of contents page.
pub const TOC_HEADING: &str = "Table of Contents";

/// Options for assembling a booklet.
#[derive(Debug, Clone)]
pub struct BookletOptions {
    /// Centered title on the cover page
    pub title: String,

    /// Line below the cover title
    pub subtitle: String,

    /// Heading of the table of contents page
    pub toc_heading: String,

    /// Options passed to the PDF renderer
    pub render: RenderOptions,
}

impl BookletOptions {
    /// Create new booklet options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cover title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the render options.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            toc_heading: TOC_HEADING.to_string(),
            render: RenderOptions::new()
                .with_page_size(PageSize::Letter)
                .with_title(DEFAULT_METADATA_TITLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BookletOptions::default();
        assert_eq!(options.title, "AER Go-To-Market Execution Kit");
        assert_eq!(options.subtitle, "Compiled documentation bundle");
        assert_eq!(options.render.title.as_deref(), Some("AER GTM Kit"));
        assert_eq!(options.render.page_size, PageSize::Letter);
    }

    #[test]
    fn test_builder() {
        let options = BookletOptions::new()
            .with_title("Handbook")
            .with_subtitle("Internal");
        assert_eq!(options.title, "Handbook");
        assert_eq!(options.subtitle, "Internal");
    }
}
