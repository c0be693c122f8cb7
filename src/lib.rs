//! # gtmkit
//!
//! Compiles an ordered set of Markdown documents into a single printable
//! PDF booklet.
//!
//! The booklet has a cover page, a table of contents built from each
//! document's first heading, and one section per document. Markdown is
//! translated line by line into a small set of layout blocks (headings,
//! paragraphs, bullets, code blocks and spacers) which are then laid out
//! on Letter pages with the standard PDF fonts.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> gtmkit::Result<()> {
//!     // Reads docs/go-to-market/*.md and writes
//!     // docs/go-to-market/out/AER_GTM_Kit.pdf
//!     let report = gtmkit::build_gtm_kit(".")?;
//!     println!("Wrote {} ({} pages)", report.output.display(), report.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line-oriented Markdown**: headings, bullets, fenced code, inline code
//! - **Table of contents**: numbered titles in print order
//! - **Bookmarks**: one PDF outline entry per document
//! - **Inspection**: plain-text and JSON dumps of the render sequence

pub mod assemble;
pub mod error;
pub mod markdown;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use assemble::{Assembler, BookletOptions, BuildReport};
pub use error::{Error, Result};
pub use model::{
    DocumentPlan, Flowable, HeadingStyle, LayoutBlock, SourceDocument, StyleName, GTM_KIT_FILES,
};
pub use render::{JsonFormat, Margins, PageSize, RenderOptions};

use std::path::Path;

/// Build the go-to-market kit booklet under a repository root.
///
/// Sources are read from `<root>/docs/go-to-market/` and the PDF is
/// written to `<root>/docs/go-to-market/out/AER_GTM_Kit.pdf`.
///
/// # Example
///
/// ```no_run
/// let report = gtmkit::build_gtm_kit("/path/to/repo").unwrap();
/// assert_eq!(report.titles.len(), 13);
/// ```
pub fn build_gtm_kit<P: AsRef<Path>>(root: P) -> Result<BuildReport> {
    let plan = DocumentPlan::gtm_kit(root);
    let output = plan.output_path();
    build(plan, output, BookletOptions::default())
}

/// Build a booklet from any plan to any output path.
///
/// # Example
///
/// ```no_run
/// use gtmkit::{build, BookletOptions, DocumentPlan};
///
/// let plan = DocumentPlan::new("notes", ["intro.md", "usage.md"]);
/// let options = BookletOptions::new().with_title("Notes");
/// build(plan, "notes.pdf", options)?;
/// # Ok::<(), gtmkit::Error>(())
/// ```
pub fn build<P: AsRef<Path>>(
    plan: DocumentPlan,
    output: P,
    options: BookletOptions,
) -> Result<BuildReport> {
    Assembler::new(plan, options).build(output)
}

/// Titles of the plan's documents in print order.
pub fn titles(plan: &DocumentPlan) -> Result<Vec<String>> {
    Ok(plan.read_all()?.into_iter().map(|doc| doc.title).collect())
}

/// Assemble a plan and dump its render sequence as plain text.
pub fn to_text(plan: DocumentPlan, options: BookletOptions) -> Result<String> {
    let flowables = Assembler::new(plan, options).assemble()?;
    Ok(render::to_text(&flowables))
}

/// Assemble a plan and dump its render sequence as JSON.
pub fn to_json(plan: DocumentPlan, options: BookletOptions, format: JsonFormat) -> Result<String> {
    let flowables = Assembler::new(plan, options).assemble()?;
    render::to_json(&flowables, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(files: &[(&str, &str)]) -> (TempDir, DocumentPlan) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let plan = DocumentPlan::new(dir.path(), files.iter().map(|(name, _)| *name));
        (dir, plan)
    }

    #[test]
    fn test_titles_in_plan_order() {
        let (_dir, plan) = fixture(&[("b.md", "# Bravo"), ("a.md", "text only")]);
        assert_eq!(titles(&plan).unwrap(), vec!["Bravo", "a"]);
    }

    #[test]
    fn test_to_text_is_stable() {
        let (_dir, plan) = fixture(&[("one.md", "# One\n\n- item\n")]);
        let first = to_text(plan.clone(), BookletOptions::default()).unwrap();
        let second = to_text(plan, BookletOptions::default()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("1. One"));
        assert!(first.contains("* item"));
    }

    #[test]
    fn test_to_json_compact() {
        let (_dir, plan) = fixture(&[("one.md", "# One")]);
        let json = to_json(plan, BookletOptions::default(), JsonFormat::Compact).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"type\":\"bookmark\""));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_build_missing_source() {
        let dir = TempDir::new().unwrap();
        let result = build_gtm_kit(dir.path());
        assert!(matches!(result, Err(Error::Read { .. })));
        assert!(!dir.path().join("docs/go-to-market/out").exists());
    }
}
