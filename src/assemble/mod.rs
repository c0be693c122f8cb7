//! Booklet assembly.
//!
//! Reads the document plan, builds the cover and table of contents from the
//! document titles, appends each document's translated blocks, and renders
//! the whole sequence to a single PDF.
//!
//! # Example
//!
//! ```no_run
//! use gtmkit::assemble::{Assembler, BookletOptions};
//! use gtmkit::DocumentPlan;
//!
//! fn main() -> gtmkit::Result<()> {
//!     let plan = DocumentPlan::gtm_kit(".");
//!     let output = plan.output_path();
//!     let report = Assembler::new(plan, BookletOptions::default()).build(&output)?;
//!     println!("Wrote {} ({} pages)", report.output.display(), report.page_count);
//!     Ok(())
//! }
//! ```

mod options;

pub use options::{
    BookletOptions, DEFAULT_METADATA_TITLE, DEFAULT_SUBTITLE, DEFAULT_TITLE, TOC_HEADING,
};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::markdown::{escape, translate};
use crate::model::{DocumentPlan, Flowable, SourceDocument, StyleName};
use crate::render::{layout, PdfWriter, StyleSheet};

/// Space above the cover title, in points.
const COVER_TOP_SPACE: f32 = 120.0;

/// Space between the cover title and subtitle, in points.
const COVER_GAP: f32 = 12.0;

/// Space below each section heading, in points.
const SECTION_HEADING_GAP: f32 = 6.0;

/// Summary of a completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Path the PDF was written to
    pub output: PathBuf,

    /// Document titles in print order
    pub titles: Vec<String>,

    /// Number of pages in the PDF
    pub page_count: usize,

    /// Size of the PDF in bytes
    pub bytes_written: usize,
}

/// Assembles a document plan into a booklet.
#[derive(Debug, Clone)]
pub struct Assembler {
    plan: DocumentPlan,
    options: BookletOptions,
}

impl Assembler {
    /// Create an assembler for a plan.
    pub fn new(plan: DocumentPlan, options: BookletOptions) -> Self {
        Self { plan, options }
    }

    /// The plan being assembled.
    pub fn plan(&self) -> &DocumentPlan {
        &self.plan
    }

    /// The booklet options.
    pub fn options(&self) -> &BookletOptions {
        &self.options
    }

    /// Read all source documents in plan order.
    pub fn read_sources(&self) -> Result<Vec<SourceDocument>> {
        self.plan.read_all()
    }

    /// Read the sources and build the complete flowable sequence.
    pub fn assemble(&self) -> Result<Vec<Flowable>> {
        let sources = self.read_sources()?;
        Ok(self.assemble_sources(&sources))
    }

    /// Build the complete flowable sequence from sources already read.
    pub fn assemble_sources(&self, sources: &[SourceDocument]) -> Vec<Flowable> {
        let mut flowables = title_page(&self.options);
        flowables.extend(table_of_contents(&self.options.toc_heading, sources));
        for source in sources {
            flowables.extend(section(source));
        }
        flowables
    }

    /// Assemble and render the booklet to `output`, overwriting it.
    ///
    /// Missing parent directories are created first.
    pub fn build<P: AsRef<Path>>(&self, output: P) -> Result<BuildReport> {
        let output = output.as_ref();
        let sources = self.read_sources()?;
        let flowables = self.assemble_sources(&sources);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let render = &self.options.render;
        let laid_out = layout(&flowables, &StyleSheet::booklet(), render)?;
        let bytes = PdfWriter::new(render.clone()).write(&laid_out)?;
        fs::write(output, &bytes)?;

        log::info!(
            "Wrote {} ({} documents, {} pages)",
            output.display(),
            sources.len(),
            laid_out.page_count()
        );

        Ok(BuildReport {
            output: output.to_path_buf(),
            titles: sources.into_iter().map(|s| s.title).collect(),
            page_count: laid_out.page_count(),
            bytes_written: bytes.len(),
        })
    }
}

/// Cover page: spaced, centered title, subtitle, page break.
pub fn title_page(options: &BookletOptions) -> Vec<Flowable> {
    vec![
        Flowable::spacer(COVER_TOP_SPACE),
        Flowable::paragraph(escape(&options.title), StyleName::TitlePage),
        Flowable::spacer(COVER_GAP),
        Flowable::paragraph(escape(&options.subtitle), StyleName::Body),
        Flowable::PageBreak,
    ]
}

/// Table of contents: heading, one numbered line per document, page break.
pub fn table_of_contents(heading: &str, sources: &[SourceDocument]) -> Vec<Flowable> {
    let mut flowables = Vec::with_capacity(sources.len() + 2);
    flowables.push(Flowable::paragraph(escape(heading), StyleName::Heading1));
    for (idx, source) in sources.iter().enumerate() {
        flowables.push(Flowable::paragraph(
            format!("{}. {}", idx + 1, escape(&source.title)),
            StyleName::Body,
        ));
    }
    flowables.push(Flowable::PageBreak);
    flowables
}

/// One document's section: bookmark, heading, spacer, body, page break.
pub fn section(source: &SourceDocument) -> Vec<Flowable> {
    let blocks = translate(&source.body);
    log::debug!(
        "Translated {} into {} blocks",
        source.path.display(),
        blocks.len()
    );

    let mut flowables = Vec::with_capacity(blocks.len() + 4);
    flowables.push(Flowable::Bookmark {
        title: source.title.clone(),
    });
    flowables.push(Flowable::paragraph(
        escape(&source.title),
        StyleName::Heading1,
    ));
    flowables.push(Flowable::spacer(SECTION_HEADING_GAP));
    flowables.extend(blocks.iter().map(Flowable::from));
    flowables.push(Flowable::PageBreak);
    flowables
}
