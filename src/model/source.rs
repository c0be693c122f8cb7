//! Source documents and the ordered plan that drives assembly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::markdown::title_from_text;

/// A Markdown source read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Path the document was read from
    pub path: PathBuf,

    /// Title from the first heading line, or the file stem
    pub title: String,

    /// Raw body text
    pub body: String,
}

impl SourceDocument {
    /// Read a source document, deriving its title.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, body))
    }

    /// Build a source document from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        let path = path.into();
        let body = body.into();
        let title = title_from_text(&body, &path);
        Self { path, title, body }
    }
}

/// Fixed ordered list of source documents.
///
/// Insertion order is print order for both the table of contents and the
/// body sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPlan {
    /// Directory the file names are resolved against
    pub docs_dir: PathBuf,

    /// File names relative to `docs_dir`, in print order
    pub files: Vec<String>,
}

/// Files of the go-to-market execution kit, in print order.
pub const GTM_KIT_FILES: &[&str] = &[
    "README.md",
    "STEP_1_EXTERNALIZE_AER_STANDARD.md",
    "AER_STANDARD_OVERVIEW.md",
    "AER_CONFORMANCE_CHECKLIST.md",
    "STEP_2_UR_REALITY_CHECK.md",
    "AER_UR_REVIEWER_PACKET.md",
    "UR_REALITY_CHECK_SCRIPT.md",
    "UR_FEEDBACK_FORM.md",
    "STEP_3_DISTRIBUTION_PILOT.md",
    "PILOT_30_DAY_PLAN.md",
    "PILOT_SUCCESS_METRICS.md",
    "PILOT_EMAIL_TEMPLATES.md",
    "AER_AUDIT_SUBMISSION_EXAMPLE.md",
];

/// File name of the compiled booklet.
pub const GTM_KIT_OUTPUT: &str = "AER_GTM_Kit.pdf";

impl DocumentPlan {
    /// Create a plan over the given directory and file names.
    pub fn new<I, S>(docs_dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            docs_dir: docs_dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// The go-to-market kit plan rooted at a repository root.
    pub fn gtm_kit(root: impl AsRef<Path>) -> Self {
        Self::new(
            root.as_ref().join("docs").join("go-to-market"),
            GTM_KIT_FILES.iter().copied(),
        )
    }

    /// Fixed output location: `out/` under the docs directory.
    pub fn output_path(&self) -> PathBuf {
        self.docs_dir.join("out").join(GTM_KIT_OUTPUT)
    }

    /// Resolved source paths, in print order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.docs_dir.join(f)).collect()
    }

    /// Number of documents in the plan.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the plan has no documents.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Read every document in order.
    ///
    /// Each file is read fully and closed before the next one is opened.
    pub fn read_all(&self) -> Result<Vec<SourceDocument>> {
        self.paths()
            .iter()
            .map(|path| {
                log::debug!("Reading {}", path.display());
                SourceDocument::read(path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtm_kit_plan() {
        let plan = DocumentPlan::gtm_kit("/repo");
        assert_eq!(plan.len(), 13);
        assert_eq!(plan.docs_dir, PathBuf::from("/repo/docs/go-to-market"));

        let paths = plan.paths();
        assert_eq!(paths[0], PathBuf::from("/repo/docs/go-to-market/README.md"));
        assert_eq!(
            paths[12],
            PathBuf::from("/repo/docs/go-to-market/AER_AUDIT_SUBMISSION_EXAMPLE.md")
        );
        assert_eq!(
            plan.output_path(),
            PathBuf::from("/repo/docs/go-to-market/out/AER_GTM_Kit.pdf")
        );
    }

    #[test]
    fn test_source_from_text_title() {
        let doc = SourceDocument::from_text("notes/PLAN.md", "intro\n## The Plan\nbody");
        assert_eq!(doc.title, "The Plan");

        let doc = SourceDocument::from_text("notes/PLAN.md", "no heading here");
        assert_eq!(doc.title, "PLAN");
    }

    #[test]
    fn test_read_carriage_return_only_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("OLD_MAC.md");
        fs::write(&path, "preface\r# Classic Title\rbody").unwrap();

        let doc = SourceDocument::read(&path).unwrap();
        assert_eq!(doc.title, "Classic Title");
    }

    #[test]
    fn test_read_missing_file() {
        let result = SourceDocument::read("/nonexistent/gtmkit/missing.md");
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn test_empty_plan() {
        let plan = DocumentPlan::default();
        assert!(plan.is_empty());
        assert!(plan.read_all().unwrap().is_empty());
    }
}
