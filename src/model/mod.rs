//! Document model types for booklet assembly.
//!
//! This module defines the intermediate representations between raw
//! Markdown sources and the rendered PDF: the per-document layout blocks
//! produced by the translator, the source documents and plan that drive
//! assembly, and the styled flowables handed to the renderer.

mod block;
mod flowable;
mod source;

pub use block::{HeadingStyle, LayoutBlock};
pub use flowable::{Flowable, StyleName, BLANK_LINE_SPACE};
pub use source::{DocumentPlan, SourceDocument, GTM_KIT_FILES, GTM_KIT_OUTPUT};
