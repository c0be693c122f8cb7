//! Restricted Markdown translation.
//!
//! Converts one document's raw text into an ordered sequence of
//! [`LayoutBlock`](crate::model::LayoutBlock)s. The supported subset is
//! deliberately small: fenced code regions, blank lines, `#` headings,
//! `-`/`*` bullet lines and plain paragraphs, with inline code spans as
//! the only inline formatting.

mod inline;
mod translator;

pub use inline::{escape, format_inline, MONO_CLOSE, MONO_OPEN};
pub use translator::{title_from_text, translate, Translator};
