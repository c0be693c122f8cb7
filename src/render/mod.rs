//! Rendering module for turning flowables into PDF and inspection formats.

pub mod fonts;
mod json;
pub mod layout;
pub mod markup;
mod options;
mod pdf;
mod styles;
mod text;

pub use fonts::{encode_win_ansi, Font};
pub use json::{to_json, JsonFormat};
pub use layout::{layout, BookmarkTarget, DrawOp, LaidOutPage, Layout};
pub use markup::{markup_text, parse_markup, Span};
pub use options::{Margins, PageSize, RenderOptions};
pub use pdf::{render_pdf, PdfWriter};
pub use styles::{Alignment, ParagraphStyle, StyleSheet};
pub use text::{to_text, PAGE_BREAK_MARKER};
