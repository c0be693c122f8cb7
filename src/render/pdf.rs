//! PDF serialization using lopdf.

use std::io::Write;

use chrono::{DateTime, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, ObjectId, Stream, StringFormat};

use crate::error::{Error, Result};
use crate::model::Flowable;

use super::fonts::{encode_win_ansi, Font};
use super::layout::{layout, BookmarkTarget, DrawOp, LaidOutPage, Layout};
use super::options::RenderOptions;
use super::styles::StyleSheet;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = concat!("gtmkit ", env!("CARGO_PKG_VERSION"));

/// Render flowables to PDF bytes with the booklet stylesheet.
pub fn render_pdf(flowables: &[Flowable], options: &RenderOptions) -> Result<Vec<u8>> {
    let sheet = StyleSheet::booklet();
    let laid_out = layout(flowables, &sheet, options)?;
    PdfWriter::new(options.clone()).write(&laid_out)
}

/// Writes laid-out pages as a PDF document.
pub struct PdfWriter {
    options: RenderOptions,
}

impl PdfWriter {
    /// Create a new writer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Serialize a layout to PDF bytes.
    pub fn write(&self, laid_out: &Layout) -> Result<Vec<u8>> {
        if laid_out.pages.is_empty() {
            return Err(Error::Render("Layout has no pages".to_string()));
        }
        let mut doc = LopdfDocument::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let (width, height) = self.options.page_size.dimensions();
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(laid_out.pages.len());
        for page in &laid_out.pages {
            let content_id = doc.add_object(self.content_stream(page)?);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id);
        }
        log::debug!("Wrote {} page objects", page_ids.len());

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if self.options.bookmarks && !laid_out.bookmarks.is_empty() {
            let outlines_id = write_outline(&mut doc, &laid_out.bookmarks, &page_ids);
            catalog.set("Outlines", outlines_id);
            catalog.set("PageMode", "UseOutlines");
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(self.info_dictionary());
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Producer" => text_string(PRODUCER),
        };
        if let Some(ref title) = self.options.title {
            info.set("Title", text_string(title));
        }
        if let Some(ref author) = self.options.author {
            info.set("Author", text_string(author));
        }
        if let Some(date) = self.options.creation_date {
            info.set("CreationDate", text_string(&pdf_date(&date)));
        }
        info
    }

    fn content_stream(&self, page: &LaidOutPage) -> Result<Stream> {
        let content = Content {
            operations: page_operations(page),
        };
        let data = content
            .encode()
            .map_err(|e| Error::Pdf(format!("Content encoding failed: {}", e)))?;

        if !self.options.compress {
            return Ok(Stream::new(Dictionary::new(), data));
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&data)?;
        let compressed = encoder.finish()?;
        let dict = dictionary! {
            "Filter" => "FlateDecode",
        };
        Ok(Stream::new(dict, compressed).with_compression(false))
    }
}

fn page_operations(page: &LaidOutPage) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                gray,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("g", vec![Object::Real(*gray)]));
                ops.push(Operation::new(
                    "re",
                    vec![
                        Object::Real(*x),
                        Object::Real(*y),
                        Object::Real(*width),
                        Object::Real(*height),
                    ],
                ));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::Text {
                x,
                y,
                font,
                size,
                text,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), Object::Real(*size)],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![Object::Real(*x), Object::Real(*y)],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }
    ops
}

/// Write a flat outline and return the outline dictionary id.
fn write_outline(
    doc: &mut LopdfDocument,
    bookmarks: &[BookmarkTarget],
    page_ids: &[ObjectId],
) -> ObjectId {
    let outlines_id = doc.new_object_id();
    let item_ids: Vec<ObjectId> = bookmarks.iter().map(|_| doc.new_object_id()).collect();

    for (i, bookmark) in bookmarks.iter().enumerate() {
        let page_id = page_ids[bookmark.page_index.min(page_ids.len() - 1)];
        let mut item = dictionary! {
            "Title" => text_string(&bookmark.title),
            "Parent" => outlines_id,
            "Dest" => vec![Object::Reference(page_id), "Fit".into()],
        };
        if i > 0 {
            item.set("Prev", item_ids[i - 1]);
        }
        if i + 1 < item_ids.len() {
            item.set("Next", item_ids[i + 1]);
        }
        doc.objects.insert(item_ids[i], Object::Dictionary(item));
    }

    let mut outlines = dictionary! {
        "Type" => "Outlines",
        "Count" => item_ids.len() as i64,
    };
    if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
        outlines.set("First", *first);
        outlines.set("Last", *last);
    }
    doc.objects.insert(outlines_id, Object::Dictionary(outlines));
    outlines_id
}

/// Encode a text string for the document information dictionary.
///
/// ASCII stays PDFDocEncoding; anything else is written as UTF-16BE with a
/// byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Format a date as a PDF date string (`D:YYYYMMDDHHmmSSZ`).
fn pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%SZ").to_string()
}
