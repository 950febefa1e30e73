//! Text-span source boundary.
//!
//! Both pipelines consume per-page text through the [`SpanSource`] trait,
//! which keeps the concrete PDF library behind one seam. [`PdfSource`] is
//! the lopdf-backed implementation; tests drive the pipelines with
//! in-memory sources instead.

mod pdf;

pub use pdf::PdfSource;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A contiguous run of text sharing one font size and style, as reported
/// by the PDF text layer.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Whether the font appears to be bold
    pub is_bold: bool,
}

impl TextSpan {
    /// Create a span, deriving the bold flag from the font name.
    pub fn new(text: impl Into<String>, font_size: f32, font_name: &str) -> Self {
        let lower = font_name.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        Self {
            text: text.into(),
            font_size,
            is_bold,
        }
    }
}

/// A line of text composed of one or more spans in reading order.
#[derive(Debug, Clone, Default)]
pub struct TextLine {
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    pub fn from_spans(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// The first span of the line. Heading classification inspects only
    /// this span.
    pub fn first_span(&self) -> Option<&TextSpan> {
        self.spans.first()
    }

    /// Combined text of all spans.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Abstract access to one document's text content.
///
/// Pages are 1-indexed throughout.
pub trait SpanSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Title declared in the document metadata, if any.
    fn metadata_title(&self) -> Option<String>;

    /// Text lines of a page in natural reading order.
    fn page_lines(&self, page_number: u32) -> Result<Vec<TextLine>>;

    /// Full plain text of a page.
    fn page_text(&self, page_number: u32) -> Result<String>;
}

/// List the PDF files in a directory, in directory listing order.
///
/// Matches the `.pdf` extension case-insensitively; non-files are ignored.
pub fn list_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            files.push(path);
        }
    }
    Ok(files)
}
