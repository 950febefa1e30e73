//! Error types for docsense.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsense operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction and relevance analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Outline extraction cannot proceed for a document.
    #[error("PDF outline extraction failed: {0}")]
    Extraction(String),

    /// The analysis input directory holds no PDF files.
    #[error("No PDF files found in {}", .0.display())]
    NoDocuments(PathBuf),

    /// A required caller-supplied value is missing or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model-based scorer failed to initialize or score.
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// Error serializing results.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
