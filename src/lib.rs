//! # docsense
//!
//! PDF outline extraction and persona-driven relevance ranking.
//!
//! Two independent pipelines share a text-span source:
//!
//! - **Outline extraction** maps raw text spans to heading tiers by
//!   font-size heuristics and produces an ordered, de-duplicated outline
//!   per document.
//! - **Relevance ranking** scores every page of a document batch against a
//!   persona/job pair and returns the sections that clear a fixed
//!   threshold, ranked by score. Scoring uses a zero-shot classification
//!   model when available and degrades to keyword matching otherwise.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsense::{analyze_documents, extract_outline, to_json, JsonFormat};
//!
//! fn main() -> docsense::Result<()> {
//!     // Heading outline of one document
//!     let outline = extract_outline("paper.pdf")?;
//!     println!("{}", to_json(&outline, JsonFormat::Pretty)?);
//!
//!     // Persona-driven ranking over a directory
//!     let result = analyze_documents(
//!         "input/",
//!         "PhD Researcher",
//!         "Prepare a literature review",
//!     )?;
//!     println!("{} relevant sections", result.metadata.total_sections);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod json;
pub mod model;
pub mod outline;
pub mod rank;
pub mod score;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use json::{to_json, write_json_file, JsonFormat};
pub use model::{
    AnalysisMetadata, AnalysisResult, DocumentOutline, FontThresholds, HeadingEntry, HeadingLevel,
    OutlineMetadata, PageRecord, ScoredSection, ScoredSubsection, RELEVANCE_THRESHOLD,
};
pub use outline::{extract_outline, process_outlines};
pub use rank::DocumentAnalyzer;
#[cfg(feature = "zero-shot")]
pub use score::ZeroShotScorer;
pub use score::{KeywordScorer, RelevanceScorer, METHOD_KEYWORD, METHOD_ZERO_SHOT};
pub use source::{PdfSource, SpanSource, TextLine, TextSpan};

use std::path::Path;

/// Analyze a directory of PDFs with a freshly selected scorer.
///
/// Convenience wrapper over [`DocumentAnalyzer`]; use the struct directly
/// to reuse one scorer across calls.
pub fn analyze_documents<P: AsRef<Path>>(
    input_dir: P,
    persona: &str,
    job: &str,
) -> Result<AnalysisResult> {
    DocumentAnalyzer::new().analyze_documents(input_dir, persona, job)
}
