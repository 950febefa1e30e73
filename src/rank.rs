//! Persona-driven relevance ranking over a directory of PDFs.
//!
//! Each page with enough text becomes a [`PageRecord`], is scored against
//! the job description, and — above the threshold — contributes one section
//! and one subsection to the final result. Documents are processed strictly
//! one at a time; a document that fails to open is skipped, not fatal.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{
    AnalysisResult, PageRecord, ScoredSection, ScoredSubsection, RELEVANCE_THRESHOLD,
};
use crate::score::{select_scorer, truncate_chars, KeywordScorer, RelevanceScorer};
use crate::source::{list_pdf_files, PdfSource, SpanSource};

/// Pages with less trimmed text than this never enter scoring.
const MIN_PAGE_CHARS: usize = 50;

/// Subsection excerpts are cut at this many characters.
const MAX_REFINED_CHARS: usize = 500;

/// Line prefixes that disqualify a line from being a section title.
const TITLE_SKIP_PREFIXES: [&str; 4] = ["Figure", "Table", "Page", "Copyright"];

/// Ranks page sections of a document batch by relevance to a persona/job
/// pair, using one scorer strategy per analyzer.
pub struct DocumentAnalyzer {
    scorer: Box<dyn RelevanceScorer>,
    fallback: KeywordScorer,
}

impl DocumentAnalyzer {
    /// Capability detection: the model-based scorer when its model loads,
    /// the keyword fallback otherwise.
    pub fn new() -> Self {
        Self::with_scorer(select_scorer())
    }

    /// Use a specific scorer (tests, callers holding a pre-loaded model).
    pub fn with_scorer(scorer: Box<dyn RelevanceScorer>) -> Self {
        Self {
            scorer,
            fallback: KeywordScorer,
        }
    }

    /// The method label this analyzer records in result metadata.
    pub fn method(&self) -> &'static str {
        self.scorer.method()
    }

    /// Analyze every PDF in `input_dir` for relevance to the persona/job.
    ///
    /// Fails with [`Error::NoDocuments`] when the directory holds no PDFs
    /// and [`Error::InvalidInput`] when persona or job is blank. A document
    /// that cannot be opened or read is logged and skipped.
    pub fn analyze_documents<P: AsRef<Path>>(
        &self,
        input_dir: P,
        persona: &str,
        job: &str,
    ) -> Result<AnalysisResult> {
        let input_dir = input_dir.as_ref();
        if persona.trim().is_empty() {
            return Err(Error::InvalidInput("persona must not be empty".to_string()));
        }
        if job.trim().is_empty() {
            return Err(Error::InvalidInput("job must not be empty".to_string()));
        }

        let pdf_files = list_pdf_files(input_dir)?;
        if pdf_files.is_empty() {
            return Err(Error::NoDocuments(input_dir.to_path_buf()));
        }

        let mut result = AnalysisResult::new(persona, job, self.scorer.method());

        for path in pdf_files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let source = match PdfSource::open(&path) {
                Ok(source) => source,
                Err(e) => {
                    log::error!("Error processing {}: {}", file_name, e);
                    continue;
                }
            };

            result.metadata.documents.push(file_name.clone());
            log::info!("Analyzing {} ({} pages)", file_name, source.page_count());

            // A page failure aborts the rest of this document, but rows
            // already collected from its earlier pages are kept.
            let mut rows = Vec::new();
            if let Err(e) = self.collect_rows(&source, &file_name, job, &mut rows) {
                log::error!("Error processing {}: {}", file_name, e);
            }
            for (section, subsection) in rows {
                result.sections.push(section);
                result.subsections.push(subsection);
            }
        }

        result.finalize();
        log::info!(
            "Analysis complete. Found {} relevant sections.",
            result.sections.len()
        );
        Ok(result)
    }

    /// Score every qualifying page of one document, returning the
    /// section/subsection pairs that cleared the threshold.
    pub fn analyze_source(
        &self,
        source: &dyn SpanSource,
        document: &str,
        job: &str,
    ) -> Result<Vec<(ScoredSection, ScoredSubsection)>> {
        let mut rows = Vec::new();
        self.collect_rows(source, document, job, &mut rows)?;
        Ok(rows)
    }

    /// Page loop shared by [`Self::analyze_source`] and the directory walk.
    ///
    /// Pushes into `rows` as pages clear the threshold, so the caller keeps
    /// everything collected before a page error.
    fn collect_rows(
        &self,
        source: &dyn SpanSource,
        document: &str,
        job: &str,
        rows: &mut Vec<(ScoredSection, ScoredSubsection)>,
    ) -> Result<()> {
        for page_number in 1..=source.page_count() {
            let text = source.page_text(page_number)?;
            let text = text.trim();
            if text.chars().count() < MIN_PAGE_CHARS {
                continue;
            }

            let record = PageRecord {
                document: document.to_string(),
                page_number,
                text: text.to_string(),
            };

            let score = self.score_page(&record, job);
            if score > RELEVANCE_THRESHOLD {
                rows.push(emit(&record, score));
            }
        }

        Ok(())
    }

    /// Score one page. A model-scorer failure falls back to the keyword
    /// formula for this page only.
    fn score_page(&self, record: &PageRecord, job: &str) -> f64 {
        match self.scorer.score(&record.text, job) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Classifier error on page {}: {}", record.page_number, e);
                self.fallback
                    .score(&record.text, job)
                    .unwrap_or_default()
            }
        }
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the paired section/subsection for a page that cleared the
/// threshold.
fn emit(record: &PageRecord, score: f64) -> (ScoredSection, ScoredSubsection) {
    let rounded = round3(score);
    let section = ScoredSection {
        document: record.document.clone(),
        page_number: record.page_number,
        section_title: extract_section_title(&record.text),
        importance_rank: rounded,
        text_length: record.text.chars().count(),
    };
    let subsection = ScoredSubsection {
        document: record.document.clone(),
        page_number: record.page_number,
        refined_text: refine_text(&record.text),
        relevance_score: rounded,
    };
    (section, subsection)
}

/// Pick a section title: the first trimmed line whose length is strictly
/// between 5 and 99 characters and which is not a figure/table/page/
/// copyright caption. Falls back to the first 50 characters of the text.
fn extract_section_title(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        let len = line.chars().count();
        if len > 5
            && len < 100
            && !TITLE_SKIP_PREFIXES.iter().any(|p| line.starts_with(p))
        {
            return line.to_string();
        }
    }

    if text.chars().count() > 50 {
        format!("{}...", truncate_chars(text, 50).trim())
    } else {
        text.trim().to_string()
    }
}

/// Cut page text down to the subsection excerpt.
fn refine_text(text: &str) -> String {
    if text.chars().count() > MAX_REFINED_CHARS {
        format!("{}...", truncate_chars(text, MAX_REFINED_CHARS))
    } else {
        text.to_string()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
