//! Structured outline extraction using font-size heuristics.
//!
//! Only the first span of each text line is inspected: its font size and
//! weight decide the heading tier. This deliberately ignores rendering
//! geometry beyond sequential span order, for parity with downstream
//! consumers of the output format.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::json::write_json_file;
use crate::model::{DocumentOutline, HeadingEntry, HeadingLevel, OutlineMetadata};
use crate::source::{list_pdf_files, PdfSource, SpanSource};

/// Minimum trimmed length for a span to be considered a heading.
const MIN_HEADING_CHARS: usize = 3;

/// Extract the heading outline of a single PDF.
///
/// Fails with [`Error::Extraction`] when the file cannot be opened or
/// parsed. A document with no qualifying headings yields an outline with an
/// empty entry list, not an error.
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    let path = path.as_ref();
    let fallback_title = file_stem(path);

    let run = || -> Result<DocumentOutline> {
        let source = PdfSource::open(path)?;
        extract_from_source(&source, &fallback_title)
    };

    run().map_err(|e| match e {
        e @ Error::Extraction(_) => e,
        other => Error::Extraction(other.to_string()),
    })
}

/// Build an outline from any span source.
///
/// `fallback_title` is used when the document declares no metadata title.
pub fn extract_from_source(
    source: &dyn SpanSource,
    fallback_title: &str,
) -> Result<DocumentOutline> {
    let title = source
        .metadata_title()
        .unwrap_or_else(|| fallback_title.to_string());

    let total_pages = source.page_count();
    let mut entries = Vec::new();

    for page in 1..=total_pages {
        for line in source.page_lines(page)? {
            let Some(span) = line.first_span() else {
                continue;
            };
            let text = span.text.trim();
            if text.chars().count() < MIN_HEADING_CHARS {
                continue;
            }
            if let Some(level) = HeadingLevel::classify(span.font_size, span.is_bold) {
                entries.push(HeadingEntry {
                    level,
                    text: text.to_string(),
                    page,
                    font_size: round2(span.font_size),
                    is_bold: span.is_bold,
                });
            }
        }
    }

    let entries = dedup_entries(entries);
    log::info!(
        "Extracted {} headings from {} pages",
        entries.len(),
        total_pages
    );

    Ok(DocumentOutline {
        title,
        outline: entries,
        total_pages,
        metadata: OutlineMetadata::default(),
    })
}

/// Extract outlines for every PDF in `input_dir`, writing one
/// `<stem>_outline.json` per document into `output_dir`.
///
/// Per-document failures are logged and skipped; an empty input directory
/// is a warning, not an error.
pub fn process_outlines<P: AsRef<Path>, Q: AsRef<Path>>(input_dir: P, output_dir: Q) -> Result<()> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let pdf_files = list_pdf_files(input_dir.as_ref())?;
    if pdf_files.is_empty() {
        log::warn!("No PDF files found in {}", input_dir.as_ref().display());
        return Ok(());
    }

    for path in pdf_files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let output_name = format!("{}_outline.json", file_stem(&path));
        let written = extract_outline(&path)
            .and_then(|outline| write_json_file(&outline, output_dir.join(&output_name)));
        match written {
            Ok(()) => log::info!("Processed {} -> {}", file_name, output_name),
            Err(e) => {
                log::error!("Failed to process {}: {}", file_name, e);
                continue;
            }
        }
    }

    Ok(())
}

/// Drop repeated (level, text, page) triples, keeping first occurrences
/// in order.
fn dedup_entries(entries: Vec<HeadingEntry>) -> Vec<HeadingEntry> {
    let mut seen: HashSet<(HeadingLevel, String, u32)> = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert((e.level, e.text.clone(), e.page)))
        .collect()
}

/// File name with the `.pdf` suffix stripped.
fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".pdf").unwrap_or(&name).to_string()
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
