//! Integration tests for the outline extraction pipeline.

use docsense::error::Result;
use docsense::outline::extract_from_source;
use docsense::{
    extract_outline, to_json, HeadingLevel, JsonFormat, SpanSource, TextLine, TextSpan,
};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// In-memory span source with fixed lines per page.
struct MockSource {
    title: Option<String>,
    pages: Vec<Vec<TextLine>>,
}

impl SpanSource for MockSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn metadata_title(&self) -> Option<String> {
        self.title.clone()
    }

    fn page_lines(&self, page_number: u32) -> Result<Vec<TextLine>> {
        Ok(self.pages[page_number as usize - 1].clone())
    }

    fn page_text(&self, _page_number: u32) -> Result<String> {
        Ok(String::new())
    }
}

fn line(text: &str, font_size: f32, font_name: &str) -> TextLine {
    TextLine::from_spans(vec![TextSpan::new(text, font_size, font_name)])
}

#[test]
fn classifies_levels_from_first_span_only() {
    let source = MockSource {
        title: None,
        pages: vec![vec![
            line("Chapter One", 18.0, "Helvetica-Bold"),
            line("Section A", 13.0, "Helvetica"),
            line("Subsection A.1", 11.0, "Helvetica"),
            line("body text in regular size", 9.0, "Helvetica"),
            // Second span is large and bold, but only the first span counts.
            TextLine::from_spans(vec![
                TextSpan::new("small lead-in", 9.0, "Helvetica"),
                TextSpan::new("LARGE TAIL", 20.0, "Helvetica-Bold"),
            ]),
        ]],
    };

    let outline = extract_from_source(&source, "doc").unwrap();
    let levels: Vec<HeadingLevel> = outline.outline.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3]
    );
    assert_eq!(outline.outline[0].text, "Chapter One");
    assert!(outline.outline[0].is_bold);
    assert_eq!(outline.total_pages, 1);
}

#[test]
fn large_but_not_bold_is_h2() {
    let source = MockSource {
        title: None,
        pages: vec![vec![line("Big Regular Heading", 18.0, "Helvetica")]],
    };
    let outline = extract_from_source(&source, "doc").unwrap();
    assert_eq!(outline.outline[0].level, HeadingLevel::H2);
}

#[test]
fn short_spans_are_skipped() {
    let source = MockSource {
        title: None,
        pages: vec![vec![
            line("AB", 18.0, "Helvetica-Bold"),
            line("  x  ", 18.0, "Helvetica-Bold"),
            line("ABC", 18.0, "Helvetica-Bold"),
        ]],
    };
    let outline = extract_from_source(&source, "doc").unwrap();
    assert_eq!(outline.heading_count(), 1);
    assert_eq!(outline.outline[0].text, "ABC");
}

#[test]
fn duplicates_dropped_across_document_order() {
    let repeated = line("Running Header", 16.0, "Helvetica-Bold");
    let source = MockSource {
        title: None,
        pages: vec![
            vec![repeated.clone(), line("Unique One", 16.0, "Helvetica-Bold")],
            // Same text on another page is a different triple, kept.
            vec![repeated.clone(), repeated.clone()],
        ],
    };

    let outline = extract_from_source(&source, "doc").unwrap();
    let entries: Vec<(String, u32)> = outline
        .outline
        .iter()
        .map(|e| (e.text.clone(), e.page))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("Running Header".to_string(), 1),
            ("Unique One".to_string(), 1),
            ("Running Header".to_string(), 2),
        ]
    );
}

#[test]
fn no_qualifying_headings_yields_empty_outline() {
    let source = MockSource {
        title: None,
        pages: vec![vec![line("plain body text", 9.0, "Helvetica")]],
    };
    let outline = extract_from_source(&source, "doc").unwrap();
    assert!(outline.is_empty());
    assert_eq!(outline.total_pages, 1);
}

#[test]
fn metadata_title_wins_over_fallback() {
    let source = MockSource {
        title: Some("Declared Title".to_string()),
        pages: vec![vec![]],
    };
    let outline = extract_from_source(&source, "fallback-stem").unwrap();
    assert_eq!(outline.title, "Declared Title");

    let source = MockSource {
        title: None,
        pages: vec![vec![]],
    };
    let outline = extract_from_source(&source, "fallback-stem").unwrap();
    assert_eq!(outline.title, "fallback-stem");
}

#[test]
fn outline_json_shape() {
    let source = MockSource {
        title: Some("T".to_string()),
        pages: vec![vec![line("Overview Heading", 15.0, "Helvetica-Bold")]],
    };
    let outline = extract_from_source(&source, "doc").unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&to_json(&outline, JsonFormat::Compact).unwrap()).unwrap();

    assert_eq!(json["title"], "T");
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["outline"][0]["level"], "H1");
    assert_eq!(json["outline"][0]["page"], 1);
    assert_eq!(json["outline"][0]["is_bold"], true);
    assert_eq!(json["metadata"]["extraction_method"], "font_based_heuristics");
    assert_eq!(json["metadata"]["font_thresholds"]["H1"], ">14pt + bold");
    assert_eq!(json["metadata"]["font_thresholds"]["H2"], ">12pt");
    assert_eq!(json["metadata"]["font_thresholds"]["H3"], ">10pt");
}

// ---------------------------------------------------------------------------
// End-to-end against a real PDF file
// ---------------------------------------------------------------------------

/// Build a one-page PDF with a bold 16pt heading and 9pt body text.
fn build_sample_pdf() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => bold_id,
            "F2" => regular_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 16.into()]),
            Operation::new("Td", vec![72.into(), 770.into()]),
            Operation::new("Tj", vec![Object::string_literal("Document Overview")]),
            Operation::new("Td", vec![0.into(), (-40).into()]),
            Operation::new("Tj", vec![Object::string_literal("Document Overview")]),
            Operation::new("Td", vec![0.into(), (-40).into()]),
            Operation::new("Tf", vec!["F2".into(), 9.into()]),
            Operation::new("Tj", vec![Object::string_literal("Plain body paragraph text")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().unwrap(),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    // Flate-compress the content stream; the extractor reads streams
    // through their declared filter.
    doc.compress();
    doc
}

#[test]
fn extracts_outline_from_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.pdf");
    build_sample_pdf().save(&path).unwrap();

    let outline = extract_outline(&path).unwrap();

    // No declared title: fall back to the file stem.
    assert_eq!(outline.title, "sample");
    assert_eq!(outline.total_pages, 1);

    // The repeated heading deduplicates; the 9pt body never qualifies.
    assert_eq!(outline.heading_count(), 1);
    let entry = &outline.outline[0];
    assert_eq!(entry.text, "Document Overview");
    assert_eq!(entry.level, HeadingLevel::H1);
    assert_eq!(entry.page, 1);
    assert!(entry.is_bold);
}

#[test]
fn unreadable_file_is_an_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pdf");
    std::fs::write(&path, b"this is not a pdf at all").unwrap();

    let err = extract_outline(&path).unwrap_err();
    assert!(err.to_string().starts_with("PDF outline extraction failed"));
}

#[test]
fn process_outlines_writes_json_and_skips_failures() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    build_sample_pdf()
        .save(input.path().join("good.pdf"))
        .unwrap();
    std::fs::write(input.path().join("broken.pdf"), b"nope").unwrap();

    docsense::process_outlines(input.path(), output.path()).unwrap();

    let written = std::fs::read_to_string(output.path().join("good_outline.json")).unwrap();
    assert!(written.contains("Document Overview"));
    assert!(!output.path().join("broken_outline.json").exists());
}

#[test]
fn process_outlines_continues_past_unwritable_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    build_sample_pdf()
        .save(input.path().join("blocked.pdf"))
        .unwrap();
    build_sample_pdf()
        .save(input.path().join("writable.pdf"))
        .unwrap();

    // A directory squatting on the output path makes that one write fail.
    std::fs::create_dir(output.path().join("blocked_outline.json")).unwrap();

    docsense::process_outlines(input.path(), output.path()).unwrap();

    let written = std::fs::read_to_string(output.path().join("writable_outline.json")).unwrap();
    assert!(written.contains("Document Overview"));
}
