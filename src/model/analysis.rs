//! Relevance analysis types.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Strict threshold a page's relevance score must exceed to be emitted.
pub const RELEVANCE_THRESHOLD: f64 = 0.7;

/// One page's worth of extracted text, ready for scoring.
///
/// Only pages with at least 50 characters of trimmed text become records;
/// shorter pages never enter the scoring pipeline.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Source document file name
    pub document: String,
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Trimmed page text
    pub text: String,
}

/// A page section that cleared the relevance threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSection {
    pub document: String,
    pub page_number: u32,
    pub section_title: String,
    /// Relevance score in [0, 1], rounded to 3 decimals
    pub importance_rank: f64,
    pub text_length: usize,
}

/// Truncated text excerpt emitted 1:1 alongside each [`ScoredSection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSubsection {
    pub document: String,
    pub page_number: u32,
    /// The page text, cut at 500 characters with a trailing ellipsis
    pub refined_text: String,
    /// Relevance score in [0, 1], rounded to 3 decimals
    pub relevance_score: f64,
}

/// Summary metadata for one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// File names of all successfully opened documents, in processing order
    pub documents: Vec<String>,
    pub persona: String,
    pub job: String,
    /// Local time, formatted `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    /// Which scorer strategy handled the call
    pub analysis_method: String,
    /// Always 0.7, regardless of scorer
    pub relevance_threshold: f64,
    pub total_sections: usize,
    pub total_subsections: usize,
    /// Arithmetic mean of all emitted importance ranks, 0.0 when none
    pub avg_relevance: f64,
}

/// Complete result of one persona-driven analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metadata: AnalysisMetadata,
    /// Sections sorted by importance rank, descending
    pub sections: Vec<ScoredSection>,
    /// Subsections sorted by relevance score, descending
    pub subsections: Vec<ScoredSubsection>,
}

impl AnalysisResult {
    /// Start an empty result for the given persona/job pair.
    pub fn new(persona: &str, job: &str, analysis_method: &str) -> Self {
        Self {
            metadata: AnalysisMetadata {
                documents: Vec::new(),
                persona: persona.to_string(),
                job: job.to_string(),
                timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                analysis_method: analysis_method.to_string(),
                relevance_threshold: RELEVANCE_THRESHOLD,
                total_sections: 0,
                total_subsections: 0,
                avg_relevance: 0.0,
            },
            sections: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Sort emitted rows and fill in the summary statistics.
    ///
    /// Both sorts are stable so ties keep their input order, which makes the
    /// output deterministic for a fixed document set.
    pub fn finalize(&mut self) {
        self.sections.sort_by(|a, b| {
            b.importance_rank
                .partial_cmp(&a.importance_rank)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.subsections.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        self.metadata.total_sections = self.sections.len();
        self.metadata.total_subsections = self.subsections.len();
        self.metadata.avg_relevance = if self.sections.is_empty() {
            0.0
        } else {
            self.sections.iter().map(|s| s.importance_rank).sum::<f64>()
                / self.sections.len() as f64
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(doc: &str, page: u32, rank: f64) -> ScoredSection {
        ScoredSection {
            document: doc.to_string(),
            page_number: page,
            section_title: format!("{doc} p{page}"),
            importance_rank: rank,
            text_length: 100,
        }
    }

    fn subsection(doc: &str, page: u32, score: f64) -> ScoredSubsection {
        ScoredSubsection {
            document: doc.to_string(),
            page_number: page,
            refined_text: String::new(),
            relevance_score: score,
        }
    }

    #[test]
    fn test_finalize_sorts_descending() {
        let mut result = AnalysisResult::new("Researcher", "literature review", "test");
        result.sections.push(section("a.pdf", 1, 0.8));
        result.sections.push(section("a.pdf", 2, 0.95));
        result.sections.push(section("b.pdf", 1, 0.71));
        result.subsections.push(subsection("a.pdf", 1, 0.8));
        result.subsections.push(subsection("a.pdf", 2, 0.95));
        result.subsections.push(subsection("b.pdf", 1, 0.71));

        result.finalize();

        let ranks: Vec<f64> = result.sections.iter().map(|s| s.importance_rank).collect();
        assert_eq!(ranks, vec![0.95, 0.8, 0.71]);
        let scores: Vec<f64> = result
            .subsections
            .iter()
            .map(|s| s.relevance_score)
            .collect();
        assert_eq!(scores, vec![0.95, 0.8, 0.71]);
    }

    #[test]
    fn test_finalize_ties_keep_input_order() {
        let mut result = AnalysisResult::new("p", "j", "test");
        result.sections.push(section("first.pdf", 3, 0.8));
        result.sections.push(section("second.pdf", 1, 0.8));

        result.finalize();

        assert_eq!(result.sections[0].document, "first.pdf");
        assert_eq!(result.sections[1].document, "second.pdf");
    }

    #[test]
    fn test_finalize_statistics() {
        let mut result = AnalysisResult::new("p", "j", "test");
        result.sections.push(section("a.pdf", 1, 0.8));
        result.sections.push(section("a.pdf", 2, 0.9));
        result.subsections.push(subsection("a.pdf", 1, 0.8));

        result.finalize();

        assert_eq!(result.metadata.total_sections, 2);
        assert_eq!(result.metadata.total_subsections, 1);
        assert!((result.metadata.avg_relevance - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_finalize_empty_avg_is_zero() {
        let mut result = AnalysisResult::new("p", "j", "test");
        result.finalize();
        assert_eq!(result.metadata.avg_relevance, 0.0);
        assert_eq!(result.metadata.relevance_threshold, 0.7);
    }

    #[test]
    fn test_json_field_names() {
        let mut result = AnalysisResult::new("PhD Researcher", "Prepare a literature review", "m");
        result.sections.push(section("a.pdf", 1, 0.8));
        result.subsections.push(subsection("a.pdf", 1, 0.8));
        result.finalize();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["metadata"]["documents"].is_array());
        assert_eq!(json["metadata"]["persona"], "PhD Researcher");
        assert_eq!(json["metadata"]["relevance_threshold"], 0.7);
        assert_eq!(json["sections"][0]["importance_rank"], 0.8);
        assert_eq!(json["sections"][0]["text_length"], 100);
        assert_eq!(json["subsections"][0]["relevance_score"], 0.8);
        assert!(json["subsections"][0]["refined_text"].is_string());
    }
}
