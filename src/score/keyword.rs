//! Keyword-overlap fallback scorer.

use crate::error::Result;

use super::{RelevanceScorer, METHOD_KEYWORD};

/// Fixed domain-term list granting a relevance bonus.
const RESEARCH_TERMS: [&str; 12] = [
    "research",
    "study",
    "analysis",
    "method",
    "result",
    "conclusion",
    "literature",
    "review",
    "survey",
    "experiment",
    "data",
    "finding",
];

/// Deterministic lexical scorer. Always available, never fails.
///
/// Combines the fraction of job keywords found in the text (capped at 0.8)
/// with a bonus for research-related terms (capped at 0.2), so the total
/// stays in [0, 1].
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// The scoring formula itself, also used as the per-page fallback when
    /// the model-based scorer errors mid-call.
    ///
    /// Pure and total: the same (text, job) pair always yields the
    /// identical score.
    pub fn relevance(text: &str, job: &str) -> f64 {
        let text_lower = text.to_lowercase();
        let job_lower = job.to_lowercase();

        // Keywords are job tokens longer than 3 characters.
        let job_keywords: Vec<&str> = job_lower
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .collect();
        if job_keywords.is_empty() {
            return 0.0;
        }

        let matches = job_keywords
            .iter()
            .filter(|&&kw| text_lower.contains(kw))
            .count();
        let keyword_ratio = matches as f64 / job_keywords.len() as f64;

        let research_matches = RESEARCH_TERMS
            .iter()
            .filter(|&&term| text_lower.contains(term))
            .count();

        let base_score = (keyword_ratio * 0.8).min(0.8);
        let research_bonus = (research_matches as f64 * 0.05).min(0.2);

        (base_score + research_bonus).min(1.0)
    }
}

impl RelevanceScorer for KeywordScorer {
    fn score(&self, text: &str, job: &str) -> Result<f64> {
        Ok(Self::relevance(text, job))
    }

    fn method(&self) -> &'static str {
        METHOD_KEYWORD
    }
}
