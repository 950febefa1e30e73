//! Relevance scorer strategies.
//!
//! One scorer is selected per analysis call: the model-based zero-shot
//! scorer when its backing model loads, otherwise the keyword fallback.
//! Both sit behind the same [`RelevanceScorer`] contract so the ranker
//! never knows which one it holds.

mod keyword;
#[cfg(feature = "zero-shot")]
mod zero_shot;

pub use keyword::KeywordScorer;
#[cfg(feature = "zero-shot")]
pub use zero_shot::ZeroShotScorer;

use crate::error::Result;

/// Method label recorded when the model-based scorer handles the call.
pub const METHOD_ZERO_SHOT: &str = "DistilBERT zero-shot classification";

/// Method label recorded when keyword matching handles the call.
pub const METHOD_KEYWORD: &str = "Fallback keyword matching";

/// Scores free text against a job description, returning a value in [0, 1].
pub trait RelevanceScorer {
    /// Relevance of `text` to `job`. Errors here are per-call; the ranker
    /// falls back to the keyword formula for the failed page only.
    fn score(&self, text: &str, job: &str) -> Result<f64>;

    /// Fixed method label recorded in analysis metadata.
    fn method(&self) -> &'static str;
}

/// Pick the scorer for one analysis call.
///
/// Model initialization happens at most once here; if it fails, the keyword
/// fallback carries the whole call and the failure is only logged.
pub fn select_scorer() -> Box<dyn RelevanceScorer> {
    #[cfg(feature = "zero-shot")]
    {
        match ZeroShotScorer::new() {
            Ok(scorer) => {
                log::info!("zero-shot classifier initialized successfully");
                return Box::new(scorer);
            }
            Err(e) => log::warn!("Failed to initialize classifier: {}", e),
        }
    }
    Box::new(KeywordScorer)
}

/// Truncate a string to at most `max` characters, on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
