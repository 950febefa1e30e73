//! Model-based zero-shot relevance scorer.
//!
//! Classifies page text against the two candidate labels `{job, "irrelevant"}`
//! and returns the confidence for the job label when it wins. The two-label
//! design keeps scores semantically comparable to the keyword formula's
//! [0, 1] range, so either scorer can feed the same threshold.
//!
//! Backed by a local sentence-embedding model: the text and both labels are
//! embedded, and a temperature-scaled softmax over the text/label cosine
//! similarities yields the label confidences.

use std::sync::Arc;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::error::{Error, Result};

use super::{truncate_chars, RelevanceScorer, METHOD_ZERO_SHOT};

/// Maximum number of characters of page text fed to the model.
const MAX_MODEL_CHARS: usize = 1000;

/// Counter-label completing the two-candidate set.
const NEGATIVE_LABEL: &str = "irrelevant";

/// Softmax temperature; cosine similarities are close together, so a low
/// temperature is needed to spread the label confidences.
const SOFTMAX_TEMPERATURE: f64 = 0.05;

/// Zero-shot scorer holding the shared, read-only model handle.
///
/// The handle is initialized at most once per analysis call and can be
/// cloned cheaply; the model itself is treated as a stateless function
/// after loading.
pub struct ZeroShotScorer {
    model: Arc<TextEmbedding>,
}

impl ZeroShotScorer {
    /// Load the embedding model, downloading weights on first use.
    ///
    /// Any failure here means the caller uses the keyword fallback for the
    /// whole analysis call.
    pub fn new() -> Result<Self> {
        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| Error::Scoring(format!("model initialization failed: {}", e)))?;
        Ok(Self {
            model: Arc::new(model),
        })
    }

    /// Wrap an already-loaded model.
    pub fn with_model(model: Arc<TextEmbedding>) -> Self {
        Self { model }
    }
}

impl RelevanceScorer for ZeroShotScorer {
    fn score(&self, text: &str, job: &str) -> Result<f64> {
        let snippet = truncate_chars(text, MAX_MODEL_CHARS);
        let inputs = vec![snippet.to_string(), job.to_string(), NEGATIVE_LABEL.to_string()];

        let mut embeddings = self
            .model
            .embed(inputs, None)
            .map_err(|e| Error::Scoring(format!("classification failed: {}", e)))?;
        if embeddings.len() != 3 {
            return Err(Error::Scoring(format!(
                "expected 3 embeddings, got {}",
                embeddings.len()
            )));
        }

        let negative = embeddings.pop().unwrap_or_default();
        let label = embeddings.pop().unwrap_or_default();
        let page = embeddings.pop().unwrap_or_default();

        let sim_job = cosine_similarity(&page, &label);
        let sim_negative = cosine_similarity(&page, &negative);
        let (job_confidence, _) = softmax2(
            sim_job / SOFTMAX_TEMPERATURE,
            sim_negative / SOFTMAX_TEMPERATURE,
        );

        // Only the top-ranked label earns its confidence; otherwise the
        // page is considered irrelevant outright.
        if sim_job >= sim_negative {
            Ok(job_confidence)
        } else {
            Ok(0.0)
        }
    }

    fn method(&self) -> &'static str {
        METHOD_ZERO_SHOT
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Numerically stable two-way softmax.
fn softmax2(a: f64, b: f64) -> (f64, f64) {
    let max = a.max(b);
    let ea = (a - max).exp();
    let eb = (b - max).exp();
    let sum = ea + eb;
    (ea / sum, eb / sum)
}
