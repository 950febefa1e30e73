//! Output model types for outline extraction and relevance analysis.
//!
//! Every type here is a plain value object built within a single call and
//! serialized once; nothing is mutated after serialization.

mod analysis;
mod outline;

pub use analysis::{
    AnalysisMetadata, AnalysisResult, PageRecord, ScoredSection, ScoredSubsection,
    RELEVANCE_THRESHOLD,
};
pub use outline::{DocumentOutline, FontThresholds, HeadingEntry, HeadingLevel, OutlineMetadata};
