//! Heading outline types.

use serde::{Deserialize, Serialize};

/// Heading tier assigned by the font heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Classify a span by font size and weight.
    ///
    /// Thresholds are evaluated top to bottom, first match wins. All
    /// comparisons are strict, so a span sitting exactly on a boundary
    /// falls to the lower tier (14pt bold is H2, not H1).
    pub fn classify(font_size: f32, is_bold: bool) -> Option<Self> {
        if font_size > 14.0 && is_bold {
            Some(HeadingLevel::H1)
        } else if font_size > 12.0 {
            Some(HeadingLevel::H2)
        } else if font_size > 10.0 {
            Some(HeadingLevel::H3)
        } else {
            None
        }
    }
}

/// One heading detected in a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading tier (H1-H3)
    pub level: HeadingLevel,

    /// Trimmed heading text
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,

    /// Font size in points, rounded to 2 decimals
    pub font_size: f32,

    /// Whether the span's font is bold
    pub is_bold: bool,
}

/// Human-readable description of the classification thresholds.
///
/// These strings document the heuristic for downstream consumers and are
/// fixed for output compatibility; changing the thresholds means changing
/// these strings too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontThresholds {
    #[serde(rename = "H1")]
    pub h1: String,
    #[serde(rename = "H2")]
    pub h2: String,
    #[serde(rename = "H3")]
    pub h3: String,
}

impl Default for FontThresholds {
    fn default() -> Self {
        Self {
            h1: ">14pt + bold".to_string(),
            h2: ">12pt".to_string(),
            h3: ">10pt".to_string(),
        }
    }
}

/// Static metadata attached to every extracted outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineMetadata {
    /// Name of the extraction strategy
    pub extraction_method: String,

    /// The font-size thresholds as human-readable strings
    pub font_thresholds: FontThresholds,
}

impl Default for OutlineMetadata {
    fn default() -> Self {
        Self {
            extraction_method: "font_based_heuristics".to_string(),
            font_thresholds: FontThresholds::default(),
        }
    }
}

/// A structured heading outline extracted from one PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title (declared metadata title, else the file stem)
    pub title: String,

    /// De-duplicated headings in document order
    pub outline: Vec<HeadingEntry>,

    /// Total number of pages in the document
    pub total_pages: u32,

    /// Static descriptive metadata
    pub metadata: OutlineMetadata,
}

impl DocumentOutline {
    /// Number of headings in the outline.
    pub fn heading_count(&self) -> usize {
        self.outline.len()
    }

    /// Check whether no headings qualified.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tiers() {
        assert_eq!(HeadingLevel::classify(15.0, true), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::classify(15.0, false), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::classify(12.5, false), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::classify(11.0, false), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::classify(11.0, true), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::classify(9.5, true), None);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        // Exactly on a threshold classifies as the lower tier, never the higher.
        assert_eq!(HeadingLevel::classify(14.0, true), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::classify(12.0, false), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::classify(12.0, true), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::classify(10.0, false), None);
        assert_eq!(HeadingLevel::classify(10.0, true), None);
    }

    #[test]
    fn test_level_serializes_as_tier_name() {
        let json = serde_json::to_string(&HeadingLevel::H1).unwrap();
        assert_eq!(json, "\"H1\"");
    }

    #[test]
    fn test_threshold_strings_are_fixed() {
        let metadata = OutlineMetadata::default();
        assert_eq!(metadata.extraction_method, "font_based_heuristics");

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["font_thresholds"]["H1"], ">14pt + bold");
        assert_eq!(json["font_thresholds"]["H2"], ">12pt");
        assert_eq!(json["font_thresholds"]["H3"], ">10pt");
    }
}
