//! The validated question unit returned by metadata extraction.

use serde::{Deserialize, Serialize};

/// Extraction-method tag attached to every question.
///
/// Constant because pattern-based and fallback-derived questions are
/// merged before metadata is attached.
pub const EXTRACTION_METHOD: &str = "pattern_with_llm_fallback";

/// A validated, cleaned, deduplicated question with metadata.
///
/// Invariants: text is 15–300 characters, contains at least one
/// alphabetic character, is unique within its result set under the dedup
/// key, and `confidence` lies in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The question text
    pub question: String,

    /// Source URL the content was scraped from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// How the question was extracted (see [`EXTRACTION_METHOD`])
    pub extraction_method: String,

    /// Heuristic quality estimate in [0, 1]
    pub confidence: f32,

    /// 1-based position within the result set
    pub question_number: usize,
}
