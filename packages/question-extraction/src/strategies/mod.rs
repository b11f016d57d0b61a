//! Detection strategies - independent scanners over the same content.
//!
//! Each strategy proposes raw candidates without short-circuiting the
//! others; validation, cleaning, and deduplication happen downstream in
//! the pipeline. Strategies run in a fixed order (question-mark → keyword
//! → survey-vocabulary → sentence-boundary) and emit candidates in
//! document order, which fixes the first-seen order for deduplication.

mod keyword;
mod question_mark;
mod sentence;
mod survey;

pub use keyword::KeywordScanner;
pub use question_mark::QuestionMarkScanner;
pub use sentence::SentenceBoundaryScanner;
pub use survey::SurveyVocabularyScanner;

use crate::patterns::PatternLibrary;

/// An unvalidated text span proposed as a question by one strategy.
///
/// Ephemeral: created per extraction call and discarded after cleaning.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Raw proposed text, before cleaning
    pub text: String,

    /// Label of the strategy that proposed it
    pub strategy: &'static str,
}

/// A question detection strategy.
///
/// Implementations are pure scans over normalized content; adding a new
/// strategy never requires modifying existing ones.
pub trait Strategy: Send + Sync {
    /// Short name used for logging and candidate attribution.
    fn label(&self) -> &'static str;

    /// Scan content and propose candidates in document order.
    fn extract(&self, content: &str, patterns: &PatternLibrary) -> Vec<Candidate>;
}

/// The fixed strategy sequence used by the pipeline.
pub fn default_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(QuestionMarkScanner),
        Box::new(KeywordScanner),
        Box::new(SurveyVocabularyScanner),
        Box::new(SentenceBoundaryScanner),
    ]
}
