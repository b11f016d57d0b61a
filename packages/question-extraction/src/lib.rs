//! Survey Question Extraction Library
//!
//! Extracts survey questions from noisy scraped polling-page text using
//! several cheap, independent pattern detectors, falling back to an AI
//! collaborator only when pattern detection comes up short.
//!
//! # Design Philosophy
//!
//! - Patterns first, AI last: the common path never pays for an LLM call
//! - Detection rules are data, not control flow
//! - Every failure degrades to fewer questions, never to an error
//! - The collaborator is an explicit capability, not ambient state
//!
//! # Usage
//!
//! ```rust,ignore
//! use question_extraction::{QuestionExtractor, ExtractorConfig};
//!
//! // Pattern-only extraction (synchronous, no collaborator)
//! let extractor = QuestionExtractor::new();
//! let questions = extractor.pattern_questions(&page_text);
//!
//! // With AI fallback when patterns find too few questions
//! let extractor = QuestionExtractor::with_ai(llm_client)
//!     .with_config(ExtractorConfig::new().with_max_questions(10));
//! let questions = extractor.extract_questions(&page_text, &url).await;
//! let tagged = extractor.extract_with_metadata(&page_text, &url, &title).await;
//! ```
//!
//! # Modules
//!
//! - [`patterns`] - Detection rule tables and the compiled library
//! - [`strategies`] - The four independent detection strategies
//! - [`pipeline`] - Orchestration, prompts, and fallback parsing
//! - [`traits`] - The AI collaborator abstraction
//! - [`testing`] - Mock implementations for testing

pub mod confidence;
pub mod dedupe;
pub mod error;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod strategies;
pub mod testing;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use traits::AI;
pub use types::{ExtractorConfig, Question, EXTRACTION_METHOD};

// Re-export the extractor and pipeline helpers
pub use pipeline::{
    fallback_prompt_hash, format_fallback_prompt, parse_fallback_response, reads_as_question,
    QuestionExtractor, FALLBACK_PROMPT, NO_QUESTIONS_SENTINEL,
};

// Re-export the leaf operations for direct use and testing
pub use confidence::confidence_score;
pub use dedupe::{dedup_key, dedupe_questions};
pub use normalize::normalize;
pub use patterns::PatternLibrary;
pub use strategies::{
    default_strategies, Candidate, KeywordScanner, QuestionMarkScanner, SentenceBoundaryScanner,
    Strategy, SurveyVocabularyScanner,
};
pub use validate::{clean_question_text, is_valid_question};

// Re-export testing utilities
pub use testing::MockAI;
