//! Question extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Normalization of scraped content
//! - Four detection strategies in a fixed order
//! - Per-candidate cleaning and validation
//! - Order-preserving deduplication
//! - Conditional AI fallback when pattern detection comes up short
//! - Confidence scoring and metadata attachment

pub mod fallback;
pub mod prompts;

pub use fallback::{parse_fallback_response, reads_as_question};
pub use prompts::{
    fallback_prompt_hash, format_fallback_prompt, FALLBACK_PROMPT, NO_QUESTIONS_SENTINEL,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::confidence::confidence_score;
use crate::dedupe::dedupe_questions;
use crate::error::ExtractionError;
use crate::normalize::normalize;
use crate::patterns::PatternLibrary;
use crate::strategies::{default_strategies, Strategy};
use crate::traits::AI;
use crate::types::{ExtractorConfig, Question, EXTRACTION_METHOD};
use crate::validate::{clean_question_text, is_valid_question};

/// Survey question extractor with optional AI fallback.
///
/// Holds only static configuration (compiled pattern tables, strategy
/// order, limits); all extraction state is per call, so one extractor can
/// serve concurrent extractions over independent inputs without
/// coordination, provided the `AI` implementation tolerates concurrent
/// use.
pub struct QuestionExtractor {
    patterns: PatternLibrary,
    strategies: Vec<Box<dyn Strategy>>,
    ai: Option<Arc<dyn AI>>,
    config: ExtractorConfig,
}

impl QuestionExtractor {
    /// Create an extractor with no collaborator: pure pattern extraction.
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::new(),
            strategies: default_strategies(),
            ai: None,
            config: ExtractorConfig::default(),
        }
    }

    /// Create an extractor that may fall back to the given collaborator.
    pub fn with_ai(ai: Arc<dyn AI>) -> Self {
        Self {
            ai: Some(ai),
            ..Self::new()
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The compiled pattern library.
    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    /// Pattern-only extraction: the synchronous path, no collaborator.
    ///
    /// Returns every unique valid question found, uncapped.
    pub fn pattern_questions(&self, content: &str) -> Vec<String> {
        let normalized = normalize(content);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.pattern_questions_normalized(&normalized)
    }

    fn pattern_questions_normalized(&self, content: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for strategy in &self.strategies {
            let found = strategy.extract(content, &self.patterns);
            debug!("strategy {} proposed {} candidates", strategy.label(), found.len());
            candidates.extend(found);
        }

        let cleaned = candidates.into_iter().filter_map(|candidate| {
            let text = clean_question_text(&candidate.text, &self.patterns);
            is_valid_question(&text, &self.patterns).then_some(text)
        });

        dedupe_questions(cleaned)
    }

    /// Extract questions from scraped content.
    ///
    /// Runs the pattern pipeline first; if it yields at least
    /// `min_questions` unique questions, or no collaborator is configured,
    /// that result is returned directly (the common path, no AI call).
    /// Otherwise the collaborator is consulted once under the configured
    /// deadline, its response merged in, and the combined set re-deduped.
    /// Collaborator failure or timeout degrades to pattern-only output;
    /// this method never fails.
    pub async fn extract_questions(&self, content: &str, url: &str) -> Vec<String> {
        let max = self.config.max_questions;

        let normalized = normalize(content);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut questions = self.pattern_questions_normalized(&normalized);
        debug!("pattern extraction found {} unique questions", questions.len());

        let sufficient = questions.len() >= self.config.min_questions;
        let Some(ai) = self.ai.as_ref().filter(|_| !sufficient) else {
            questions.truncate(max);
            return questions;
        };

        let prompt = format_fallback_prompt(
            &normalized,
            url,
            max,
            self.config.prompt_content_limit,
        );
        let deadline = Duration::from_millis(self.config.fallback_timeout_ms);

        let response = match timeout(deadline, ai.ask(&prompt, self.config.fallback_temperature))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ExtractionError::Timeout {
                timeout_ms: self.config.fallback_timeout_ms,
            }),
        };

        match response {
            Ok(text) => {
                let fallback = parse_fallback_response(&text, &self.patterns, max);
                debug!("fallback produced {} candidate questions", fallback.len());

                let mut merged = dedupe_questions(questions.into_iter().chain(fallback));
                merged.truncate(max);
                merged
            }
            Err(e) => {
                warn!("Fallback extraction failed, returning pattern results: {}", e);
                questions.truncate(max);
                questions
            }
        }
    }

    /// Extract questions with per-question metadata.
    ///
    /// Wraps [`extract_questions`](Self::extract_questions) and attaches
    /// source URL, title, the constant extraction-method tag, a confidence
    /// score, and the 1-based position.
    pub async fn extract_with_metadata(
        &self,
        content: &str,
        url: &str,
        title: &str,
    ) -> Vec<Question> {
        let questions = self.extract_questions(content, url).await;

        questions
            .into_iter()
            .enumerate()
            .map(|(i, question)| Question {
                confidence: confidence_score(&question),
                source: (!url.is_empty()).then(|| url.to_string()),
                title: (!title.is_empty()).then(|| title.to_string()),
                extraction_method: EXTRACTION_METHOD.to_string(),
                question_number: i + 1,
                question,
            })
            .collect()
    }
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_questions_single_sentence() {
        let extractor = QuestionExtractor::new();

        let questions =
            extractor.pattern_questions("Do you approve of the President's job performance?");

        assert_eq!(
            questions,
            vec!["Do you approve of the President's job performance?"]
        );
    }

    #[test]
    fn test_pattern_questions_empty_content() {
        let extractor = QuestionExtractor::new();
        assert!(extractor.pattern_questions("").is_empty());
        assert!(extractor.pattern_questions("  \n \t ").is_empty());
    }

    #[test]
    fn test_pattern_questions_dedupes_across_strategies() {
        let extractor = QuestionExtractor::new();

        // Every strategy proposes some form of this line; dedup leaves one.
        let content = "Would you support a statewide transit expansion?";
        let questions = extractor.pattern_questions(content);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0], content);
    }

    #[tokio::test]
    async fn test_extract_without_ai_truncates() {
        let extractor = QuestionExtractor::new()
            .with_config(ExtractorConfig::new().with_max_questions(2));

        let content = "Do you approve of the mayor's budget proposal?\n\
                       Would you support a new light rail line?\n\
                       Do you plan to vote in the next statewide election?";

        let questions = extractor.extract_questions(content, "").await;
        assert_eq!(questions.len(), 2);
    }
}
