//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for question extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum questions returned per extraction. Default: 15.
    pub max_questions: usize,

    /// Minimum pattern-based questions required to skip the AI fallback.
    ///
    /// Below this count, and only when a collaborator is configured, the
    /// pipeline pays for one AI call. Default: 3.
    pub min_questions: usize,

    /// Sampling temperature for the fallback call.
    ///
    /// Kept low: the collaborator extracts verbatim questions, it does not
    /// compose new ones. Default: 0.2.
    pub fallback_temperature: f32,

    /// Maximum characters of content included in the fallback prompt.
    ///
    /// Default: 4000.
    pub prompt_content_limit: usize,

    /// Deadline for the fallback call in milliseconds.
    ///
    /// On expiry the pipeline returns pattern-only output; the timeout is
    /// never surfaced as an error. Default: 30_000.
    pub fallback_timeout_ms: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_questions: 15,
            min_questions: 3,
            fallback_temperature: 0.2,
            prompt_content_limit: 4000,
            fallback_timeout_ms: 30_000,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of questions returned.
    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    /// Set the minimum question count that gates the AI fallback.
    pub fn with_min_questions(mut self, min: usize) -> Self {
        self.min_questions = min;
        self
    }

    /// Set the fallback sampling temperature.
    pub fn with_fallback_temperature(mut self, temperature: f32) -> Self {
        self.fallback_temperature = temperature;
        self
    }

    /// Set the prompt content limit in characters.
    pub fn with_prompt_content_limit(mut self, limit: usize) -> Self {
        self.prompt_content_limit = limit;
        self
    }

    /// Set the fallback deadline in milliseconds.
    pub fn with_fallback_timeout_ms(mut self, ms: u64) -> Self {
        self.fallback_timeout_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_questions, 15);
        assert_eq!(config.min_questions, 3);
        assert_eq!(config.fallback_timeout_ms, 30_000);
    }

    #[test]
    fn test_builder() {
        let config = ExtractorConfig::new()
            .with_max_questions(5)
            .with_min_questions(1)
            .with_fallback_timeout_ms(250);

        assert_eq!(config.max_questions, 5);
        assert_eq!(config.min_questions, 1);
        assert_eq!(config.fallback_timeout_ms, 250);
    }
}
