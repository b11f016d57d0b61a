//! Sentence-boundary scanner for questions phrased as statements.

use super::{Candidate, Strategy};
use crate::patterns::{PatternLibrary, QUESTION_WORDS, SURVEY_INDICATORS};

/// Splits content on sentence terminators and keeps 20–300 character
/// sentences containing an interrogative/modal word or a survey indicator.
///
/// Catches survey items that the punctuation-driven scanners miss, such as
/// agree/disagree statements.
pub struct SentenceBoundaryScanner;

impl Strategy for SentenceBoundaryScanner {
    fn label(&self) -> &'static str {
        "sentence_boundary"
    }

    fn extract(&self, content: &str, patterns: &PatternLibrary) -> Vec<Candidate> {
        patterns
            .sentence_split
            .split(content)
            .filter_map(|sentence| {
                let sentence = sentence.trim();
                let len = sentence.chars().count();
                ((20..=300).contains(&len) && contains_question_indicator(sentence)).then(|| {
                    Candidate {
                        text: sentence.to_string(),
                        strategy: self.label(),
                    }
                })
            })
            .collect()
    }
}

/// True when the sentence carries a question word or survey indicator.
fn contains_question_indicator(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();

    QUESTION_WORDS.iter().any(|w| lower.contains(w))
        || SURVEY_INDICATORS.iter().any(|i| lower.contains(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_survey_indicator_sentence() {
        let scanner = SentenceBoundaryScanner;
        let patterns = PatternLibrary::new();

        let content = "Respondents strongly oppose the new tolls. The sun set at nine.";
        let candidates = scanner.extract(content, &patterns);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "Respondents strongly oppose the new tolls");
    }

    #[test]
    fn test_rejects_short_sentences() {
        let scanner = SentenceBoundaryScanner;
        let patterns = PatternLibrary::new();

        // Contains "vote" but under 20 characters
        let candidates = scanner.extract("Go vote next week.", &patterns);
        assert!(candidates.is_empty());
    }
}
