//! Capture-group scanner over the survey rule table.

use super::{Candidate, Strategy};
use crate::patterns::PatternLibrary;

/// Applies the smaller, higher-precision rules in
/// [`crate::patterns::SURVEY_PATTERNS`], extracting capture group 1 of
/// each match rather than the whole match.
///
/// Targets numbered statements, capitalized question sentences, and
/// statements carrying approval or voting vocabulary.
pub struct SurveyVocabularyScanner;

impl Strategy for SurveyVocabularyScanner {
    fn label(&self) -> &'static str {
        "survey_vocabulary"
    }

    fn extract(&self, content: &str, patterns: &PatternLibrary) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (_, rule) in patterns.survey_rules() {
            for caps in rule.captures_iter(content) {
                if let Some(m) = caps.get(1) {
                    candidates.push(Candidate {
                        text: m.as_str().trim().to_string(),
                        strategy: self.label(),
                    });
                }
            }
        }

        candidates
    }
}
