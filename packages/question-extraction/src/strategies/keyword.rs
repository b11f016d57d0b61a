//! Whole-match regex scanner over the keyword rule table.

use super::{Candidate, Strategy};
use crate::patterns::PatternLibrary;

/// Applies every rule in [`crate::patterns::KEYWORD_PATTERNS`] and emits
/// each whole match as a candidate.
///
/// Rules cover capitalized questions, interrogative openers, and the
/// approval/voting/policy/demographic/current-event/political-figure
/// vocabularies. Rules run in declaration order; within a rule, matches
/// come out in document order.
pub struct KeywordScanner;

impl Strategy for KeywordScanner {
    fn label(&self) -> &'static str {
        "keyword"
    }

    fn extract(&self, content: &str, patterns: &PatternLibrary) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (_, rule) in patterns.keyword_rules() {
            for m in rule.find_iter(content) {
                candidates.push(Candidate {
                    text: m.as_str().trim().to_string(),
                    strategy: self.label(),
                });
            }
        }

        candidates
    }
}
