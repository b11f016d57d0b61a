//! Line-oriented scanner for questions that already end in `?`.

use super::{Candidate, Strategy};
use crate::patterns::PatternLibrary;

/// Keeps trimmed lines ending in `?` whose length is 15–300 characters.
///
/// The cheapest and highest-precision detector, so it runs first and wins
/// first-seen deduplication against the other strategies.
pub struct QuestionMarkScanner;

impl Strategy for QuestionMarkScanner {
    fn label(&self) -> &'static str {
        "question_mark"
    }

    fn extract(&self, content: &str, _patterns: &PatternLibrary) -> Vec<Candidate> {
        content
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let len = line.chars().count();
                (line.ends_with('?') && (15..=300).contains(&len)).then(|| Candidate {
                    text: line.to_string(),
                    strategy: self.label(),
                })
            })
            .collect()
    }
}
