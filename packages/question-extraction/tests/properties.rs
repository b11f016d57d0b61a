//! Property tests for the pipeline's algebraic invariants.

use proptest::prelude::*;
use std::collections::HashSet;

use question_extraction::{confidence_score, dedup_key, dedupe_questions, QuestionExtractor};

proptest! {
    /// Deduping an already-deduped sequence returns it unchanged.
    #[test]
    fn dedupe_is_idempotent(input in proptest::collection::vec(".*", 0..40)) {
        let once = dedupe_questions(input);
        let twice = dedupe_questions(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// Confidence stays inside the closed interval [0, 1].
    #[test]
    fn confidence_is_bounded(text in ".*") {
        let score = confidence_score(&text);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Every accepted question is 15-300 chars, contains a letter, and is
    /// unique under the dedup key.
    #[test]
    fn accepted_questions_satisfy_invariants(content in ".{0,600}") {
        let extractor = QuestionExtractor::new();
        let questions = extractor.pattern_questions(&content);

        for question in &questions {
            let len = question.chars().count();
            prop_assert!((15..=300).contains(&len), "bad length {} for {:?}", len, question);
            prop_assert!(question.chars().any(|c| c.is_ascii_alphabetic()));
        }

        let keys: HashSet<String> = questions.iter().map(|q| dedup_key(q)).collect();
        prop_assert_eq!(keys.len(), questions.len());
    }
}
