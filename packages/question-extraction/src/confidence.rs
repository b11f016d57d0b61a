//! Heuristic confidence scoring for accepted questions.
//!
//! The score is a bounded quality estimate for downstream ranking and
//! filtering, not a probability.

use crate::patterns::{CONFIDENCE_SURVEY_TERMS, QUESTION_WORDS};

/// Score a question's quality in the closed interval [0, 1].
///
/// Base 0.5; +0.3 for a trailing `?`; +0.1 if the text contains any
/// interrogative/modal word (applied at most once); +0.1 if it contains
/// any survey term (at most once); −0.2 under 20 characters; −0.1 over
/// 200 characters. Clamped to [0, 1].
pub fn confidence_score(question: &str) -> f32 {
    let mut score: f32 = 0.5;

    if question.ends_with('?') {
        score += 0.3;
    }

    let lower = question.to_lowercase();
    if QUESTION_WORDS.iter().any(|w| lower.contains(w)) {
        score += 0.1;
    }
    if CONFIDENCE_SURVEY_TERMS.iter().any(|t| lower.contains(t)) {
        score += 0.1;
    }

    let len = question.chars().count();
    if len < 20 {
        score -= 0.2;
    } else if len > 200 {
        score -= 0.1;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_signal_question_caps_at_one() {
        // Trailing ?, question word, survey term: 0.5 + 0.3 + 0.1 + 0.1 = 1.0
        let score = confidence_score("Do you approve of the governor's record?");
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_word_bonuses_apply_at_most_once() {
        // "do", "you", "would" all present; the +0.1 applies once
        let with_one = confidence_score("Respondents who trust local news outlets");
        let with_many = confidence_score("Do you think officials would trust local news");
        assert!((with_one - 0.6).abs() < 1e-6);
        assert!((with_many - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_short_text_penalty() {
        // "What about tax" is 14 chars: 0.5 + 0.1 - 0.2 = 0.4
        let score = confidence_score("What about tax");
        assert!((score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_long_text_penalty() {
        let long = format!("Would you support {} this year", "a very long policy clause ".repeat(8));
        assert!(long.chars().count() > 200);
        // 0.5 + 0.1 (would) + 0.1 (support) - 0.1 = 0.6
        let score = confidence_score(&long);
        assert!((score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_never_negative() {
        assert!(confidence_score("") >= 0.0);
        assert!(confidence_score("zzzz") >= 0.0);
    }
}
