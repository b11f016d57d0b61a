//! Parse collaborator responses into fallback questions.
//!
//! The response is unstructured text: one question per line if the model
//! followed instructions, with the occasional numbering or bullet it was
//! told not to add. Parsing is defensive and never fails; malformed lines
//! are dropped.

use super::prompts::NO_QUESTIONS_SENTINEL;
use crate::normalize::normalize;
use crate::patterns::{PatternLibrary, IMPLICIT_QUESTION_TERMS, QUESTION_STARTERS};
use crate::validate::is_valid_question;

/// Parse a raw collaborator response into candidate question texts.
///
/// The sentinel anywhere in the response (case-insensitive) means "no
/// questions present" and yields an empty list. Otherwise lines are
/// stripped of numbering and bullets, validated, and given a trailing `?`
/// when they read as an implicit question. At most `max_questions` lines
/// are kept.
pub fn parse_fallback_response(
    response: &str,
    patterns: &PatternLibrary,
    max_questions: usize,
) -> Vec<String> {
    let cleaned = normalize(response);

    if cleaned.to_uppercase().contains(NO_QUESTIONS_SENTINEL) {
        return Vec::new();
    }

    let mut questions = Vec::new();

    for line in cleaned.lines() {
        let line = line.trim();
        if line.chars().count() < 15 {
            continue;
        }

        let line = patterns.numbering.replace(line, "");
        let line = patterns.bullet.replace(&line, "");
        let line = line.trim();

        if !is_valid_question(line, patterns) {
            continue;
        }

        let mut question = line.to_string();
        if !question.ends_with('?') && reads_as_question(&question) {
            question.push('?');
        }

        questions.push(question);
        if questions.len() >= max_questions {
            break;
        }
    }

    questions
}

/// True when a statement reads as an implicit question: it opens with an
/// interrogative/modal phrase or carries approval/support/voting vocabulary.
pub fn reads_as_question(text: &str) -> bool {
    let lower = text.to_lowercase();

    QUESTION_STARTERS.iter().any(|s| lower.starts_with(s))
        || IMPLICIT_QUESTION_TERMS.iter().any(|t| lower.contains(t))
}
