//! Candidate cleanup and acceptance.
//!
//! Every candidate passes through `clean_question_text` then
//! `is_valid_question` before it is eligible for deduplication. Failures
//! are silently dropped; no question is emitted for them.

use crate::patterns::PatternLibrary;

/// Clean a raw candidate into presentable question text.
///
/// Strips leading enumeration markers and bullets, removes parenthetical
/// and bracketed asides, collapses runs of terminal punctuation to a
/// single character (so a trailing `?` survives), and normalizes
/// whitespace.
pub fn clean_question_text(text: &str, patterns: &PatternLibrary) -> String {
    let mut text = text.trim().to_string();

    text = patterns.numbering.replace(&text, "").into_owned();
    text = patterns.bullet.replace(&text, "").into_owned();
    text = patterns.parenthetical.replace_all(&text, "").into_owned();
    text = patterns.bracketed.replace_all(&text, "").into_owned();
    text = patterns
        .punct_run
        .replace_all(&text, |caps: &regex::Captures| {
            caps[0].chars().next().map(String::from).unwrap_or_default()
        })
        .into_owned();

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Acceptance predicate for cleaned candidate text.
///
/// Rejects empty/whitespace-only, all-digit, all-uppercase, and
/// all-punctuation strings; strings outside 15–300 characters; legal and
/// navigation boilerplate; and strings with no alphabetic character.
pub fn is_valid_question(text: &str, patterns: &PatternLibrary) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let len = text.chars().count();
    if !(15..=300).contains(&len) {
        return false;
    }

    if patterns.all_digits.is_match(text)
        || patterns.all_uppercase.is_match(text)
        || patterns.all_punctuation.is_match(text)
        || patterns.boilerplate.is_match(text)
        || patterns.navigation.is_match(text)
    {
        return false;
    }

    text.chars().any(|c| c.is_ascii_alphabetic())
}
