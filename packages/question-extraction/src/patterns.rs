//! Pattern tables for question detection.
//!
//! All detection rules live here as named, inspectable data rather than
//! literals scattered through control flow, so tests can enumerate them
//! and new vocabulary can be added without touching the extractors.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Interrogative and modal words that signal a question.
pub const QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "which", "who", "whom", "whose", "do", "does", "did",
    "have", "has", "had", "will", "would", "should", "can", "could", "may", "might", "must",
    "shall", "is", "are", "was", "were",
];

/// Survey vocabulary that marks a sentence as a likely poll question.
pub const SURVEY_INDICATORS: &[&str] = &[
    "approve",
    "disapprove",
    "favorable",
    "unfavorable",
    "support",
    "oppose",
    "trust",
    "distrust",
    "satisfied",
    "dissatisfied",
    "vote",
    "election",
    "candidate",
    "president",
    "senator",
    "governor",
];

/// Survey terms that raise the confidence score.
pub const CONFIDENCE_SURVEY_TERMS: &[&str] =
    &["approve", "disapprove", "support", "oppose", "vote", "election"];

/// Opening phrases that mark a statement as an implicit question.
pub const QUESTION_STARTERS: &[&str] = &[
    "do you", "would you", "are you", "have you", "did you", "will you", "should you", "can you",
    "could you", "what", "how", "why", "when", "where", "which", "who", "whom", "whose",
];

/// Mid-sentence vocabulary that marks a statement as an implicit question.
pub const IMPLICIT_QUESTION_TERMS: &[&str] = &["approve", "support", "favor", "vote for"];

/// Legal boilerplate phrases that disqualify a candidate.
pub const BOILERPLATE_PHRASES: &[&str] = &["copyright", "all rights reserved", "privacy policy"];

/// Navigation chrome phrases that disqualify a candidate.
pub const NAVIGATION_PHRASES: &[&str] = &["click here", "read more", "learn more"];

/// Labeled whole-match rules for the keyword scanner.
///
/// The vocabulary rules carry a leading `[^.!?]*` so a match covers the
/// whole sentence containing the vocabulary, not just the tail from the
/// keyword onward. Matching tails would produce fragments that escape
/// deduplication against the full sentence.
pub const KEYWORD_PATTERNS: &[(&str, &str)] = &[
    ("capitalized_question", r"[A-Z][^.!?]*\?"),
    (
        "interrogative_opener",
        r"\b(Do you|Would you|Are you|Have you|Did you|Will you|Should|Can|Could|Would|Is|Are|Does|Do|Have|Has|Had|Will|Might|May)\b[^.!?]*[.!?]",
    ),
    (
        "approval_vocabulary",
        r"[^.!?]*\b(approve|disapprove|favorable|unfavorable|support|oppose|trust|distrust|satisfied|dissatisfied)\b[^.!?]*[.!?]",
    ),
    (
        "voting_vocabulary",
        r"[^.!?]*\b(vote for|vote|election|candidate|president|senator|governor|representative)\b[^.!?]*[.!?]",
    ),
    (
        "policy_topics",
        r"[^.!?]*\b(immigration|economy|healthcare|education|environment|taxes|budget|deficit|jobs|unemployment|inflation)\b[^.!?]*[.!?]",
    ),
    (
        "demographics",
        r"[^.!?]*\b(age|gender|race|ethnicity|income|education|region|party|ideology|religion)\b[^.!?]*[.!?]",
    ),
    (
        "current_events",
        r"[^.!?]*\b(COVID|pandemic|vaccine|mask|lockdown|stimulus|relief|recovery|recession)\b[^.!?]*[.!?]",
    ),
    (
        "political_figures",
        r"[^.!?]*\b(Biden|Trump|Harris|Pence|Obama|Bush|Clinton|Sanders|Warren|Pelosi|McConnell)\b[^.!?]*[.!?]",
    ),
];

/// Labeled capture-group rules for the survey-vocabulary scanner.
///
/// Higher precision than [`KEYWORD_PATTERNS`]; extraction takes capture
/// group 1 rather than the whole match.
pub const SURVEY_PATTERNS: &[(&str, &str)] = &[
    ("numbered_statement", r"(\d+\.\s*[^.!?]*[.!?])"),
    ("capitalized_question", r"([A-Z][^.!?]*\?)"),
    (
        "approval_statement",
        r"(\b[^.!?]*\b(?:approve|disapprove|support|oppose|favorable|unfavorable)\b[^.!?]*[.!?])",
    ),
    (
        "voting_statement",
        r"(\b[^.!?]*\b(?:vote|election|candidate|president)\b[^.!?]*[.!?])",
    ),
];

/// Compiled pattern library, built once at extractor construction.
///
/// This is the engine's only static configuration: process-wide, read-only
/// after construction. A detection rule that fails to compile is skipped
/// with a warning rather than aborting construction.
pub struct PatternLibrary {
    keyword_rules: Vec<(&'static str, Regex)>,
    survey_rules: Vec<(&'static str, Regex)>,
    pub(crate) numbering: Regex,
    pub(crate) bullet: Regex,
    pub(crate) parenthetical: Regex,
    pub(crate) bracketed: Regex,
    pub(crate) punct_run: Regex,
    pub(crate) sentence_split: Regex,
    pub(crate) all_digits: Regex,
    pub(crate) all_uppercase: Regex,
    pub(crate) all_punctuation: Regex,
    pub(crate) boilerplate: Regex,
    pub(crate) navigation: Regex,
}

impl PatternLibrary {
    /// Compile all detection and cleanup patterns.
    pub fn new() -> Self {
        Self {
            keyword_rules: compile_rules(KEYWORD_PATTERNS),
            survey_rules: compile_rules(SURVEY_PATTERNS),
            numbering: Regex::new(r"^\d+[.)]\s*").unwrap(),
            bullet: Regex::new(r"^[-•*]\s*").unwrap(),
            parenthetical: Regex::new(r"\([^)]*\)").unwrap(),
            bracketed: Regex::new(r"\[[^\]]*\]").unwrap(),
            punct_run: Regex::new(r"[.!?]{2,}").unwrap(),
            sentence_split: Regex::new(r"[.!?]+").unwrap(),
            all_digits: Regex::new(r"^\d+$").unwrap(),
            // Case-sensitive: "DO YOU AGREE" is shouting chrome, "Do you agree" is not.
            all_uppercase: Regex::new(r"^[A-Z\s]+$").unwrap(),
            all_punctuation: Regex::new(r"^[^\w\s]+$").unwrap(),
            boilerplate: phrase_regex(BOILERPLATE_PHRASES),
            navigation: phrase_regex(NAVIGATION_PHRASES),
        }
    }

    /// Compiled keyword rules, in declaration order.
    pub fn keyword_rules(&self) -> &[(&'static str, Regex)] {
        &self.keyword_rules
    }

    /// Compiled survey rules, in declaration order.
    pub fn survey_rules(&self) -> &[(&'static str, Regex)] {
        &self.survey_rules
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a rule table, skipping rules that fail to parse.
fn compile_rules(rules: &'static [(&'static str, &'static str)]) -> Vec<(&'static str, Regex)> {
    rules
        .iter()
        .filter_map(|(label, pattern)| {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => Some((*label, re)),
                Err(e) => {
                    warn!("Skipping malformed detection rule {}: {}", label, e);
                    None
                }
            }
        })
        .collect()
}

/// Build a case-insensitive alternation over a phrase table.
fn phrase_regex(phrases: &[&str]) -> Regex {
    RegexBuilder::new(&phrases.join("|"))
        .case_insensitive(true)
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        let library = PatternLibrary::new();
        assert_eq!(library.keyword_rules().len(), KEYWORD_PATTERNS.len());
        assert_eq!(library.survey_rules().len(), SURVEY_PATTERNS.len());
    }

    #[test]
    fn test_vocabulary_rules_match_whole_sentence() {
        let library = PatternLibrary::new();
        let (_, approval) = &library.keyword_rules()[2];

        let m = approval
            .find("Do you approve of the mayor's record?")
            .unwrap();
        assert_eq!(m.as_str(), "Do you approve of the mayor's record?");
    }

    #[test]
    fn test_survey_rules_capture_group_one() {
        let library = PatternLibrary::new();
        let (label, numbered) = &library.survey_rules()[0];
        assert_eq!(*label, "numbered_statement");

        let caps = numbered
            .captures("1. Do you support the new budget?")
            .unwrap();
        assert_eq!(&caps[1], "1. Do you support the new budget?");
    }

    #[test]
    fn test_boilerplate_is_case_insensitive() {
        let library = PatternLibrary::new();
        assert!(library.boilerplate.is_match("Copyright 2024 Example Corp"));
        assert!(library.navigation.is_match("Click HERE to continue"));
    }

    #[test]
    fn test_all_uppercase_is_case_sensitive() {
        let library = PatternLibrary::new();
        assert!(library.all_uppercase.is_match("SITE MAP NAVIGATION"));
        assert!(!library.all_uppercase.is_match("Do you agree"));
    }
}
