//! The LLM prompt for fallback question extraction.

use sha2::{Digest, Sha256};

/// Sentinel the collaborator returns when the content holds no questions.
///
/// Matched case-insensitively anywhere in the response.
pub const NO_QUESTIONS_SENTINEL: &str = "NO_QUESTIONS_FOUND";

/// Prompt for extracting verbatim survey questions from scraped content.
pub const FALLBACK_PROMPT: &str = r#"Extract EXISTING survey questions from this polling/survey content. Find questions that already exist - do NOT create new ones.

SOURCE: {url}

CONTENT:
{content}

EXTRACTION RULES:
1. Only extract questions that already exist in the content
2. Questions must end with "?" or be clear survey questions
3. Questions should be 15-250 characters long
4. Focus on polling/survey questions (opinions, approval, voting, policy, demographics)
5. Return maximum {max_questions} questions
6. Format: One question per line, no numbering
7. If no actual questions found, return "NO_QUESTIONS_FOUND"

EXISTING SURVEY QUESTIONS:"#;

/// Format the fallback prompt, bounding content to `content_limit` characters.
pub fn format_fallback_prompt(
    content: &str,
    url: &str,
    max_questions: usize,
    content_limit: usize,
) -> String {
    let sample: String = content.chars().take(content_limit).collect();
    let source = if url.is_empty() { "Polling Website" } else { url };

    FALLBACK_PROMPT
        .replace("{url}", source)
        .replace("{content}", &sample)
        .replace("{max_questions}", &max_questions.to_string())
}

/// Generate a hash of the fallback prompt for cache invalidation.
pub fn fallback_prompt_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(FALLBACK_PROMPT.as_bytes());
    format!("{:x}", hasher.finalize())
}
