//! Order-preserving deduplication of question text.

use indexmap::IndexSet;

/// Normalized comparison key for a question.
///
/// Lowercased, whitespace-collapsed, with trailing sentence terminators
/// stripped. Terminator stripping matters because the sentence-boundary
/// scanner re-emits question-marked lines without their `?`; both forms
/// must collapse to one key so the first-seen (punctuated) form wins.
pub fn dedup_key(text: &str) -> String {
    let collapsed = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    collapsed
        .trim_end_matches(['.', '!', '?'])
        .trim_end()
        .to_string()
}

/// Keep the first occurrence of each question in arrival order.
///
/// Idempotent: deduping an already-deduped sequence returns it unchanged.
pub fn dedupe_questions<I>(questions: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut unique = Vec::new();

    for question in questions {
        let key = dedup_key(&question);
        if !key.is_empty() && seen.insert(key) {
            unique.push(question);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let result = dedupe_questions(strings(&[
            "Do you approve of the governor?",
            "do you  approve of the governor?",
            "Do you approve of the governor",
            "Would you vote for the incumbent?",
        ]));

        assert_eq!(
            result,
            strings(&[
                "Do you approve of the governor?",
                "Would you vote for the incumbent?"
            ])
        );
    }

    #[test]
    fn test_idempotent() {
        let input = strings(&[
            "Do you approve of the governor?",
            "Would you vote for the incumbent?",
            "Do you approve of the governor?",
        ]);

        let once = dedupe_questions(input);
        let twice = dedupe_questions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_drops_terminator_only_strings() {
        assert!(dedupe_questions(strings(&["???", "  "])).is_empty());
    }
}
