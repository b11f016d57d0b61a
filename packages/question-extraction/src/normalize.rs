//! Text normalization applied before detection.
//!
//! Scraped pages and LLM responses occasionally contain foreign-script
//! artifacts (CJK runs injected by upstream tooling). The normalizer strips
//! those and squashes whitespace so every downstream component sees the
//! same shape of text.

/// Characters treated as foreign-script noise (CJK Unified Ideographs).
fn is_foreign_script(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Normalize a text blob: strip foreign-script characters, collapse runs
/// of horizontal whitespace within each line, and trim the edges.
///
/// Line breaks are preserved so line-oriented detection (the question-mark
/// scanner) still works; full whitespace collapse happens later, in
/// candidate cleaning and dedup keys.
///
/// Pure function: never fails, empty in means empty out.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_foreign_script(*c)).collect();

    stripped
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_strips_foreign_script() {
        assert_eq!(
            normalize("Do you approve 你好 of the mayor?"),
            "Do you approve of the mayor?"
        );
    }

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("Do  you \t approve?"), "Do you approve?");
    }

    #[test]
    fn test_preserves_line_structure() {
        let normalized = normalize("First  question?\nSecond   question?");
        assert_eq!(normalized, "First question?\nSecond question?");
        assert_eq!(normalized.lines().count(), 2);
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize("\n\n  Do you approve?  \n"), "Do you approve?");
    }
}
