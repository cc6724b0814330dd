//! Guess the study subject of a chat message.
//!
//! Known subjects are matched first (declaration order, substring match); otherwise
//! the last word that is not a stop word is used. False positives are expected.

use std::sync::OnceLock;

use regex::Regex;

/// Known study subjects, scanned in order. First match wins, not longest.
pub const KNOWN_SUBJECTS: &[&str] = &[
    "c++",
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "physics",
    "math",
    "mathematics",
    "biology",
    "chemistry",
    "english",
    "history",
    "geography",
    "science",
    "algebra",
    "geometry",
    "calculus",
    "statistics",
    "literature",
    "economics",
    "philosophy",
    "art",
    "music",
    "computer science",
    "programming",
    "sql",
    "networking",
    "machine learning",
    "ai",
    "artificial intelligence",
    "data science",
    "french",
    "spanish",
    "german",
    "arabic",
    "italian",
    "chinese",
    "japanese",
];

/// Words never taken as a subject on their own.
pub const STOP_WORDS: &[&str] = &[
    "some", "about", "me", "a", "an", "the", "on", "in", "to", "for", "with", "of", "at", "by",
    "from", "and", "or", "is", "are", "was", "were", "it", "that", "this", "as", "be", "do",
    "does", "did",
];

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern"))
}

/// Upper-case the first character and lower-case the rest ("c++" -> "C++").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Extract a capitalized subject from `text`, or `None` if nothing usable remains.
pub fn extract_subject(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    if let Some(subject) = KNOWN_SUBJECTS.iter().find(|s| lower.contains(*s)) {
        return Some(capitalize(subject));
    }

    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .last()
        .map(capitalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subject_wins_over_later_tokens() {
        assert_eq!(
            extract_subject("I need help with c++ pointers").as_deref(),
            Some("C++")
        );
    }

    #[test]
    fn known_subject_is_case_insensitive() {
        assert_eq!(extract_subject("Teach me PHYSICS").as_deref(), Some("Physics"));
    }

    #[test]
    fn first_declared_match_wins_not_longest() {
        // "math" is declared before "mathematics".
        assert_eq!(extract_subject("mathematics homework").as_deref(), Some("Math"));
        assert_eq!(
            extract_subject("intro to computer science").as_deref(),
            Some("Science")
        );
    }

    #[test]
    fn falls_back_to_last_non_stop_word() {
        assert_eq!(
            extract_subject("tell me about that thing").as_deref(),
            Some("Thing")
        );
        assert_eq!(extract_subject("Photosynthesis").as_deref(), Some("Photosynthesis"));
    }

    #[test]
    fn only_stop_words_gives_none() {
        assert_eq!(extract_subject("is it about the"), None);
        assert_eq!(extract_subject(""), None);
        assert_eq!(extract_subject("?!"), None);
    }

    #[test]
    fn capitalize_lowers_the_rest() {
        assert_eq!(capitalize("machine learning"), "Machine learning");
        assert_eq!(capitalize("DNA"), "Dna");
        assert_eq!(capitalize(""), "");
    }
}
