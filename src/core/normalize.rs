//! Strip markdown artifacts from model replies so they display as plain text.
//!
//! `clean_response` flattens a chat reply. `clean_lines` is for replies that are parsed
//! line by line afterwards (quizzes, to-do lists): it never joins lines and leaves
//! characters such as `#` in "C#" or `*` in "2 * 3" alone.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    bold: Regex,
    italic: Regex,
    code: Regex,
    heading: Regex,
    star: Regex,
    line_break: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

/// Patterns confined to a single line.
struct LinePatterns {
    bold: Regex,
    /// Emphasis only when the stars hug the text, so `2 * 3 * 1` is kept.
    italic: Regex,
    code: Regex,
    /// Heading or bullet marker at the start of the line, followed by a space.
    leading_marker: Regex,
}

static LINE_PATTERNS: OnceLock<LinePatterns> = OnceLock::new();

fn line_patterns() -> &'static LinePatterns {
    LINE_PATTERNS.get_or_init(|| LinePatterns {
        bold: Regex::new(r"\*\*([^*\n]+)\*\*").expect("line bold pattern"),
        italic: Regex::new(r"\*([^\s*](?:[^*\n]*[^\s*])?)\*").expect("line italic pattern"),
        code: Regex::new(r"`([^`\n]+)`").expect("line code pattern"),
        leading_marker: Regex::new(r"^[ \t]*(?:#+|\*+|-)[ \t]+").expect("leading marker pattern"),
    })
}

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        bold: Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"),
        italic: Regex::new(r"\*([^*]+)\*").expect("italic pattern"),
        code: Regex::new(r"`([^`]+)`").expect("code pattern"),
        heading: Regex::new(r"#+\s*").expect("heading pattern"),
        star: Regex::new(r"\*").expect("star pattern"),
        line_break: Regex::new(r"\s*\n\s*").expect("line break pattern"),
    })
}

/// Remove bold, italic, inline code, heading markers and stray stars, keeping the
/// inner text. Whitespace around line breaks collapses to one `\n`; the result is trimmed.
pub fn clean_response(text: &str) -> String {
    let p = patterns();
    // Order matters: bold before italic, so `**x**` is not read as two italics.
    let text = p.bold.replace_all(text, "$1");
    let text = p.italic.replace_all(&text, "$1");
    let text = p.code.replace_all(&text, "$1");
    let text = p.heading.replace_all(&text, "");
    let text = p.star.replace_all(&text, "");
    let text = p.line_break.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Remove markdown markers line by line, keeping the line structure intact.
pub fn clean_lines(text: &str) -> String {
    let p = line_patterns();
    text.lines()
        .map(|line| {
            let line = p.bold.replace_all(line, "$1");
            let line = p.italic.replace_all(&line, "$1");
            let line = p.code.replace_all(&line, "$1");
            p.leading_marker.replace(&line, "").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{clean_lines, clean_response};

    #[test]
    fn strips_inline_markers_keeping_text() {
        assert_eq!(
            clean_response("This is **bold**, *italic* and `code`."),
            "This is bold, italic and code."
        );
    }

    #[test]
    fn strips_headings() {
        assert_eq!(clean_response("## Newton's laws\nForce"), "Newton's laws\nForce");
        assert_eq!(clean_response("#Title"), "Title");
    }

    #[test]
    fn removes_stray_stars() {
        assert_eq!(clean_response("* item one\n* item two"), "item one\nitem two");
        assert_eq!(clean_response("Note:* see below"), "Note: see below");
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(
            clean_response("First paragraph.\n\n\n   Second paragraph.  \n\nThird."),
            "First paragraph.\nSecond paragraph.\nThird."
        );
    }

    #[test]
    fn trims_and_handles_empty() {
        assert_eq!(clean_response(""), "");
        assert_eq!(clean_response("   \n  "), "");
        assert_eq!(clean_response("  plain  "), "plain");
    }

    #[test]
    fn bold_inside_sentence_with_multiple_words() {
        assert_eq!(
            clean_response("**Photosynthesis** converts *light energy* into sugar"),
            "Photosynthesis converts light energy into sugar"
        );
    }

    #[test]
    fn line_cleaning_keeps_hashes_and_arithmetic() {
        assert_eq!(clean_lines("D) C#\nAnswer: D"), "D) C#\nAnswer: D");
        assert_eq!(clean_lines("What is 2 * 3?"), "What is 2 * 3?");
        assert_eq!(clean_lines("C) 2 * 3 * 1 = 7"), "C) 2 * 3 * 1 = 7");
    }

    #[test]
    fn line_cleaning_strips_markers() {
        assert_eq!(
            clean_lines("**Question:** What is *mass*?\n## Answer: `B`"),
            "Question: What is mass?\nAnswer: B"
        );
        assert_eq!(clean_lines("* Learn C#\n- Write tests"), "Learn C#\nWrite tests");
    }

    #[test]
    fn line_cleaning_keeps_line_count() {
        assert_eq!(clean_lines("a\n\n  b  ").lines().count(), 3);
    }
}
