//! Prompt texts: system instruction, greeting, and the quiz/to-do request templates.
//!
//! Loaded from `config/prompts.json` (embedded at compile time, validated by build.rs).

use std::sync::OnceLock;

use serde::Deserialize;

/// Placeholder replaced by the subject in request templates.
const SUBJECT_PLACEHOLDER: &str = "{subject}";

#[derive(Debug, Deserialize)]
pub struct Prompts {
    /// System instruction sent with every request (plain-text replies only).
    pub system: String,
    /// First assistant message shown on an empty transcript.
    pub greeting: String,
    quiz: String,
    todo: String,
}

impl Prompts {
    /// Request asking for a 4-question multiple choice quiz on `subject`.
    pub fn quiz_request(&self, subject: &str) -> String {
        self.quiz.replace(SUBJECT_PLACEHOLDER, subject)
    }

    /// Request asking for a one-task-per-line study to-do list on `subject`.
    pub fn todo_request(&self, subject: &str) -> String {
        self.todo.replace(SUBJECT_PLACEHOLDER, subject)
    }
}

fn load_prompts() -> Prompts {
    let json = include_str!("../../config/prompts.json");
    serde_json::from_str(json).expect("prompts.json must be valid")
}

static PROMPTS: OnceLock<Prompts> = OnceLock::new();

/// Returns the prompt set, parsing the embedded config on first access.
pub fn prompts() -> &'static Prompts {
    PROMPTS.get_or_init(load_prompts)
}

#[cfg(test)]
mod tests {
    use super::prompts;

    #[test]
    fn system_prompt_asks_for_plain_text() {
        assert!(prompts().system.contains("plain text"));
        assert!(!prompts().greeting.is_empty());
    }

    #[test]
    fn templates_substitute_subject() {
        let quiz = prompts().quiz_request("Physics");
        assert!(quiz.contains("quiz about Physics"));
        assert!(quiz.contains("Question:"));
        assert!(!quiz.contains("{subject}"));

        let todo = prompts().todo_request("Chemistry");
        assert!(todo.contains("studying Chemistry"));
    }
}
