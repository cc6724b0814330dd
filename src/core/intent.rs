//! Keyword-based intent detection for chat messages.

/// What the user is asking for, when it matches one of the canned intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quiz,
    Explain,
    Summary,
    Help,
}

const QUIZ_KEYWORDS: &[&str] = &["quiz", "test me", "questions", "practice questions"];
const EXPLAIN_KEYWORDS: &[&str] = &["explain", "explanation", "clarify", "understand"];
const SUMMARY_KEYWORDS: &[&str] = &["summarize", "summary", "short version"];
const HELP_KEYWORDS: &[&str] = &["help", "how to study", "tips", "advice", "improve", "technique"];

/// Keyword sets in priority order.
const INTENTS: &[(Intent, &[&str])] = &[
    (Intent::Quiz, QUIZ_KEYWORDS),
    (Intent::Explain, EXPLAIN_KEYWORDS),
    (Intent::Summary, SUMMARY_KEYWORDS),
    (Intent::Help, HELP_KEYWORDS),
];

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Quiz => "quiz",
            Intent::Explain => "explain",
            Intent::Summary => "summary",
            Intent::Help => "help",
        }
    }

    /// Assistant reply shown right away, before the model answers.
    pub fn canned_reply(self) -> &'static str {
        match self {
            Intent::Quiz => "Sure! What topic or subject would you like to be quizzed on?",
            Intent::Explain => {
                "I'd be happy to explain! What specific concept or topic do you need help with?"
            }
            Intent::Summary => "Of course! Please tell me what you want summarized.",
            Intent::Help => {
                "Here are some study tips: Try the Pomodoro technique, use active recall, and space out your revision. Would you like more details or a study plan?"
            }
        }
    }
}

/// Label for an optional intent; `None` renders as "none".
pub fn label(intent: Option<Intent>) -> &'static str {
    intent.map(Intent::as_str).unwrap_or("none")
}

/// First intent (in priority order) with a keyword contained in `text`, case-insensitively.
pub fn detect_intent(text: &str) -> Option<Intent> {
    let lower = text.to_lowercase();
    INTENTS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(intent, _)| *intent)
}
