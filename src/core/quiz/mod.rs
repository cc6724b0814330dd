//! Multiple-choice quizzes: question records, transcript parsing, and the ask/grade flow.

mod parse;
mod session;


use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use parse::parse_quiz;
pub use session::{Feedback, QUIZ_FEEDBACK_DELAY, QuizSession, QuizState, SubmitOutcome};

/// Answer letter of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
        }
    }

    /// Next letter, wrapping from D to A.
    pub fn next(self) -> Self {
        match self {
            Letter::A => Letter::B,
            Letter::B => Letter::C,
            Letter::C => Letter::D,
            Letter::D => Letter::A,
        }
    }

    /// Previous letter, wrapping from A to D.
    pub fn prev(self) -> Self {
        match self {
            Letter::A => Letter::D,
            Letter::B => Letter::A,
            Letter::C => Letter::B,
            Letter::D => Letter::C,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    /// Accepts exactly one letter A–D, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c).ok_or_else(|| format!("not an answer letter: {}", s)),
            _ => Err(format!("not an answer letter: {}", s)),
        }
    }
}

/// One parsed multiple-choice question. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: BTreeMap<Letter, String>,
    pub answer: Letter,
}

impl QuizQuestion {
    /// Text of the correct choice, empty if the model gave no option for that letter.
    pub fn answer_text(&self) -> &str {
        self.choices
            .get(&self.answer)
            .map(String::as_str)
            .unwrap_or("")
    }
}
