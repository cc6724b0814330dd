//! Quiz flow: ask a question, grade the selection, move on after a short delay.

use std::time::Duration;

use super::{Letter, QuizQuestion};

/// How long grading feedback stays on screen before the next question.
pub const QUIZ_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Showing question `index`, waiting for a submission.
    Asking(usize),
    /// Question `index` was graded; feedback is showing.
    Graded(usize),
    Complete,
}

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { answer: Letter, answer_text: String },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Wrong {
                answer,
                answer_text,
            } => format!("Wrong. Correct answer: {}) {}", answer, answer_text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing selected; state unchanged, the user should pick an answer.
    NoSelection,
    Graded(Feedback),
    /// Submission outside the Asking state; no effect.
    Ignored,
}

/// A quiz in progress for one subject.
#[derive(Debug, Clone)]
pub struct QuizSession {
    subject: String,
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: usize,
    last_feedback: Option<Feedback>,
}

impl QuizSession {
    pub fn new(subject: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            subject: subject.into(),
            questions,
            state: QuizState::NotStarted,
            score: 0,
            last_feedback: None,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Feedback for the most recently graded question.
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    /// Begin at the first question. A quiz with no questions completes immediately.
    pub fn start(&mut self) {
        if self.state != QuizState::NotStarted {
            return;
        }
        self.state = if self.questions.is_empty() {
            QuizState::Complete
        } else {
            QuizState::Asking(0)
        };
    }

    /// Question index currently on screen (asking or graded).
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Asking(i) | QuizState::Graded(i) => Some(i),
            QuizState::NotStarted | QuizState::Complete => None,
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// Grade `selection` against the current question.
    pub fn submit(&mut self, selection: Option<Letter>) -> SubmitOutcome {
        let QuizState::Asking(index) = self.state else {
            return SubmitOutcome::Ignored;
        };
        let Some(selected) = selection else {
            return SubmitOutcome::NoSelection;
        };
        let question = &self.questions[index];
        let feedback = if selected == question.answer {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Wrong {
                answer: question.answer,
                answer_text: question.answer_text().to_string(),
            }
        };
        self.state = QuizState::Graded(index);
        self.last_feedback = Some(feedback.clone());
        SubmitOutcome::Graded(feedback)
    }

    /// Leave the Graded state: next question, or Complete after the last one.
    pub fn advance(&mut self) {
        let QuizState::Graded(index) = self.state else {
            return;
        };
        self.last_feedback = None;
        self.state = if index + 1 < self.questions.len() {
            QuizState::Asking(index + 1)
        } else {
            QuizState::Complete
        };
    }

    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Complete
    }

    /// Final score as `score / total`.
    pub fn summary(&self) -> String {
        format!("{} / {}", self.score, self.total())
    }
}
